//! Behaviour tests for the user service error translation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rstest::rstest;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::users_service::UserService;
use crate::domain::{ErrorCode, User};

#[derive(Clone, Copy)]
enum StubFailure {
    Connection,
    Query,
}

impl StubFailure {
    fn to_error(self) -> UserPersistenceError {
        match self {
            Self::Connection => UserPersistenceError::connection("database unavailable"),
            Self::Query => UserPersistenceError::query("database query failed"),
        }
    }
}

#[derive(Default)]
struct StubState {
    stored_user: Option<User>,
    failure: Option<StubFailure>,
}

#[derive(Default)]
struct StubUserRepository {
    state: Mutex<StubState>,
}

impl StubUserRepository {
    fn with_user(user: User) -> Self {
        Self {
            state: Mutex::new(StubState {
                stored_user: Some(user),
                ..StubState::default()
            }),
        }
    }

    fn set_failure(&self, failure: StubFailure) {
        self.state.lock().expect("state lock").failure = Some(failure);
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure {
            return Err(failure.to_error());
        }
        Ok(state
            .stored_user
            .as_ref()
            .filter(|user| user.user_name().as_ref() == user_name)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure {
            return Err(failure.to_error());
        }
        state.stored_user = Some(user.clone());
        Ok(user)
    }
}

fn user(name: &str) -> User {
    User::try_from_parts(name, format!("{name}@example.com"), "555-0100")
        .expect("fixture user is valid")
}

#[tokio::test]
async fn get_user_returns_the_stored_user() {
    let stored = user("ada");
    let service = UserService::new(Arc::new(StubUserRepository::with_user(stored.clone())));

    let found = service.get_user("ada").await.expect("lookup succeeds");

    assert_eq!(found, stored);
}

#[tokio::test]
async fn get_user_maps_missing_rows_to_user_not_found() {
    let service = UserService::new(Arc::new(StubUserRepository::default()));

    let err = service
        .get_user("ghost")
        .await
        .expect_err("missing user fails");

    assert_eq!(err.code(), ErrorCode::UserNotFound);
    assert!(err.message().contains("ghost"));
}

#[rstest]
#[case(StubFailure::Connection)]
#[case(StubFailure::Query)]
#[tokio::test]
async fn get_user_maps_storage_failures_to_database_error(#[case] failure: StubFailure) {
    let repository = Arc::new(StubUserRepository::default());
    repository.set_failure(failure);
    let service = UserService::new(repository);

    let err = service
        .get_user("ada")
        .await
        .expect_err("storage failures surface");

    assert_eq!(err.code(), ErrorCode::DatabaseError);
}

#[tokio::test]
async fn create_user_returns_the_stored_record() {
    let service = UserService::new(Arc::new(StubUserRepository::default()));

    let created = service
        .create_user(user("grace"))
        .await
        .expect("creation succeeds");

    assert_eq!(created, user("grace"));
}

#[rstest]
#[case(StubFailure::Connection)]
#[case(StubFailure::Query)]
#[tokio::test]
async fn create_user_maps_storage_failures_to_database_error(#[case] failure: StubFailure) {
    let repository = Arc::new(StubUserRepository::default());
    repository.set_failure(failure);
    let service = UserService::new(repository);

    let err = service
        .create_user(user("grace"))
        .await
        .expect_err("storage failures surface");

    assert_eq!(err.code(), ErrorCode::DatabaseError);
}

#[tokio::test]
async fn create_user_with_new_feature_matches_the_default_contract() {
    let service = UserService::new(Arc::new(StubUserRepository::default()));

    let created = service
        .create_user_with_new_feature(user("grace"))
        .await
        .expect("creation succeeds");

    assert_eq!(created, user("grace"));
}
