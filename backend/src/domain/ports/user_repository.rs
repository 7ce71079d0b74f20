//! Port abstraction for user persistence adapters and their errors.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{User, UserName};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage collaborator consumed by the user service.
///
/// User names are the natural key; uniqueness is enforced here, not by the
/// service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by user name, `None` when no row matches.
    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user record and return the stored row.
    async fn insert(&self, user: User) -> Result<User, UserPersistenceError>;
}

/// In-memory [`UserRepository`] used by tests and database-less runs.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    users: Mutex<HashMap<UserName, User>>,
}

impl FixtureUserRepository {
    /// Create an empty fixture repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fixture repository pre-populated with the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|user| (user.user_name().clone(), user))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.lock().expect("fixture user state lock");
        Ok(users
            .iter()
            .find(|(name, _)| name.as_ref() == user_name)
            .map(|(_, user)| user.clone()))
    }

    async fn insert(&self, user: User) -> Result<User, UserPersistenceError> {
        let mut users = self.users.lock().expect("fixture user state lock");
        if users.contains_key(user.user_name()) {
            return Err(UserPersistenceError::query(format!(
                "duplicate key value violates user name uniqueness: {}",
                user.user_name()
            )));
        }
        users.insert(user.user_name().clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(name: &str) -> User {
        User::try_from_parts(name, format!("{name}@example.com"), "555-0100")
            .expect("fixture user is valid")
    }

    #[tokio::test]
    async fn find_by_name_returns_stored_users() {
        let repository = FixtureUserRepository::with_users([user("ada")]);

        let found = repository
            .find_by_name("ada")
            .await
            .expect("lookup succeeds");

        assert_eq!(found, Some(user("ada")));
    }

    #[tokio::test]
    async fn find_by_name_returns_none_for_missing_users() {
        let repository = FixtureUserRepository::new();

        let found = repository
            .find_by_name("ghost")
            .await
            .expect("lookup succeeds");

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_round_trips_through_lookup() {
        let repository = FixtureUserRepository::new();

        let created = repository.insert(user("grace")).await.expect("insert");
        let found = repository
            .find_by_name("grace")
            .await
            .expect("lookup succeeds");

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_user_names() {
        let repository = FixtureUserRepository::with_users([user("ada")]);

        let err = repository
            .insert(user("ada"))
            .await
            .expect_err("duplicate insert fails");

        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn error_constructors_render_messages() {
        assert_eq!(
            UserPersistenceError::connection("refused").to_string(),
            "user repository connection failed: refused"
        );
        assert_eq!(
            UserPersistenceError::query("bad sql").to_string(),
            "user repository query failed: bad sql"
        );
    }
}
