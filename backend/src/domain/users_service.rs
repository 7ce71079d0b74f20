//! User orchestration service.
//!
//! Translates storage-layer outcomes into the semantic error kinds the HTTP
//! adapter knows how to report. Uniqueness of user names is enforced by the
//! storage collaborator, not here.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, User};

/// Orchestrates user creation and retrieval against the storage port.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::database_error(message)
        }
    }
}

impl UserService {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a user by user name.
    ///
    /// A missing row becomes [`crate::domain::ErrorCode::UserNotFound`]; any
    /// other storage failure becomes
    /// [`crate::domain::ErrorCode::DatabaseError`].
    pub async fn get_user(&self, user_name: &str) -> Result<User, Error> {
        let maybe_user = self
            .repository
            .find_by_name(user_name)
            .await
            .map_err(map_persistence_error)?;

        maybe_user.ok_or_else(|| {
            Error::user_not_found(format!("could not find user with user name {user_name}"))
        })
    }

    /// Persist a new user and return the stored record.
    pub async fn create_user(&self, user: User) -> Result<User, Error> {
        self.repository
            .insert(user)
            .await
            .map_err(map_persistence_error)
    }

    /// Feature-toggled creation variant.
    ///
    /// Contractually identical to [`UserService::create_user`]; kept as the
    /// branch target selected by the `enableNewFeature` toggle.
    pub async fn create_user_with_new_feature(&self, user: User) -> Result<User, Error> {
        debug!(user_name = %user.user_name(), "creating user through the new-feature path");
        self.create_user(user).await
    }
}
