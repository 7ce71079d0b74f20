//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and the domain `User`, and
//! maps infrastructure failures onto the port error type. No business logic
//! lives here; in particular user-name uniqueness is delegated to the
//! primary-key constraint.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserRepository};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } | PoolError::Ping { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::query("duplicate key value violates user name uniqueness")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) | DieselError::QueryBuilderError(_) => {
            UserPersistenceError::query("database error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
///
/// Rows were validated on insert, so a failure here means the table holds
/// data this service did not write.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_parts(row.username, row.email, row.phone_number)
        .map_err(|err| UserPersistenceError::query(format!("stored user record is invalid: {err}")))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::username.eq(user_name))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: User) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            username: user.user_name().as_ref(),
            email: user.email().as_ref(),
            phone_number: user.phone_number().as_ref(),
        };

        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("no connections"));
        assert_eq!(
            mapped,
            UserPersistenceError::connection("no connections")
        );
    }

    #[rstest]
    fn not_found_maps_to_a_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(mapped, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn valid_rows_convert_to_domain_users() {
        let row = UserRow {
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            phone_number: "555-0100".to_owned(),
        };

        let user = row_to_user(row).expect("row converts");
        assert_eq!(user.user_name().as_ref(), "ada");
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let row = UserRow {
            username: "ada lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone_number: "555-0100".to_owned(),
        };

        let err = row_to_user(row).expect_err("corrupt row fails");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
