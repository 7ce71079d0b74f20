//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto wire
//! status codes and the JSON error envelope in `inbound::http::error`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable identifier describing the failure category.
///
/// The enum is the whole catalogue: every kind the service can report is a
/// variant, each with exactly one wire identifier and one HTTP status.
/// Duplicate identifiers are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request is malformed or missing required input.
    BadRequest,
    /// The request body failed a validation rule.
    InvalidInput,
    /// The requested user does not exist.
    UserNotFound,
    /// A user-related failure attributable to the client but surfaced late.
    UserClientError,
    /// The storage layer failed.
    DatabaseError,
    /// An unexpected error occurred inside the service.
    InternalServerError,
}

impl ErrorCode {
    /// Wire identifier written into the `error_id` field of error responses.
    pub fn error_id(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidInput => "INVALID_INPUT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserClientError => "USER_CLIENT_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Domain error value: a semantic kind plus a human-readable detail message.
///
/// Callers layer contextual detail with [`Error::context`]; the kind survives
/// any number of layers, so the adapter always resolves the original
/// category.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found("no row for ada").context("lookup failed");
/// assert_eq!(err.code(), ErrorCode::UserNotFound);
/// assert_eq!(err.message(), "lookup failed: no row for ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error of the given kind.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Wrap the error with a contextual prefix, keeping the kind.
    pub fn context(self, prefix: impl AsRef<str>) -> Self {
        Self {
            code: self.code,
            message: format!("{}: {}", prefix.as_ref(), self.message),
        }
    }

    /// Semantic kind used to select the wire status and identifier.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::UserNotFound`].
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UserClientError`].
    pub fn client_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserClientError, message)
    }

    /// Convenience constructor for [`ErrorCode::DatabaseError`].
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalServerError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
