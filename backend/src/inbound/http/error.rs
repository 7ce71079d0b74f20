//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the JSON error envelope and status
//! codes. This impl is the single point where failures cross onto the wire,
//! so exactly one response write happens per request: either the handler's
//! success write or this error write.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON envelope written for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable identifier of the matched error kind.
    #[schema(example = "USER_NOT_FOUND")]
    pub error_id: String,
    /// Dynamic detail message carried by the error value.
    #[schema(example = "could not find user with user name ada")]
    pub error_message: String,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            error_id: error.code().error_id().to_owned(),
            error_message: error.message().to_owned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::UserClientError
        | ErrorCode::DatabaseError
        | ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        error!(error_id = self.code().error_id(), detail = %self, "request failed");
        HttpResponse::build(self.status_code()).json(ErrorBody::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak framework details to clients; unmatched failures fall
        // back to the internal kind.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("internal server error")
    }
}

/// Map body-deserialisation failures onto the structured envelope.
///
/// Installed via `JsonConfig` so even framework-level parse failures reach
/// clients as `BAD_REQUEST` with the standard body.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::bad_request(format!("could not parse the user request: {err}")).into()
}
