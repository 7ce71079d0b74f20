//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the health and user endpoints plus the shared error
//! envelope schema. The generated specification backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, User};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::Health;
use crate::inbound::http::users::UserCreationRequest;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "HTTP interface for user creation and lookup plus a health check."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
    ),
    components(schemas(User, UserCreationRequest, Health, ErrorBody, ErrorCode)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
