//! Users API handlers.
//!
//! ```text
//! GET /users/{user_name}
//! POST /users {"name":"ada_lovelace","email":"ada@example.com","phone_number":"555-0100"}
//! ```

use std::collections::HashMap;

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, ToggleOverrides, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validated_user;

/// Toggle selecting the feature-flagged creation path.
const ENABLE_NEW_FEATURE: &str = "enableNewFeature";

/// Creation request body for `POST /users`.
///
/// Example JSON:
/// `{"name":"ada_lovelace","email":"ada@example.com","phone_number":"555-0100"}`
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserCreationRequest {
    /// Requested user name, restricted to `[A-Za-z0-9_]`.
    pub name: String,
    /// Contact email address, treated as opaque non-blank text.
    pub email: String,
    /// Contact phone number, treated as opaque non-blank text.
    pub phone_number: String,
}

/// Look up a user by user name.
#[utoipa::path(
    get,
    path = "/users/{user_name}",
    params(
        ("user_name" = String, Path, description = "User name to look up")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Blank user name", body = crate::inbound::http::error::ErrorBody),
        (status = 404, description = "User not found", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_name}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user_name = path.into_inner();
    if user_name.trim().is_empty() {
        return Err(Error::bad_request("you must provide a valid user name"));
    }

    let user = state
        .users
        .get_user(&user_name)
        .await
        .map_err(|err| err.context(format!("error retrieving user with user name {user_name}")))?;
    Ok(web::Json(user))
}

/// Create a user.
///
/// The optional `enableNewFeature` query parameter overrides the configured
/// toggle for this request only and selects the feature-flagged creation
/// path.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserCreationRequest,
    params(
        ("enableNewFeature" = Option<String>, Query, description = "Per-request toggle override")
    ),
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Validation failure", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserCreationRequest>,
    query: web::Query<HashMap<String, String>>,
) -> ApiResult<web::Json<User>> {
    let UserCreationRequest {
        name,
        email,
        phone_number,
    } = payload.into_inner();
    let user = validated_user(&name, &email, &phone_number)?;

    let overrides = ToggleOverrides::from_query_pairs(query.into_inner());
    let created = if state.toggles.is_enabled(ENABLE_NEW_FEATURE, &overrides) {
        state.users.create_user_with_new_feature(user).await
    } else {
        state.users.create_user(user).await
    }
    .map_err(|err| err.context("could not create user"))?;

    Ok(web::Json(created))
}
