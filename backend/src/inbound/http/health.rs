//! Health endpoint for orchestration and load balancers.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Health report returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Health {
    /// Fixed `"up"` while the process is serving traffic.
    #[schema(example = "up")]
    pub status: String,
    /// Configured service name, omitted when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Report service availability. There is no failure path: reaching the
/// handler is the signal.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is up", body = Health)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> web::Json<Health> {
    web::Json(Health {
        status: "up".to_owned(),
        name: state.service_name.clone(),
    })
}
