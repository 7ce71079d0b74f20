//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they depend
//! only on the domain service and the read-only toggle set, and remain
//! testable without I/O.

use crate::domain::{FeatureToggles, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User orchestration service over the storage port.
    pub users: UserService,
    /// Static feature-toggle defaults, read-only after startup.
    pub toggles: FeatureToggles,
    /// Service name reported by the health endpoint, when configured.
    pub service_name: Option<String>,
}

impl HttpState {
    /// Bundle the handler dependencies.
    pub fn new(users: UserService, toggles: FeatureToggles, service_name: Option<String>) -> Self {
        Self {
            users,
            toggles,
            service_name,
        }
    }
}
