//! Domain primitives and services.
//!
//! Purpose: define strongly typed domain entities and the orchestration
//! around them, free of transport and persistence concerns. Adapters in
//! `inbound` and `outbound` translate to and from this layer.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — semantic error catalogue and error value.
//! - `User` and its validated field newtypes.
//! - `FeatureToggles` / `ToggleOverrides` — per-request toggle resolution.
//! - `UserService` — create/get orchestration over the storage port.

pub mod error;
pub mod ports;
pub mod toggles;
pub mod user;
pub mod users_service;

#[cfg(test)]
mod users_service_tests;

pub use self::error::{Error, ErrorCode};
pub use self::toggles::{FeatureToggles, ToggleOverrides};
pub use self::user::{Email, PhoneNumber, User, UserName, UserValidationError};
pub use self::users_service::UserService;
