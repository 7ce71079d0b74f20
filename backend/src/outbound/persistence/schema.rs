//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly. They are used by
//! Diesel for compile-time query validation and type-safe SQL generation.
//! Schema management itself (DDL, migrations) is owned by an external tool.

diesel::table! {
    /// Registered users.
    ///
    /// The user name is the natural key; uniqueness is enforced by the
    /// primary-key constraint.
    users (username) {
        /// Primary key: unique user name restricted to `[A-Za-z0-9_]`.
        username -> Varchar,
        /// Contact email address.
        email -> Varchar,
        /// Contact phone number.
        phone_number -> Varchar,
    }
}
