//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AdminIdentity`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
