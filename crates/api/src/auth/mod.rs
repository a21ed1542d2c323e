//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`credentials`] -- the configured admin account.
//! - [`revocation`] -- logged-out token ids, held until they expire.

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod revocation;
