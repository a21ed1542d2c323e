//! The single configured admin account.

use crate::auth::password::verify_password;

/// Admin login credentials: an email and an Argon2id PHC hash of the password.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password_hash: String,
}

impl AdminCredentials {
    /// Load admin credentials from environment variables.
    ///
    /// | Env Var               | Required |
    /// |-----------------------|----------|
    /// | `ADMIN_EMAIL`         | **yes**  |
    /// | `ADMIN_PASSWORD_HASH` | **yes**  |
    ///
    /// Generate a hash with `burnerhub-api hash-password <password>`.
    ///
    /// # Panics
    ///
    /// Panics if either variable is missing or empty, or the hash is not a
    /// valid PHC string.
    pub fn from_env() -> Self {
        let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in the environment");
        assert!(!email.is_empty(), "ADMIN_EMAIL must not be empty");

        let password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(
            crate::auth::password::is_valid_hash(&password_hash),
            "ADMIN_PASSWORD_HASH must be an Argon2 PHC string"
        );

        Self {
            email,
            password_hash,
        }
    }

    /// `true` only when `email` matches exactly and `password` verifies.
    ///
    /// The password hash is checked whatever the email, so a wrong email costs
    /// the same Argon2 work as a wrong password.
    pub fn verify(&self, email: &str, password: &str) -> Result<bool, argon2::password_hash::Error> {
        let password_ok = verify_password(password, &self.password_hash)?;
        Ok(password_ok && email == self.email)
    }
}
