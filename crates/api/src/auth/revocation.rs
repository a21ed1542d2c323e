//! Token revocation list.
//!
//! Logout records the token's `jti` here until the token would have expired
//! anyway. Process-local: a restart forgets revocations, so keep
//! `JWT_ACCESS_EXPIRY_MINS` short.

use std::collections::HashMap;

use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct RevokedTokens {
    /// `jti` -> expiry (UTC Unix timestamp).
    entries: RwLock<HashMap<String, i64>>,
}

impl RevokedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke `jti` until `expires_at`. Entries already past expiry are pruned.
    pub async fn revoke(&self, jti: &str, expires_at: i64) {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.write().await;
        entries.retain(|_, exp| *exp > now);
        entries.insert(jti.to_string(), expires_at);
    }

    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.entries.read().await.contains_key(jti)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
