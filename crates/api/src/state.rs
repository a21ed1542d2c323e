use std::sync::Arc;

use burnerhub_db::store::ProductStore;

use crate::auth::revocation::RevokedTokens;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Public store handle: browse and search only.
    pub catalog: Arc<dyn ProductStore>,
    /// Privileged store handle: admin mutations.
    pub admin_catalog: Arc<dyn ProductStore>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Token ids revoked by logout.
    pub revoked_tokens: Arc<RevokedTokens>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn ProductStore>,
        admin_catalog: Arc<dyn ProductStore>,
        config: ServerConfig,
    ) -> Self {
        Self {
            catalog,
            admin_catalog,
            config: Arc::new(config),
            revoked_tokens: Arc::new(RevokedTokens::new()),
        }
    }
}
