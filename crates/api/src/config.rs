use burnerhub_core::contact::normalize_phone;

use crate::auth::credentials::AdminCredentials;
use crate::auth::jwt::JwtConfig;

/// Which [`ProductStore`](burnerhub_db::store::ProductStore) implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL` / `ADMIN_DATABASE_URL`.
    Postgres,
    /// In-process store; contents are lost on restart.
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Self {
        match raw {
            "postgres" => Self::Postgres,
            "memory" => Self::Memory,
            other => panic!("STORE_BACKEND must be 'postgres' or 'memory', got '{other}'"),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All optional fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The admin account allowed to log in.
    pub admin: AdminCredentials,
    /// WhatsApp number for purchase enquiries, digits only. `None` disables
    /// the contact endpoint.
    pub whatsapp_number: Option<String>,
    /// Insert the sample catalog at start-up when the store is empty.
    pub seed_sample_products: bool,
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `WHATSAPP_NUMBER`      | unset                      |
    /// | `SEED_SAMPLE_PRODUCTS` | `false`                    |
    /// | `STORE_BACKEND`        | `postgres`                 |
    ///
    /// JWT and admin credential variables are documented on
    /// [`JwtConfig::from_env`] and [`AdminCredentials::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let whatsapp_number = std::env::var("WHATSAPP_NUMBER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|raw| {
                normalize_phone(&raw)
                    .unwrap_or_else(|e| panic!("Invalid WHATSAPP_NUMBER '{raw}': {e}"))
            });

        let seed_sample_products = std::env::var("SEED_SAMPLE_PRODUCTS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let store_backend = StoreBackend::parse(
            &std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin: AdminCredentials::from_env(),
            whatsapp_number,
            seed_sample_products,
            store_backend,
        }
    }
}

/// `1`, `true`, `yes`, `on` (any case) are true; everything else is false.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
