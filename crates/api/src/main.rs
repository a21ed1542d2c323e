use std::net::SocketAddr;
use std::sync::Arc;

use burnerhub_db::store::{MemoryProductStore, PgProductStore, ProductStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use burnerhub_api::auth::password::hash_password;
use burnerhub_api::config::{ServerConfig, StoreBackend};
use burnerhub_api::router::build_app_router;
use burnerhub_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- `hash-password <password>`: print an ADMIN_PASSWORD_HASH value and exit ---
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        let password = args
            .next()
            .expect("Usage: burnerhub-api hash-password <password>");
        let hash = hash_password(&password).expect("Failed to hash password");
        println!("{hash}");
        return;
    }

    // --- Tracing ---
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "burnerhub_api=debug,tower_http=debug".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.store_backend,
        "Loaded server configuration"
    );
    if config.whatsapp_number.is_none() {
        tracing::warn!("WHATSAPP_NUMBER not set; contact links are disabled");
    }

    // --- Product store ---
    let (catalog, admin_catalog) = match config.store_backend {
        StoreBackend::Postgres => connect_postgres().await,
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on restart");
            let store: Arc<dyn ProductStore> = Arc::new(MemoryProductStore::new());
            (Arc::clone(&store), store)
        }
    };

    // --- Sample data ---
    if config.seed_sample_products {
        let inserted = burnerhub_db::seed::seed_if_empty(admin_catalog.as_ref())
            .await
            .expect("Failed to seed sample products");
        tracing::info!(inserted, "Sample product seed finished");
    }

    // --- Router ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState::new(catalog, admin_catalog, config.clone());
    let app = build_app_router(state, &config);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect the public and privileged store handles and apply migrations.
///
/// `ADMIN_DATABASE_URL` names the privileged role; when unset both handles
/// share the `DATABASE_URL` pool.
async fn connect_postgres() -> (Arc<dyn ProductStore>, Arc<dyn ProductStore>) {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let admin_database_url = std::env::var("ADMIN_DATABASE_URL").ok();

    let pool = burnerhub_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    burnerhub_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    let admin_pool = match admin_database_url {
        Some(url) if url != database_url => {
            let admin_pool = burnerhub_db::create_pool(&url)
                .await
                .expect("Failed to connect to admin database");
            tracing::info!("Admin database connection pool created");
            admin_pool
        }
        _ => pool.clone(),
    };

    burnerhub_db::run_migrations(&admin_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    (
        Arc::new(PgProductStore::new(pool)),
        Arc::new(PgProductStore::new(admin_pool)),
    )
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
