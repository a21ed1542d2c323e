//! Data access for the burner catalog.
//!
//! - [`repositories::ProductRepo`] -- SQL for the `products` table.
//! - [`store::ProductStore`] -- the store interface handlers depend on, with
//!   PostgreSQL and in-memory implementations.
//! - [`seed`] -- sample catalog for demo installs.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
