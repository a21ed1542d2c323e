//! The product store interface used by HTTP handlers.
//!
//! The server holds two handles: a public one for browse/search and a
//! privileged one for admin mutations. Both implement [`ProductStore`]; in
//! production they are [`PgProductStore`]s on (possibly) different database
//! roles, in tests and demo mode they share one [`MemoryProductStore`].

mod memory;
mod postgres;

use async_trait::async_trait;
use burnerhub_core::catalog::ProductQuery;
use burnerhub_core::types::ProductId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Errors raised by a [`ProductStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The backing service could not be reached or refused the operation.
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products matching `query`, filtered and ordered by it.
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a product. The store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, input: &CreateProduct) -> Result<Product, StoreError>;

    /// Apply a partial update and refresh `updated_at`. `None` if `id` is unknown.
    async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError>;

    /// Remove a product. `false` if `id` is unknown.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
