use async_trait::async_trait;
use burnerhub_core::catalog::ProductQuery;
use burnerhub_core::types::ProductId;

use super::{ProductStore, StoreError};
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// [`ProductStore`] backed by PostgreSQL through [`ProductRepo`].
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError> {
        Ok(ProductRepo::list(&self.pool, query).await?)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(ProductRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, StoreError> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError> {
        Ok(ProductRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(ProductRepo::delete(&self.pool, id).await?)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(ProductRepo::count(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
