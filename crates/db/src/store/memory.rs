use async_trait::async_trait;
use burnerhub_core::catalog::ProductQuery;
use burnerhub_core::types::ProductId;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// In-process [`ProductStore`]. Rows live in insertion order.
///
/// [`MemoryProductStore::set_outage`] makes every call fail with
/// [`StoreError::Unavailable`] until cleared.
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
    outage: RwLock<Option<String>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing rows (kept as given, ids and timestamps included).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            outage: RwLock::new(None),
        }
    }

    /// Simulate the backing service being down (`Some`) or back up (`None`).
    pub async fn set_outage(&self, message: Option<String>) {
        *self.outage.write().await = message;
    }

    async fn ensure_available(&self) -> Result<(), StoreError> {
        match self.outage.read().await.as_ref() {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError> {
        self.ensure_available().await?;
        let products = self.products.read().await;
        Ok(query.apply(products.iter().cloned()))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.ensure_available().await?;
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, StoreError> {
        self.ensure_available().await?;
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            image_url: input.image_url.clone(),
            category: input.category.clone(),
            features: input.features.clone(),
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError> {
        self.ensure_available().await?;
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        input.apply_to(product);
        product.updated_at = Utc::now().max(product.updated_at);
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        self.ensure_available().await?;
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.ensure_available().await?;
        Ok(self.products.read().await.len() as i64)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_available().await
    }
}
