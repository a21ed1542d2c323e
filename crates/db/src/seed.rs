//! Sample catalog for demo installs.
//!
//! Applied at start-up only when explicitly enabled and the catalog is empty.

use crate::models::product::CreateProduct;
use crate::store::{ProductStore, StoreError};

/// The three products shown on a fresh storefront.
pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Premium Gas Burner Pro".into(),
            description: "High-efficiency 4-burner gas stove with auto-ignition and safety \
                          features. Perfect for modern kitchens."
                .into(),
            price: 15999.0,
            image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=300&fit=crop"
                .into(),
            category: "4-burner".into(),
            features: vec![
                "Auto ignition".into(),
                "Safety valve".into(),
                "Stainless steel body".into(),
                "Easy cleaning".into(),
            ],
        },
        CreateProduct {
            name: "Compact Kitchen Burner".into(),
            description: "Space-saving 2-burner gas stove ideal for small kitchens and studio \
                          apartments."
                .into(),
            price: 8999.0,
            image_url: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?w=400&h=300&fit=crop"
                .into(),
            category: "2-burner".into(),
            features: vec![
                "Compact design".into(),
                "Easy installation".into(),
                "Durable build".into(),
            ],
        },
        CreateProduct {
            name: "Commercial Grade Burner".into(),
            description: "Heavy-duty commercial gas burner designed for restaurants and \
                          commercial kitchens."
                .into(),
            price: 25999.0,
            image_url: "https://images.unsplash.com/photo-1556909114-83d71aabe924?w=400&h=300&fit=crop"
                .into(),
            category: "commercial".into(),
            features: vec![
                "Heavy duty".into(),
                "High BTU output".into(),
                "Professional grade".into(),
                "Multiple burner sizes".into(),
            ],
        },
    ]
}

/// Insert [`sample_products`] if the store holds no products.
///
/// Returns the number of rows inserted.
pub async fn seed_if_empty(store: &dyn ProductStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        tracing::info!("Catalog already populated, skipping sample seed");
        return Ok(0);
    }

    let samples = sample_products();
    for product in &samples {
        store.create(product).await?;
    }
    tracing::info!(count = samples.len(), "Seeded sample products");
    Ok(samples.len())
}
