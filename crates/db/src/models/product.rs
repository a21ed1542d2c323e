//! Product entity model and DTOs.

use burnerhub_core::catalog::Listing;
use burnerhub_core::error::CoreError;
use burnerhub_core::product::{normalize_features, validate_required, PriceInput};
use burnerhub_core::types::{ProductId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub features: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Listing for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

/// Admin form payload for creating a product, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: PriceInput,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductForm {
    /// Validate the form and map it to an insertable record.
    pub fn into_create(self) -> Result<CreateProduct, CoreError> {
        validate_required("name", &self.name)?;
        validate_required("description", &self.description)?;
        validate_required("image_url", &self.image_url)?;
        validate_required("category", &self.category)?;
        let price = self.price.resolve()?;

        Ok(CreateProduct {
            name: self.name,
            description: self.description,
            price,
            image_url: self.image_url,
            category: self.category,
            features: normalize_features(self.features),
        })
    }
}

/// Validated DTO for inserting a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub features: Vec<String>,
}

/// Admin form payload for a partial update, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
}

impl UpdateProductForm {
    /// Validate present fields and map them to an update DTO.
    pub fn into_update(self) -> Result<UpdateProduct, CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("image_url", &self.image_url),
            ("category", &self.category),
        ] {
            if let Some(value) = value {
                validate_required(field, value)?;
            }
        }
        let price = self.price.as_ref().map(PriceInput::resolve).transpose()?;

        Ok(UpdateProduct {
            name: self.name,
            description: self.description,
            price,
            image_url: self.image_url,
            category: self.category,
            features: self.features.map(normalize_features),
        })
    }
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
}

impl UpdateProduct {
    /// Apply the present fields to `product` in place. Timestamps are the
    /// caller's responsibility.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(features) = &self.features {
            product.features = features.clone();
        }
    }
}
