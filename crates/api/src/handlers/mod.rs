pub mod admin_products;
pub mod auth;
pub mod products;

use burnerhub_core::types::ProductId;

use crate::error::{AppError, AppResult};

/// Parse a product id from a path or request parameter.
pub(crate) fn parse_product_id(raw: &str) -> AppResult<ProductId> {
    ProductId::parse_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("Invalid product ID: {raw}")))
}

/// Like [`parse_product_id`], but an absent or blank id is its own error.
pub(crate) fn require_product_id(raw: Option<&str>) -> AppResult<ProductId> {
    match raw {
        Some(id) if !id.trim().is_empty() => parse_product_id(id),
        _ => Err(AppError::BadRequest("Product ID is required".into())),
    }
}
