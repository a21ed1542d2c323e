//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `GET /api/products?category=&search=&sortBy=&sortOrder=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// `GET /api/catalog?category=&search=&sort=`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// `?id=` for endpoints that take the product id as a query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}
