//! Route definitions for the public storefront.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Public routes mounted at `/api`.
///
/// ```text
/// GET /products               -> list_products (?category, search, sortBy, sortOrder)
/// GET /products/{id}/contact  -> contact_link
/// GET /catalog                -> catalog (?category, search, sort)
/// GET /contact                -> general_contact_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products/{id}/contact", get(products::contact_link))
        .route("/catalog", get(products::catalog))
        .route("/contact", get(products::general_contact_link))
}
