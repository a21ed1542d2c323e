pub mod admin;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                      public product query
/// /products/{id}/contact         WhatsApp purchase link
/// /catalog                       storefront view with category tabs
/// /contact                       WhatsApp general enquiry link
///
/// /admin/login                   login (public)
/// /admin/logout                  logout (requires admin)
/// /admin/session                 current identity (requires admin)
/// /admin/products                list, create, update, delete (requires admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(products::router())
        .nest("/admin", admin::router())
}
