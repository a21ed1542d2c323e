//! Route definitions for `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin_products, auth};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /login             -> login (public)
/// POST   /logout            -> logout (requires admin)
/// GET    /session           -> session (requires admin)
///
/// GET    /products          -> list_products
/// POST   /products          -> create_product
/// PUT    /products          -> update_product (id in body)
/// DELETE /products?id=      -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
        .route(
            "/products",
            get(admin_products::list_products)
                .post(admin_products::create_product)
                .put(admin_products::update_product)
                .delete(admin_products::delete_product),
        )
}
