//! Handlers for `/admin/products` (catalog management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`] and go through
//! the privileged store handle.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use burnerhub_core::catalog::ProductQuery;
use burnerhub_core::error::CoreError;
use burnerhub_db::models::product::{Product, ProductForm, UpdateProductForm};
use serde::Deserialize;

use super::require_product_id;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::IdParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/products`: the target id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub changes: UpdateProductForm,
}

fn not_found(id: impl ToString) -> CoreError {
    CoreError::NotFound {
        entity: "Product",
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/products
///
/// Every product, newest first.
pub async fn list_products(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = state.admin_catalog.list(&ProductQuery::default()).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/admin/products
///
/// Validate the form, insert it, and return the stored row with 201 Created.
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(form): AppJson<ProductForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Product>>>)> {
    let input = form.into_create()?;
    let product = state.admin_catalog.create(&input).await?;

    tracing::info!(
        product_id = %product.id,
        name = %product.name,
        admin = %admin.email,
        "Product created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: vec![product],
        }),
    ))
}

/// PUT /api/admin/products
///
/// Partial update; the id travels in the body. Nothing is modified when the
/// id is missing or the payload is invalid.
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<UpdateProductRequest>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let id = require_product_id(input.id.as_deref())?;
    let changes = input.changes.into_update()?;

    let product = state
        .admin_catalog
        .update(id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = %id, admin = %admin.email, "Product updated");

    Ok(Json(DataResponse {
        data: vec![product],
    }))
}

/// DELETE /api/admin/products?id=
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppQuery(params): AppQuery<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_product_id(params.id.as_deref())?;

    if !state.admin_catalog.delete(id).await? {
        return Err(not_found(id).into());
    }

    tracing::info!(product_id = %id, admin = %admin.email, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".into(),
    }))
}
