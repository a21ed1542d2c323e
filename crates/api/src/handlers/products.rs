//! Public storefront handlers: product query, catalog view and contact links.

use axum::extract::{Path, State};
use axum::Json;
use burnerhub_core::catalog::{categories, CatalogView, ProductQuery};
use burnerhub_core::contact::{general_link, purchase_link, ContactLink};
use burnerhub_core::error::CoreError;
use burnerhub_db::models::product::Product;
use serde::Serialize;

use super::parse_product_id;
use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::query::{CatalogParams, ProductListParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/catalog`.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub data: Vec<Product>,
    /// `"all"` followed by every category present in the catalog.
    pub categories: Vec<String>,
    /// Number of products in `data`.
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/products
///
/// Filter by `category` and `search`, order by `sortBy`/`sortOrder`. Returns a
/// bare JSON array; an empty array when nothing matches.
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProductListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let query = ProductQuery::from_params(
        params.category.as_deref(),
        params.search.as_deref(),
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
    )?;

    let products = state.catalog.list(&query).await?;
    tracing::debug!(count = products.len(), ?query, "Listed products");
    Ok(Json(products))
}

/// GET /api/catalog
///
/// Storefront view: the category tabs come from the whole catalog, the
/// product list from the selected category, search term and sort key.
pub async fn catalog(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CatalogParams>,
) -> AppResult<Json<CatalogResponse>> {
    let all = state.catalog.list(&ProductQuery::default()).await?;
    let view = CatalogView::from_params(
        params.category.as_deref(),
        params.search.as_deref(),
        params.sort.as_deref(),
    );

    let data = view.derive(&all);
    Ok(Json(CatalogResponse {
        categories: categories(&all),
        total: data.len(),
        data,
    }))
}

/// GET /api/contact
///
/// WhatsApp click-to-chat link for a general enquiry about the catalog.
pub async fn general_contact_link(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ContactLink>>> {
    let phone = configured_number(&state)?;
    Ok(Json(DataResponse {
        data: general_link(phone)?,
    }))
}

/// GET /api/products/{id}/contact
///
/// WhatsApp click-to-chat link pre-filled with an enquiry for the product.
pub async fn contact_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ContactLink>>> {
    let id = parse_product_id(&id)?;

    let phone = configured_number(&state)?;

    let product = state
        .catalog
        .find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Product",
            id: id.to_string(),
        })?;

    let link = purchase_link(phone, &product.name, product.price)?;
    Ok(Json(DataResponse { data: link }))
}

fn configured_number(state: &AppState) -> AppResult<&str> {
    state
        .config
        .whatsapp_number
        .as_deref()
        .ok_or_else(|| AppError::InternalError("WHATSAPP_NUMBER is not configured".into()))
}
