//! Request extractors whose rejections use the [`AppError`] JSON body.
//!
//! Axum's own `Json` and `Query` reject with plain-text 400/415/422
//! responses; these wrappers turn every rejection into a 400
//! `VALIDATION_ERROR`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use burnerhub_core::error::CoreError;

use crate::error::AppError;

/// JSON request body. Use in place of [`axum::Json`] in handlers.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string. Use in place of [`axum::extract::Query`] in handlers.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
