//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use burnerhub_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Caller identity extracted from a JWT Bearer token in the `Authorization` header.
///
/// Tokens revoked by logout are rejected even before they expire.
///
/// ```ignore
/// async fn my_handler(identity: AdminIdentity) -> AppResult<Json<()>> {
///     tracing::info!(email = %identity.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    /// The account email (from `claims.sub`).
    pub email: String,
    pub role: String,
    /// Unique token id (from `claims.jti`), used for revocation.
    pub token_id: String,
    /// Token expiry as a Unix timestamp.
    pub expires_at: i64,
}

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if state.revoked_tokens.is_revoked(&claims.jti).await {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session has been logged out".into(),
            )));
        }

        Ok(AdminIdentity {
            email: claims.sub,
            role: claims.role,
            token_id: claims.jti,
            expires_at: claims.exp,
        })
    }
}
