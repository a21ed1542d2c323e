//! Role-based access control (RBAC) extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use burnerhub_core::error::CoreError;
use burnerhub_core::roles::ROLE_ADMIN;

use super::auth::AdminIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin is guaranteed to hold the admin role here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = AdminIdentity::from_request_parts(parts, state).await?;
        if identity.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(identity))
    }
}
