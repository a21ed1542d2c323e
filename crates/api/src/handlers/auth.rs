//! Handlers for the admin session (login, logout, session).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use burnerhub_core::error::CoreError;
use burnerhub_core::roles::ROLE_ADMIN;
use burnerhub_core::types::Timestamp;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub email: String,
}

/// The identity behind the presented token.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub email: String,
    pub role: String,
    pub expires_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
///
/// Only the configured admin email with its password gets a token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let valid = state
        .config
        .admin
        .verify(&input.email, &input.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !valid {
        tracing::warn!(email = %input.email, "Rejected admin login");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(&input.email, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %input.email, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        email: input.email,
    }))
}

/// POST /api/admin/logout
///
/// Revoke the presented token until it would have expired.
pub async fn logout(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> StatusCode {
    state
        .revoked_tokens
        .revoke(&admin.token_id, admin.expires_at)
        .await;

    tracing::info!(email = %admin.email, "Admin logged out");
    StatusCode::NO_CONTENT
}

/// GET /api/admin/session
pub async fn session(
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<SessionInfo>>> {
    let expires_at = DateTime::from_timestamp(admin.expires_at, 0).ok_or_else(|| {
        AppError::InternalError(format!("Token expiry out of range: {}", admin.expires_at))
    })?;

    Ok(Json(DataResponse {
        data: SessionInfo {
            email: admin.email,
            role: admin.role,
            expires_at,
        },
    }))
}
