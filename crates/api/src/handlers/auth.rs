//! Handlers for the `/auth` resource (login, current user).

use agenda_db::models::user::UserResponse;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::services;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "username", alias = "email")]
    pub handle: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Exchange an email handle and password for a 24-hour bearer token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = services::auth::login(
        state.storage(),
        &state.config.jwt,
        input.handle.as_deref(),
        input.password.as_deref(),
    )
    .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        expires_in: session.expires_in,
        user: UserResponse::from(&session.user),
    }))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let record = services::users::get_self(state.storage(), &user).await?;
    Ok(Json(UserResponse::from(&record)))
}
