//! Handlers for the `/lojas` resource.

use agenda_db::models::store::{CreateStore, Store};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::services::stores;
use crate::state::AppState;

/// GET /api/lojas
pub async fn list_stores(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Store>>> {
    Ok(Json(stores::list(state.storage()).await?))
}

/// POST /api/lojas (admin only)
pub async fn create_store(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppJson(input): AppJson<CreateStore>,
) -> AppResult<(StatusCode, Json<Store>)> {
    let store = stores::create(state.storage(), input).await?;
    Ok((StatusCode::CREATED, Json(store)))
}
