//! Handlers for the `/financeiro` resource.

use agenda_db::models::finance::{CreateFinanceEntry, FinanceEntry};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::services::finance;
use crate::state::AppState;

/// GET /api/financeiro
pub async fn list_entries(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<FinanceEntry>>> {
    Ok(Json(finance::list(state.storage()).await?))
}

/// POST /api/financeiro
pub async fn create_entry(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateFinanceEntry>,
) -> AppResult<(StatusCode, Json<FinanceEntry>)> {
    let entry = finance::create(state.storage(), input, &user.user_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
