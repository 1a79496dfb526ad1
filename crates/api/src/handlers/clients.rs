//! Handlers for the `/clientes` resource.

use agenda_db::models::client::{Client, CreateClient};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::services::clients;
use crate::state::AppState;

/// GET /api/clientes
pub async fn list_clients(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(clients::list(state.storage()).await?))
}

/// POST /api/clientes
pub async fn create_client(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = clients::create(state.storage(), input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}
