//! Handlers for the `/medicoes` resource.

use agenda_db::models::measurement::{CreateMeasurement, Measurement};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::services::measurements;
use crate::state::AppState;

/// GET /api/medicoes
pub async fn list_measurements(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Measurement>>> {
    Ok(Json(measurements::list(state.storage()).await?))
}

/// POST /api/medicoes
pub async fn create_measurement(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateMeasurement>,
) -> AppResult<(StatusCode, Json<Measurement>)> {
    let measurement = measurements::create(state.storage(), input, &user.user_id).await?;
    Ok((StatusCode::CREATED, Json(measurement)))
}
