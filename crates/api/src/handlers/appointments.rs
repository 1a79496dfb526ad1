//! Handlers for the `/agendamentos` resource.
//!
//! Any authenticated user may read and write any appointment.

use agenda_db::models::appointment::{Appointment, CreateAppointment, UpdateAppointment};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::AppointmentListParams;
use crate::response::MessageResponse;
use crate::services::appointments;
use crate::state::AppState;

/// GET /api/agendamentos
///
/// Active appointments, newest first. Optional `?status=` filter.
pub async fn list_appointments(
    State(state): State<AppState>,
    _user: AuthUser,
    AppQuery(params): AppQuery<AppointmentListParams>,
) -> AppResult<Json<Vec<Appointment>>> {
    let list = appointments::list(state.storage(), params.status.as_deref()).await?;
    Ok(Json(list))
}

/// POST /api/agendamentos
pub async fn create_appointment(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = appointments::create(state.storage(), input, Some(&user.user_id)).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/agendamentos/{id}
pub async fn get_appointment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Appointment>> {
    Ok(Json(appointments::get(state.storage(), &id).await?))
}

/// PUT /api/agendamentos/{id}
///
/// Partial merge; see [`appointments::update`].
pub async fn update_appointment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<UpdateAppointment>,
) -> AppResult<Json<Appointment>> {
    Ok(Json(appointments::update(state.storage(), &id, input).await?))
}

/// DELETE /api/agendamentos/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    appointments::delete(state.storage(), &id).await?;
    tracing::debug!(appointment_id = %id, user_id = %user.user_id, "Delete requested");
    Ok(Json(MessageResponse::new("Appointment deleted")))
}
