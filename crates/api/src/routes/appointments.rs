//! Route definitions for the `/agendamentos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

/// Routes mounted at `/agendamentos`.
///
/// ```text
/// GET    /              -> list_appointments (?status=)
/// POST   /              -> create_appointment
/// GET    /{id}          -> get_appointment
/// PUT    /{id}          -> update_appointment
/// DELETE /{id}          -> delete_appointment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/{id}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
}
