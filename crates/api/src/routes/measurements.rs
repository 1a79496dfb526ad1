//! Route definitions for the `/medicoes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::measurements;
use crate::state::AppState;

/// Routes mounted at `/medicoes`.
///
/// ```text
/// GET  /    -> list_measurements
/// POST /    -> create_measurement
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(measurements::list_measurements).post(measurements::create_measurement),
    )
}
