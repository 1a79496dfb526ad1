//! Route definitions for the `/clientes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Routes mounted at `/clientes`.
///
/// ```text
/// GET  /    -> list_clients
/// POST /    -> create_client
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(clients::list_clients).post(clients::create_client))
}
