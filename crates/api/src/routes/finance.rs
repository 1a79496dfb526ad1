//! Route definitions for the `/financeiro` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// Routes mounted at `/financeiro`.
///
/// ```text
/// GET  /    -> list_entries
/// POST /    -> create_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(finance::list_entries).post(finance::create_entry))
}
