//! Route definitions for the `/lojas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stores;
use crate::state::AppState;

/// Routes mounted at `/lojas`.
///
/// ```text
/// GET  /    -> list_stores
/// POST /    -> create_store (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stores::list_stores).post(stores::create_store))
}
