//! Route definitions for the `/projetos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projetos`.
///
/// ```text
/// GET  /    -> list_projects
/// POST /    -> create_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(projects::list_projects).post(projects::create_project))
}
