//! Handlers for the `/projetos` resource.

use agenda_db::models::project::{CreateProject, Project};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::services::projects;
use crate::state::AppState;

/// GET /api/projetos
pub async fn list_projects(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(projects::list(state.storage()).await?))
}

/// POST /api/projetos
pub async fn create_project(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = projects::create(state.storage(), input, &user.user_id).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
