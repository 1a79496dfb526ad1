//! Handlers for the `/users` resource.
//!
//! All handlers require the `admin` role via [`RequireAdmin`]. Responses
//! always go through [`UserResponse`], which has no password field.

use agenda_db::models::user::{CreateUser, UpdateUser, UserResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::services::users;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let records = users::list(state.storage()).await?;
    Ok(Json(records.iter().map(UserResponse::from).collect()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = users::create(state.storage(), input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /api/users/{id}
///
/// Partial update; a non-empty `password` (or `senha`) is re-hashed.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = users::update(state.storage(), &admin, &id, input).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{id}
///
/// Soft-deletes the account.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    users::delete(state.storage(), &admin, &id).await?;
    Ok(Json(MessageResponse::new("User deactivated")))
}
