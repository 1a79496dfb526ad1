//! Handlers for the `/notificacoes` resource.
//!
//! Listing and marking read act on the caller's own notifications only.

use agenda_db::models::notification::{CreateNotification, Notification};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::services::notifications;
use crate::state::AppState;

/// GET /api/notificacoes
pub async fn list_own_notifications(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Notification>>> {
    Ok(Json(notifications::list_own(state.storage(), &user).await?))
}

/// POST /api/notificacoes
pub async fn create_notification(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let notification = notifications::create(state.storage(), input).await?;
    tracing::debug!(sender = %user.user_id, notification_id = %notification.id, "Notification sent");
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PUT /api/notificacoes/{id}/lida
pub async fn mark_notification_read(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    notifications::mark_read(state.storage(), &user, &id).await?;
    Ok(Json(MessageResponse::new("Notification marked as read")))
}
