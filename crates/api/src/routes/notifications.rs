//! Route definitions for the `/notificacoes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notificacoes`.
///
/// ```text
/// GET  /            -> list_own_notifications
/// POST /            -> create_notification
/// PUT  /{id}/lida   -> mark_notification_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notifications::list_own_notifications).post(notifications::create_notification),
        )
        .route("/{id}/lida", put(notifications::mark_notification_read))
}
