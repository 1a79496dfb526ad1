//! Notifications (notificacoes).
//!
//! Any authenticated user may notify any active user. Reading and marking
//! read are limited to the recipient; someone else's notification behaves
//! as if it did not exist.

use agenda_core::error::CoreError;
use agenda_core::fields::{clean, non_blank, require_fields};
use agenda_core::records::{label_or, DEFAULT_NOTIFICATION_KIND, DEFAULT_NOTIFICATION_SOURCE};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::notification::{CreateNotification, Notification};
use agenda_db::Storage;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

const ENTITY: &str = "Notification";

/// Send a notification to `usuarioId`, who must be an active user.
pub async fn create(storage: &dyn Storage, input: CreateNotification) -> AppResult<Notification> {
    require_fields(&[
        ("usuarioId", input.usuario_id.as_deref()),
        ("titulo", input.titulo.as_deref()),
        ("mensagem", input.mensagem.as_deref()),
    ])?;

    let usuario_id = clean(input.usuario_id);
    match storage.find_user(&usuario_id).await? {
        Some(user) if user.is_active => {}
        _ => return Err(CoreError::not_found("User", usuario_id).into()),
    }

    let notification = Notification {
        id: new_record_id(),
        usuario_id,
        titulo: clean(input.titulo),
        mensagem: clean(input.mensagem),
        tipo: label_or(input.tipo.as_deref(), DEFAULT_NOTIFICATION_KIND),
        origem: label_or(input.origem.as_deref(), DEFAULT_NOTIFICATION_SOURCE),
        origem_id: non_blank(input.origem_id.as_deref()),
        lida: false,
        data_leitura: None,
        is_active: true,
        created_at: now(),
    };

    let stored = storage.insert_notification(&notification).await?;
    tracing::info!(
        notification_id = %stored.id,
        usuario_id = %stored.usuario_id,
        "Notification created"
    );
    Ok(stored)
}

/// The caller's active notifications, newest first.
pub async fn list_own(storage: &dyn Storage, caller: &AuthUser) -> AppResult<Vec<Notification>> {
    Ok(storage.list_notifications_for(&caller.user_id).await?)
}

/// Mark one of the caller's notifications read. Repeating it is harmless and
/// keeps the first read time.
pub async fn mark_read(
    storage: &dyn Storage,
    caller: &AuthUser,
    id: &str,
) -> AppResult<Notification> {
    let read = storage
        .mark_notification_read(id, &caller.user_id, now())
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::debug!(notification_id = %read.id, "Notification marked read");
    Ok(read)
}
