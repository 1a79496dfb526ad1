//! Notification (notificacao) model and DTOs.

use agenda_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notificacoes` table. Visible only to its recipient.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    /// Recipient.
    pub usuario_id: RecordId,
    pub titulo: String,
    pub mensagem: String,
    pub tipo: String,
    pub origem: String,
    pub origem_id: Option<String>,
    pub lida: bool,
    /// First time the recipient marked it read.
    pub data_leitura: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Request body for sending a notification.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub usuario_id: Option<String>,
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub tipo: Option<String>,
    pub origem: Option<String>,
    pub origem_id: Option<String>,
}
