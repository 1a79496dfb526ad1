//! Repository for the `notificacoes` table.

use agenda_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::notification::Notification;

const COLUMNS: &str = "id, usuario_id, titulo, mensagem, tipo, origem, origem_id, lida, \
     data_leitura, is_active, created_at";

pub struct NotificationRepo;

impl NotificationRepo {
    pub async fn create(pool: &PgPool, n: &Notification) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notificacoes ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&n.id)
            .bind(&n.usuario_id)
            .bind(&n.titulo)
            .bind(&n.mensagem)
            .bind(&n.tipo)
            .bind(&n.origem)
            .bind(&n.origem_id)
            .bind(n.lida)
            .bind(n.data_leitura)
            .bind(n.is_active)
            .bind(n.created_at)
            .fetch_one(pool)
            .await
    }

    /// Active notifications addressed to `usuario_id`, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        usuario_id: &str,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notificacoes
             WHERE usuario_id = $1 AND is_active = true
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(usuario_id)
            .fetch_all(pool)
            .await
    }

    /// Flag as read when `usuario_id` is the recipient. An earlier read
    /// time is kept.
    pub async fn mark_read(
        pool: &PgPool,
        id: &str,
        usuario_id: &str,
        at: Timestamp,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notificacoes
             SET lida = true, data_leitura = COALESCE(data_leitura, $3)
             WHERE id = $1 AND usuario_id = $2 AND is_active = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(usuario_id)
            .bind(at)
            .fetch_optional(pool)
            .await
    }
}
