//! Repository for the `financeiro` table.

use sqlx::PgPool;

use crate::models::finance::FinanceEntry;

const COLUMNS: &str = "id, projeto_id, cliente_id, tipo, categoria, descricao, valor, \
     data_movimento, forma_pagamento, status, comprovante, created_by, is_active, created_at, \
     updated_at";

pub struct FinanceRepo;

impl FinanceRepo {
    pub async fn create(pool: &PgPool, e: &FinanceEntry) -> Result<FinanceEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO financeiro ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceEntry>(&query)
            .bind(&e.id)
            .bind(&e.projeto_id)
            .bind(&e.cliente_id)
            .bind(&e.tipo)
            .bind(&e.categoria)
            .bind(&e.descricao)
            .bind(e.valor)
            .bind(e.data_movimento)
            .bind(&e.forma_pagamento)
            .bind(&e.status)
            .bind(&e.comprovante)
            .bind(&e.created_by)
            .bind(e.is_active)
            .bind(e.created_at)
            .bind(e.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Active entries, most recent movement first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<FinanceEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM financeiro WHERE is_active = true
             ORDER BY data_movimento DESC, id"
        );
        sqlx::query_as::<_, FinanceEntry>(&query).fetch_all(pool).await
    }
}
