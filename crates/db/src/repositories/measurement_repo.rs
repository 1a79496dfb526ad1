//! Repository for the `medicoes` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::measurement::Measurement;

const COLUMNS: &str = "id, agendamento_id, cliente_id, loja_id, responsavel_medicao, data_medicao, \
     tipo_medicao, medidas, observacoes, fotos, arquivos, status, created_by, is_active, \
     created_at, updated_at";

pub struct MeasurementRepo;

impl MeasurementRepo {
    pub async fn create(pool: &PgPool, m: &Measurement) -> Result<Measurement, sqlx::Error> {
        let query = format!(
            "INSERT INTO medicoes ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(&m.id)
            .bind(&m.agendamento_id)
            .bind(&m.cliente_id)
            .bind(&m.loja_id)
            .bind(&m.responsavel_medicao)
            .bind(m.data_medicao)
            .bind(&m.tipo_medicao)
            .bind(Json(&m.medidas))
            .bind(&m.observacoes)
            .bind(&m.fotos)
            .bind(&m.arquivos)
            .bind(&m.status)
            .bind(&m.created_by)
            .bind(m.is_active)
            .bind(m.created_at)
            .bind(m.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Active measurements, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Measurement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM medicoes WHERE is_active = true ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Measurement>(&query).fetch_all(pool).await
    }
}
