//! Repository for the `projetos` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::Project;

const COLUMNS: &str = "id, medicao_id, cliente_id, loja_id, nome_projeto, descricao, tipo_projeto, \
     materiais, valor_total, prazo_entrega, status, arquivos, aprovado_por, created_by, is_active, \
     created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn create(pool: &PgPool, p: &Project) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projetos ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&p.id)
            .bind(&p.medicao_id)
            .bind(&p.cliente_id)
            .bind(&p.loja_id)
            .bind(&p.nome_projeto)
            .bind(&p.descricao)
            .bind(&p.tipo_projeto)
            .bind(Json(&p.materiais))
            .bind(p.valor_total)
            .bind(p.prazo_entrega)
            .bind(&p.status)
            .bind(&p.arquivos)
            .bind(&p.aprovado_por)
            .bind(&p.created_by)
            .bind(p.is_active)
            .bind(p.created_at)
            .bind(p.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Active projects, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projetos WHERE is_active = true ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
