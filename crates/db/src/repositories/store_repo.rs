//! Repository for the `lojas` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::store::Store;

const COLUMNS: &str =
    "id, nome, cnpj, endereco, telefone, email, responsavel, is_active, created_at, updated_at";

pub struct StoreRepo;

impl StoreRepo {
    pub async fn create(pool: &PgPool, store: &Store) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO lojas (id, nome, cnpj, endereco, telefone, email, responsavel,
                                is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(&store.id)
            .bind(&store.nome)
            .bind(&store.cnpj)
            .bind(Json(&store.endereco))
            .bind(&store.telefone)
            .bind(&store.email)
            .bind(&store.responsavel)
            .bind(store.is_active)
            .bind(store.created_at)
            .bind(store.updated_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_active_by_name(pool: &PgPool, nome: &str) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lojas WHERE nome = $1 AND is_active = true");
        sqlx::query_as::<_, Store>(&query)
            .bind(nome)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lojas WHERE is_active = true ORDER BY nome, id");
        sqlx::query_as::<_, Store>(&query).fetch_all(pool).await
    }
}
