//! Repository for the `clientes` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::client::Client;

const COLUMNS: &str =
    "id, nome, email, telefone, cpf, endereco, data_nascimento, is_active, created_at, updated_at";

pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(pool: &PgPool, client: &Client) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clientes (id, nome, email, telefone, cpf, endereco, data_nascimento,
                                   is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&client.id)
            .bind(&client.nome)
            .bind(&client.email)
            .bind(&client.telefone)
            .bind(&client.cpf)
            .bind(Json(&client.endereco))
            .bind(client.data_nascimento)
            .bind(client.is_active)
            .bind(client.created_at)
            .bind(client.updated_at)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM clientes WHERE is_active = true ORDER BY nome, id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }
}
