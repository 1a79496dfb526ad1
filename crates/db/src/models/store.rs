//! Store (loja) entity model and DTOs.

use agenda_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::address::Address;

/// A row from the `lojas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: RecordId,
    pub nome: String,
    pub cnpj: String,
    #[sqlx(json)]
    pub endereco: Address,
    pub telefone: String,
    pub email: String,
    pub responsavel: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a store.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStore {
    pub nome: Option<String>,
    pub cnpj: Option<String>,
    pub endereco: Option<Address>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub responsavel: Option<String>,
}
