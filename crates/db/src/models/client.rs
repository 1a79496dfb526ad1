//! Client (cliente) entity model and DTOs.

use agenda_core::types::{RecordId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::address::Address;

/// A row from the `clientes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    #[sqlx(json)]
    pub endereco: Address,
    pub data_nascimento: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a client.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
    pub endereco: Option<Address>,
    pub data_nascimento: Option<String>,
}
