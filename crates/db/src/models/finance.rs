//! Finance entry (movimento financeiro) model and DTOs.

use agenda_core::records::AmountInput;
use agenda_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `financeiro` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    pub id: RecordId,
    pub projeto_id: Option<RecordId>,
    pub cliente_id: Option<RecordId>,
    /// Direction of the movement, e.g. `receita` or `despesa`. Free text.
    pub tipo: String,
    pub categoria: String,
    pub descricao: String,
    pub valor: f64,
    pub data_movimento: Timestamp,
    pub forma_pagamento: String,
    pub status: String,
    pub comprovante: String,
    pub created_by: RecordId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for recording a finance entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinanceEntry {
    pub projeto_id: Option<String>,
    pub cliente_id: Option<String>,
    pub tipo: Option<String>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub valor: Option<AmountInput>,
    pub data_movimento: Option<String>,
    pub forma_pagamento: Option<String>,
}
