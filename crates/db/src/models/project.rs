//! Project (projeto) entity model and DTOs.

use agenda_core::records::AmountInput;
use agenda_core::types::{RecordId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projetos` table: a design and quote built from a
/// measurement.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub medicao_id: RecordId,
    pub cliente_id: RecordId,
    pub loja_id: Option<RecordId>,
    pub nome_projeto: String,
    pub descricao: String,
    pub tipo_projeto: String,
    #[sqlx(json)]
    pub materiais: Vec<serde_json::Value>,
    pub valor_total: f64,
    pub prazo_entrega: Option<NaiveDate>,
    pub status: String,
    pub arquivos: Vec<String>,
    pub aprovado_por: Option<RecordId>,
    pub created_by: RecordId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a project.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub medicao_id: Option<String>,
    pub cliente_id: Option<String>,
    pub loja_id: Option<String>,
    pub nome_projeto: Option<String>,
    pub descricao: Option<String>,
    pub tipo_projeto: Option<String>,
    pub materiais: Option<Vec<serde_json::Value>>,
    pub valor_total: Option<AmountInput>,
    pub prazo_entrega: Option<String>,
}
