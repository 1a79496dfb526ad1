//! Measurement (medicao) entity model and DTOs.

use agenda_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `medicoes` table: a site visit taking measurements for an
/// appointment.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: RecordId,
    pub agendamento_id: RecordId,
    pub cliente_id: RecordId,
    pub loja_id: RecordId,
    /// User in charge of the visit; the creator unless named.
    pub responsavel_medicao: RecordId,
    pub data_medicao: Timestamp,
    pub tipo_medicao: String,
    /// Free-form measurement sheet as sent by the client.
    #[sqlx(json)]
    pub medidas: serde_json::Value,
    pub observacoes: String,
    pub fotos: Vec<String>,
    pub arquivos: Vec<String>,
    pub status: String,
    pub created_by: RecordId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a measurement.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurement {
    pub agendamento_id: Option<String>,
    pub cliente_id: Option<String>,
    pub loja_id: Option<String>,
    pub responsavel_medicao: Option<String>,
    pub data_medicao: Option<String>,
    pub tipo_medicao: Option<String>,
    pub medidas: Option<serde_json::Value>,
    pub observacoes: Option<String>,
}
