//! Appointment (agendamento) entity model and DTOs.

use agenda_core::appointment::AppointmentStatus;
use agenda_core::types::{RecordId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `agendamentos` table, serialized as-is to clients.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub nome_cliente: String,
    pub loja: String,
    pub data: Option<NaiveDate>,
    /// `HH:MM`.
    pub hora: Option<String>,
    pub telefone: String,
    /// Contact email of the client, free text.
    pub email: String,
    pub tipo_imovel: String,
    pub ambientes: Vec<String>,
    pub endereco: String,
    pub cep: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub servico: String,
    pub observacoes: String,
    #[sqlx(try_from = "String")]
    pub status: AppointmentStatus,
    /// Audit annotation only; not an ownership rule.
    pub created_by: Option<RecordId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating an appointment.
///
/// `nomeCliente` and `loja` are required; the service reports them together
/// when missing. `data` and `hora` arrive as strings and are parsed by the
/// service so that malformed values produce a validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    pub nome_cliente: Option<String>,
    pub loja: Option<String>,
    pub data: Option<String>,
    pub hora: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub tipo_imovel: Option<String>,
    pub ambientes: Option<Vec<String>>,
    pub endereco: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub servico: Option<String>,
    pub observacoes: Option<String>,
    pub status: Option<String>,
}

/// Request body for a partial update. Absent fields keep their stored value.
///
/// `data` and `hora` distinguish absent from `null`: an explicit `null` (or
/// an empty string) clears them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointment {
    pub nome_cliente: Option<String>,
    pub loja: Option<String>,
    #[serde(default, deserialize_with = "agenda_core::patch::nullable")]
    pub data: Option<Option<String>>,
    #[serde(default, deserialize_with = "agenda_core::patch::nullable")]
    pub hora: Option<Option<String>>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub tipo_imovel: Option<String>,
    pub ambientes: Option<Vec<String>>,
    pub endereco: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub servico: Option<String>,
    pub observacoes: Option<String>,
    pub status: Option<String>,
}
