//! Measurement (medicao) records: create and list.
//!
//! The linked appointment, client and store ids are stored as given; they
//! are not checked against their collections.

use agenda_core::fields::{clean, non_blank, require_fields};
use agenda_core::records::{label_or, parse_instant, DEFAULT_KIND, MEASUREMENT_INITIAL_STATUS};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::measurement::{CreateMeasurement, Measurement};
use agenda_db::Storage;

use crate::error::AppResult;

/// Store a new measurement opened by `created_by`.
///
/// The visit defaults to now and to the creator as the person in charge.
/// Photos and files start empty.
pub async fn create(
    storage: &dyn Storage,
    input: CreateMeasurement,
    created_by: &str,
) -> AppResult<Measurement> {
    require_fields(&[
        ("agendamentoId", input.agendamento_id.as_deref()),
        ("clienteId", input.cliente_id.as_deref()),
        ("lojaId", input.loja_id.as_deref()),
    ])?;

    let ts = now();
    let data_medicao = match input.data_medicao.as_deref() {
        Some(raw) => parse_instant(raw)?.unwrap_or(ts),
        None => ts,
    };

    let measurement = Measurement {
        id: new_record_id(),
        agendamento_id: clean(input.agendamento_id),
        cliente_id: clean(input.cliente_id),
        loja_id: clean(input.loja_id),
        responsavel_medicao: non_blank(input.responsavel_medicao.as_deref())
            .unwrap_or_else(|| created_by.to_string()),
        data_medicao,
        tipo_medicao: label_or(input.tipo_medicao.as_deref(), DEFAULT_KIND),
        medidas: input.medidas.unwrap_or_else(|| serde_json::json!({})),
        observacoes: clean(input.observacoes),
        fotos: Vec::new(),
        arquivos: Vec::new(),
        status: MEASUREMENT_INITIAL_STATUS.to_string(),
        created_by: created_by.to_string(),
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_measurement(&measurement).await?;
    tracing::info!(
        measurement_id = %stored.id,
        agendamento_id = %stored.agendamento_id,
        "Measurement created"
    );
    Ok(stored)
}

pub async fn list(storage: &dyn Storage) -> AppResult<Vec<Measurement>> {
    Ok(storage.list_active_measurements().await?)
}
