//! Appointment (agendamento) record service.
//!
//! Updates are partial merges: absent fields keep their stored value.
//! Deletes are soft. Concurrent updates to one record are last-write-wins.

use agenda_core::appointment::{
    normalize_rooms, parse_date, parse_time, service_label, status_or_default, AppointmentStatus,
};
use agenda_core::error::CoreError;
use agenda_core::fields::{clean, merge_text, non_blank, replace_required, require_fields};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::appointment::{Appointment, CreateAppointment, UpdateAppointment};
use agenda_db::Storage;

use crate::error::AppResult;

const ENTITY: &str = "Appointment";

/// Validate and store a new appointment.
///
/// `created_by` is recorded for audit only.
pub async fn create(
    storage: &dyn Storage,
    input: CreateAppointment,
    created_by: Option<&str>,
) -> AppResult<Appointment> {
    require_fields(&[
        ("nomeCliente", input.nome_cliente.as_deref()),
        ("loja", input.loja.as_deref()),
    ])?;

    let status = status_or_default(non_blank(input.status.as_deref()).as_deref())?;
    let data = match input.data.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => None,
    };
    let hora = match input.hora.as_deref() {
        Some(raw) => parse_time(raw)?,
        None => None,
    };

    let ts = now();
    let appointment = Appointment {
        id: new_record_id(),
        nome_cliente: clean(input.nome_cliente),
        loja: clean(input.loja),
        data,
        hora,
        telefone: clean(input.telefone),
        email: clean(input.email),
        tipo_imovel: clean(input.tipo_imovel),
        ambientes: normalize_rooms(input.ambientes.unwrap_or_default()),
        endereco: clean(input.endereco),
        cep: clean(input.cep),
        numero: clean(input.numero),
        complemento: clean(input.complemento),
        bairro: clean(input.bairro),
        cidade: clean(input.cidade),
        estado: clean(input.estado),
        servico: service_label(input.servico.as_deref()),
        observacoes: clean(input.observacoes),
        status,
        created_by: created_by.map(str::to_string),
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_appointment(&appointment).await?;
    tracing::info!(appointment_id = %stored.id, status = %stored.status, "Appointment created");
    Ok(stored)
}

/// Active appointments, newest first, optionally of one status.
///
/// A blank filter means no filter; an unknown status is a validation error.
pub async fn list(storage: &dyn Storage, status: Option<&str>) -> AppResult<Vec<Appointment>> {
    let status = non_blank(status)
        .map(|s| s.parse::<AppointmentStatus>())
        .transpose()?;
    Ok(storage.list_active_appointments(status).await?)
}

/// Fetch one active appointment.
pub async fn get(storage: &dyn Storage, id: &str) -> AppResult<Appointment> {
    match storage.find_appointment(id).await? {
        Some(appointment) if appointment.is_active => Ok(appointment),
        _ => Err(CoreError::not_found(ENTITY, id).into()),
    }
}

/// Merge `input` into the stored appointment.
///
/// `nomeCliente` and `loja` may be replaced but not blanked. `data` and
/// `hora` are cleared by an explicit `null` or an empty string.
pub async fn update(
    storage: &dyn Storage,
    id: &str,
    input: UpdateAppointment,
) -> AppResult<Appointment> {
    let mut record = get(storage, id).await?;

    if let Some(nome) = replace_required("nomeCliente", input.nome_cliente)? {
        record.nome_cliente = nome;
    }
    if let Some(loja) = replace_required("loja", input.loja)? {
        record.loja = loja;
    }
    if let Some(data) = input.data {
        record.data = match data {
            Some(raw) => parse_date(&raw)?,
            None => None,
        };
    }
    if let Some(hora) = input.hora {
        record.hora = match hora {
            Some(raw) => parse_time(&raw)?,
            None => None,
        };
    }
    if let Some(status) = input.status {
        record.status = status.parse()?;
    }

    merge_text(&mut record.telefone, input.telefone);
    merge_text(&mut record.email, input.email);
    merge_text(&mut record.tipo_imovel, input.tipo_imovel);
    merge_text(&mut record.endereco, input.endereco);
    merge_text(&mut record.cep, input.cep);
    merge_text(&mut record.numero, input.numero);
    merge_text(&mut record.complemento, input.complemento);
    merge_text(&mut record.bairro, input.bairro);
    merge_text(&mut record.cidade, input.cidade);
    merge_text(&mut record.estado, input.estado);
    merge_text(&mut record.observacoes, input.observacoes);

    if let Some(rooms) = input.ambientes {
        record.ambientes = normalize_rooms(rooms);
    }
    if let Some(servico) = input.servico {
        record.servico = service_label(Some(&servico));
    }

    record.updated_at = now();

    let stored = storage
        .update_appointment(&record)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(appointment_id = %stored.id, status = %stored.status, "Appointment updated");
    Ok(stored)
}

/// Soft-delete: the record stays in storage with `isActive = false`.
pub async fn delete(storage: &dyn Storage, id: &str) -> AppResult<()> {
    let mut record = get(storage, id).await?;
    record.is_active = false;
    record.updated_at = now();

    storage
        .update_appointment(&record)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(appointment_id = %id, "Appointment deactivated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use agenda_core::appointment::DEFAULT_SERVICE_LABEL;
    use agenda_db::MemoryStorage;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn minimal() -> CreateAppointment {
        CreateAppointment {
            nome_cliente: Some("Ana".into()),
            loja: Some("Matriz".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let storage = MemoryStorage::new();
        let a = create(&storage, minimal(), Some("admin-id")).await.unwrap();

        assert_eq!(a.status, AppointmentStatus::Pendente);
        assert_eq!(a.servico, DEFAULT_SERVICE_LABEL);
        assert!(a.ambientes.is_empty());
        assert_eq!(a.data, None);
        assert_eq!(a.hora, None);
        assert!(a.is_active);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(a.created_by.as_deref(), Some("admin-id"));
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let storage = MemoryStorage::new();
        let err = create(&storage, CreateAppointment::default(), None)
            .await
            .unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg)) if msg.contains("nomeCliente") && msg.contains("loja")
        );
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let storage = MemoryStorage::new();
        let input = CreateAppointment {
            status: Some("invalido".into()),
            ..minimal()
        };
        assert_matches!(
            create(&storage, input, None).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn create_normalises_fields() {
        let storage = MemoryStorage::new();
        let input = CreateAppointment {
            nome_cliente: Some("  Ana Souza ".into()),
            data: Some("2026-03-10".into()),
            hora: Some("09:30:00".into()),
            ambientes: Some(vec!["Sala".into(), " Sala".into(), "Cozinha".into()]),
            status: Some(" ".into()),
            ..minimal()
        };
        let a = create(&storage, input, None).await.unwrap();
        assert_eq!(a.nome_cliente, "Ana Souza");
        assert_eq!(a.data, NaiveDate::from_ymd_opt(2026, 3, 10));
        assert_eq!(a.hora.as_deref(), Some("09:30"));
        assert_eq!(a.ambientes, vec!["Sala", "Cozinha"]);
        assert_eq!(a.status, AppointmentStatus::Pendente);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let storage = MemoryStorage::new();
        let a = create(&storage, minimal(), None).await.unwrap();
        let b = create(&storage, minimal(), None).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn empty_update_only_refreshes_timestamp() {
        let storage = MemoryStorage::new();
        let input = CreateAppointment {
            data: Some("2026-01-22".into()),
            hora: Some("14:00".into()),
            ambientes: Some(vec!["Sala".into()]),
            ..minimal()
        };
        let created = create(&storage, input, None).await.unwrap();

        let first = update(&storage, &created.id, UpdateAppointment::default())
            .await
            .unwrap();
        let second = update(&storage, &created.id, UpdateAppointment::default())
            .await
            .unwrap();

        for updated in [&first, &second] {
            let mut expected = created.clone();
            expected.updated_at = updated.updated_at;
            assert_eq!(*updated, expected);
            assert!(updated.updated_at >= created.updated_at);
        }
    }

    #[tokio::test]
    async fn update_merges_and_clears_nullable_fields() {
        let storage = MemoryStorage::new();
        let input = CreateAppointment {
            data: Some("2026-01-22".into()),
            hora: Some("14:00".into()),
            telefone: Some("41 9999".into()),
            ..minimal()
        };
        let created = create(&storage, input, None).await.unwrap();

        let patch = UpdateAppointment {
            data: Some(None),
            hora: Some(Some(String::new())),
            status: Some("confirmado".into()),
            observacoes: Some("Portão azul".into()),
            ..Default::default()
        };
        let updated = update(&storage, &created.id, patch).await.unwrap();

        assert_eq!(updated.data, None);
        assert_eq!(updated.hora, None);
        assert_eq!(updated.status, AppointmentStatus::Confirmado);
        assert_eq!(updated.observacoes, "Portão azul");
        assert_eq!(updated.telefone, "41 9999");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_rejects_blank_required_field_and_bad_status() {
        let storage = MemoryStorage::new();
        let created = create(&storage, minimal(), None).await.unwrap();

        let blank_loja = UpdateAppointment {
            loja: Some("  ".into()),
            ..Default::default()
        };
        assert_matches!(
            update(&storage, &created.id, blank_loja).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );

        let bad_status = UpdateAppointment {
            status: Some("invalido".into()),
            ..Default::default()
        };
        assert_matches!(
            update(&storage, &created.id, bad_status).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );

        // Neither failure wrote anything.
        assert_eq!(get(&storage, &created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let storage = MemoryStorage::new();
        assert_matches!(
            update(&storage, "missing", UpdateAppointment::default()).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn delete_is_soft_and_not_repeatable() {
        let storage = MemoryStorage::new();
        let created = create(&storage, minimal(), None).await.unwrap();

        delete(&storage, &created.id).await.unwrap();

        assert!(list(&storage, None).await.unwrap().is_empty());
        assert_matches!(
            get(&storage, &created.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            delete(&storage, &created.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
        assert_matches!(
            update(&storage, &created.id, UpdateAppointment::default()).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );

        let stored = storage.find_appointment(&created.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let storage = MemoryStorage::new();
        create(&storage, minimal(), None).await.unwrap();
        let confirmed = CreateAppointment {
            status: Some("confirmado".into()),
            ..minimal()
        };
        create(&storage, confirmed, None).await.unwrap();

        assert_eq!(list(&storage, None).await.unwrap().len(), 2);
        assert_eq!(list(&storage, Some("")).await.unwrap().len(), 2);
        let only = list(&storage, Some("confirmado")).await.unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].status, AppointmentStatus::Confirmado);
        assert_matches!(
            list(&storage, Some("bogus")).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
