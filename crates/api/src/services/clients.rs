//! Client (cliente) records: create and list.

use agenda_core::appointment::parse_date;
use agenda_core::fields::{clean, require_fields};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::client::{Client, CreateClient};
use agenda_db::Storage;

use crate::error::AppResult;

pub async fn create(storage: &dyn Storage, input: CreateClient) -> AppResult<Client> {
    require_fields(&[("nome", input.nome.as_deref())])?;

    let data_nascimento = match input.data_nascimento.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => None,
    };

    let ts = now();
    let client = Client {
        id: new_record_id(),
        nome: clean(input.nome),
        email: clean(input.email),
        telefone: clean(input.telefone),
        cpf: clean(input.cpf),
        endereco: input.endereco.unwrap_or_default().normalized(),
        data_nascimento,
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_client(&client).await?;
    tracing::info!(client_id = %stored.id, "Client created");
    Ok(stored)
}

/// Active clients ordered by name.
pub async fn list(storage: &dyn Storage) -> AppResult<Vec<Client>> {
    Ok(storage.list_active_clients().await?)
}
