//! Store (loja) records: create and list.

use agenda_core::error::CoreError;
use agenda_core::fields::{clean, require_fields};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::store::{CreateStore, Store};
use agenda_db::Storage;

use crate::error::AppResult;

/// Create a store. The name must be unique among active stores.
pub async fn create(storage: &dyn Storage, input: CreateStore) -> AppResult<Store> {
    require_fields(&[("nome", input.nome.as_deref())])?;
    let nome = clean(input.nome);

    if storage.find_active_store_by_name(&nome).await?.is_some() {
        return Err(CoreError::Conflict(format!("Store '{nome}' already exists")).into());
    }

    let ts = now();
    let store = Store {
        id: new_record_id(),
        nome,
        cnpj: clean(input.cnpj),
        endereco: input.endereco.unwrap_or_default().normalized(),
        telefone: clean(input.telefone),
        email: clean(input.email),
        responsavel: clean(input.responsavel),
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_store(&store).await?;
    tracing::info!(store_id = %stored.id, nome = %stored.nome, "Store created");
    Ok(stored)
}

/// Active stores ordered by name.
pub async fn list(storage: &dyn Storage) -> AppResult<Vec<Store>> {
    Ok(storage.list_active_stores().await?)
}
