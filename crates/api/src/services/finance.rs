//! Finance entries (movimentos financeiros): record and list.

use agenda_core::error::CoreError;
use agenda_core::fields::{clean, non_blank, require_fields};
use agenda_core::records::{label_or, parse_instant, DEFAULT_KIND, FINANCE_INITIAL_STATUS};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::finance::{CreateFinanceEntry, FinanceEntry};
use agenda_db::Storage;

use crate::error::AppResult;

/// Record a finance entry. `valor` is required and may be sent as a number
/// or numeric text; its sign is kept as given.
pub async fn create(
    storage: &dyn Storage,
    input: CreateFinanceEntry,
    created_by: &str,
) -> AppResult<FinanceEntry> {
    require_fields(&[
        ("tipo", input.tipo.as_deref()),
        ("descricao", input.descricao.as_deref()),
        ("valor", input.valor.as_ref().map(|_| "given")),
    ])?;
    let valor = input
        .valor
        .as_ref()
        .ok_or_else(|| CoreError::Validation("Missing required fields: valor".to_string()))?
        .resolve("valor")?;

    let ts = now();
    let data_movimento = match input.data_movimento.as_deref() {
        Some(raw) => parse_instant(raw)?.unwrap_or(ts),
        None => ts,
    };

    let entry = FinanceEntry {
        id: new_record_id(),
        projeto_id: non_blank(input.projeto_id.as_deref()),
        cliente_id: non_blank(input.cliente_id.as_deref()),
        tipo: clean(input.tipo),
        categoria: label_or(input.categoria.as_deref(), DEFAULT_KIND),
        descricao: clean(input.descricao),
        valor,
        data_movimento,
        forma_pagamento: label_or(input.forma_pagamento.as_deref(), DEFAULT_KIND),
        status: FINANCE_INITIAL_STATUS.to_string(),
        comprovante: String::new(),
        created_by: created_by.to_string(),
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_finance_entry(&entry).await?;
    tracing::info!(entry_id = %stored.id, tipo = %stored.tipo, "Finance entry recorded");
    Ok(stored)
}

/// Active entries, most recent movement first.
pub async fn list(storage: &dyn Storage) -> AppResult<Vec<FinanceEntry>> {
    Ok(storage.list_active_finance_entries().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use agenda_core::records::AmountInput;
    use agenda_db::MemoryStorage;
    use assert_matches::assert_matches;

    fn input(valor: AmountInput) -> CreateFinanceEntry {
        CreateFinanceEntry {
            tipo: Some("receita".into()),
            descricao: Some("Sinal do projeto".into()),
            valor: Some(valor),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let storage = MemoryStorage::new();
        let e = create(&storage, input(AmountInput::Number(1200.0)), "caixa")
            .await
            .unwrap();

        assert_eq!(e.valor, 1200.0);
        assert_eq!(e.categoria, "outros");
        assert_eq!(e.forma_pagamento, "outros");
        assert_eq!(e.status, "pendente");
        assert_eq!(e.comprovante, "");
        assert_eq!(e.projeto_id, None);
        assert_eq!(e.data_movimento, e.created_at);
    }

    #[tokio::test]
    async fn zero_is_a_valid_amount() {
        let storage = MemoryStorage::new();
        let e = create(&storage, input(AmountInput::Text("0".into())), "caixa")
            .await
            .unwrap();
        assert_eq!(e.valor, 0.0);
    }

    #[tokio::test]
    async fn create_rejects_missing_or_bad_amount() {
        let storage = MemoryStorage::new();
        let missing = CreateFinanceEntry {
            valor: None,
            ..input(AmountInput::Number(1.0))
        };
        assert_matches!(
            create(&storage, missing, "caixa").await,
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "Missing required fields: valor"
        );
        assert_matches!(
            create(&storage, input(AmountInput::Text("muito".into())), "caixa").await,
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "valor must be a number"
        );
    }
}
