//! Project (projeto) records: create and list.

use agenda_core::appointment::parse_date;
use agenda_core::error::CoreError;
use agenda_core::fields::{clean, non_blank, require_fields};
use agenda_core::records::{label_or, DEFAULT_KIND, PROJECT_INITIAL_STATUS};
use agenda_core::types::{new_record_id, now};
use agenda_db::models::project::{CreateProject, Project};
use agenda_db::Storage;

use crate::error::AppResult;

/// Store a new project in the quoting (`orcamento`) stage.
pub async fn create(
    storage: &dyn Storage,
    input: CreateProject,
    created_by: &str,
) -> AppResult<Project> {
    require_fields(&[
        ("medicaoId", input.medicao_id.as_deref()),
        ("clienteId", input.cliente_id.as_deref()),
        ("nomeProjeto", input.nome_projeto.as_deref()),
    ])?;

    let valor_total = match &input.valor_total {
        Some(amount) => amount.resolve("valorTotal")?,
        None => 0.0,
    };
    if valor_total < 0.0 {
        return Err(CoreError::Validation(
            "valorTotal must not be negative".to_string(),
        )
        .into());
    }
    let prazo_entrega = match input.prazo_entrega.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => None,
    };

    let ts = now();
    let project = Project {
        id: new_record_id(),
        medicao_id: clean(input.medicao_id),
        cliente_id: clean(input.cliente_id),
        loja_id: non_blank(input.loja_id.as_deref()),
        nome_projeto: clean(input.nome_projeto),
        descricao: clean(input.descricao),
        tipo_projeto: label_or(input.tipo_projeto.as_deref(), DEFAULT_KIND),
        materiais: input.materiais.unwrap_or_default(),
        valor_total,
        prazo_entrega,
        status: PROJECT_INITIAL_STATUS.to_string(),
        arquivos: Vec::new(),
        aprovado_por: None,
        created_by: created_by.to_string(),
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_project(&project).await?;
    tracing::info!(project_id = %stored.id, medicao_id = %stored.medicao_id, "Project created");
    Ok(stored)
}

/// Active projects, newest first.
pub async fn list(storage: &dyn Storage) -> AppResult<Vec<Project>> {
    Ok(storage.list_active_projects().await?)
}
