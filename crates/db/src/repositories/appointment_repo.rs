//! Repository for the `agendamentos` table.

use agenda_core::appointment::AppointmentStatus;
use sqlx::PgPool;

use crate::models::appointment::Appointment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome_cliente, loja, data, hora, telefone, email, tipo_imovel, \
                       ambientes, endereco, cep, numero, complemento, bairro, cidade, estado, \
                       servico, observacoes, status, created_by, is_active, created_at, updated_at";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a fully-built appointment, returning the stored row.
    pub async fn create(pool: &PgPool, a: &Appointment) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO agendamentos (
                id, nome_cliente, loja, data, hora, telefone, email, tipo_imovel,
                ambientes, endereco, cep, numero, complemento, bairro, cidade, estado,
                servico, observacoes, status, created_by, is_active, created_at, updated_at
             ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(&a.id)
            .bind(&a.nome_cliente)
            .bind(&a.loja)
            .bind(a.data)
            .bind(&a.hora)
            .bind(&a.telefone)
            .bind(&a.email)
            .bind(&a.tipo_imovel)
            .bind(&a.ambientes)
            .bind(&a.endereco)
            .bind(&a.cep)
            .bind(&a.numero)
            .bind(&a.complemento)
            .bind(&a.bairro)
            .bind(&a.cidade)
            .bind(&a.estado)
            .bind(&a.servico)
            .bind(&a.observacoes)
            .bind(a.status.as_str())
            .bind(&a.created_by)
            .bind(a.is_active)
            .bind(a.created_at)
            .bind(a.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agendamentos WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active appointments, newest first, optionally of one status.
    pub async fn list_active(
        pool: &PgPool,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM agendamentos
             WHERE is_active = true AND ($1::text IS NULL OR status = $1)
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(status.map(AppointmentStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of the row with `a.id`.
    ///
    /// `created_at` and `created_by` are never rewritten. Returns `None` if
    /// no row with the given id exists.
    pub async fn replace(pool: &PgPool, a: &Appointment) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE agendamentos SET
                nome_cliente = $2, loja = $3, data = $4, hora = $5, telefone = $6,
                email = $7, tipo_imovel = $8, ambientes = $9, endereco = $10, cep = $11,
                numero = $12, complemento = $13, bairro = $14, cidade = $15, estado = $16,
                servico = $17, observacoes = $18, status = $19, is_active = $20,
                updated_at = $21
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(&a.id)
            .bind(&a.nome_cliente)
            .bind(&a.loja)
            .bind(a.data)
            .bind(&a.hora)
            .bind(&a.telefone)
            .bind(&a.email)
            .bind(&a.tipo_imovel)
            .bind(&a.ambientes)
            .bind(&a.endereco)
            .bind(&a.cep)
            .bind(&a.numero)
            .bind(&a.complemento)
            .bind(&a.bairro)
            .bind(&a.cidade)
            .bind(&a.estado)
            .bind(&a.servico)
            .bind(&a.observacoes)
            .bind(a.status.as_str())
            .bind(a.is_active)
            .bind(a.updated_at)
            .fetch_optional(pool)
            .await
    }
}
