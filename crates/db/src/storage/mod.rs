//! The persistence adapter seam.
//!
//! Services talk to a `dyn Storage`; the binary picks the implementation
//! from configuration:
//!
//! - [`postgres::PgStorage`] -- relational store over a `sqlx` pool.
//! - [`memory::MemoryStorage`] -- in-process document store.
//!
//! Every write touches exactly one record. Updates replace the whole record
//! (last write wins); merging happens in the service layer.

use agenda_core::appointment::AppointmentStatus;
use agenda_core::types::Timestamp;
use async_trait::async_trait;

use crate::models::appointment::Appointment;
use crate::models::client::Client;
use crate::models::finance::FinanceEntry;
use crate::models::measurement::Measurement;
use crate::models::notification::Notification;
use crate::models::project::Project;
use crate::models::store::Store;
use crate::models::user::User;

pub mod memory;
pub mod postgres;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A uniqueness rule was violated (active email, active store name).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored value could not be decoded into its domain type.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    /// PostgreSQL unique violations (`23505`) on constraints named `uq_*`
    /// become [`StorageError::Conflict`]; decode failures become
    /// [`StorageError::Corrupt`].
    fn from(err: sqlx::Error) -> Self {
        if let Some(constraint) = unique_violation(&err) {
            return StorageError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
        if matches!(
            err,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)
        ) {
            return StorageError::Corrupt(err.to_string());
        }
        StorageError::Database(err)
    }
}

/// Name of the violated `uq_*` constraint, if `err` is a unique violation.
fn unique_violation(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some("23505") {
        return None;
    }
    db_err
        .constraint()
        .filter(|name| name.starts_with("uq_"))
        .map(str::to_string)
}

#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Short name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StorageError>;

    // --- users ---

    async fn insert_user(&self, user: &User) -> Result<User, StorageError>;

    /// Look up a user by id regardless of the active flag.
    async fn find_user(&self, id: &str) -> Result<Option<User>, StorageError>;

    /// Look up a user by normalised email regardless of the active flag.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    async fn find_active_user_by_email(&self, email: &str)
        -> Result<Option<User>, StorageError>;

    /// Active users, most recently created first.
    async fn list_active_users(&self) -> Result<Vec<User>, StorageError>;

    /// Replace the stored user with the same id. `None` if no such row.
    async fn update_user(&self, user: &User) -> Result<Option<User>, StorageError>;

    // --- appointments ---

    async fn insert_appointment(&self, appointment: &Appointment)
        -> Result<Appointment, StorageError>;

    /// Look up an appointment by id regardless of the active flag.
    async fn find_appointment(&self, id: &str) -> Result<Option<Appointment>, StorageError>;

    /// Active appointments, optionally of one status, most recently created
    /// first with ties broken by id.
    async fn list_active_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, StorageError>;

    /// Replace the stored appointment with the same id. `None` if no such row.
    async fn update_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<Option<Appointment>, StorageError>;

    // --- stores ---

    async fn insert_store(&self, store: &Store) -> Result<Store, StorageError>;

    async fn find_active_store_by_name(&self, nome: &str) -> Result<Option<Store>, StorageError>;

    /// Active stores ordered by name.
    async fn list_active_stores(&self) -> Result<Vec<Store>, StorageError>;

    // --- clients ---

    async fn insert_client(&self, client: &Client) -> Result<Client, StorageError>;

    /// Active clients ordered by name.
    async fn list_active_clients(&self) -> Result<Vec<Client>, StorageError>;

    // --- measurements ---

    async fn insert_measurement(&self, measurement: &Measurement)
        -> Result<Measurement, StorageError>;

    /// Active measurements, newest first with ties broken by id.
    async fn list_active_measurements(&self) -> Result<Vec<Measurement>, StorageError>;

    // --- projects ---

    async fn insert_project(&self, project: &Project) -> Result<Project, StorageError>;

    /// Active projects, newest first with ties broken by id.
    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError>;

    // --- finance ---

    async fn insert_finance_entry(&self, entry: &FinanceEntry)
        -> Result<FinanceEntry, StorageError>;

    /// Active entries by movement date, most recent first, ties by id.
    async fn list_active_finance_entries(&self) -> Result<Vec<FinanceEntry>, StorageError>;

    // --- notifications ---

    async fn insert_notification(&self, notification: &Notification)
        -> Result<Notification, StorageError>;

    /// Active notifications addressed to `usuario_id`, newest first.
    async fn list_notifications_for(
        &self,
        usuario_id: &str,
    ) -> Result<Vec<Notification>, StorageError>;

    /// Mark an active notification read if `usuario_id` is its recipient.
    /// Keeps the first read time. `None` when nothing matches.
    async fn mark_notification_read(
        &self,
        id: &str,
        usuario_id: &str,
        at: Timestamp,
    ) -> Result<Option<Notification>, StorageError>;
}
