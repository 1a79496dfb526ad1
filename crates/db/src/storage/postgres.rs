//! Relational [`Storage`] over a PostgreSQL pool.

use agenda_core::appointment::AppointmentStatus;
use agenda_core::types::Timestamp;
use async_trait::async_trait;

use super::{Storage, StorageError};
use crate::models::appointment::Appointment;
use crate::models::client::Client;
use crate::models::finance::FinanceEntry;
use crate::models::measurement::Measurement;
use crate::models::notification::Notification;
use crate::models::project::Project;
use crate::models::store::Store;
use crate::models::user::User;
use crate::repositories::{
    AppointmentRepo, ClientRepo, FinanceRepo, MeasurementRepo, NotificationRepo, ProjectRepo,
    StoreRepo, UserRepo,
};
use crate::DbPool;

/// Delegates each operation to the matching `*Repo`.
#[derive(Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<User, StorageError> {
        Ok(UserRepo::create(&self.pool, user).await?)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn find_active_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::find_active_by_email(&self.pool, email).await?)
    }

    async fn list_active_users(&self) -> Result<Vec<User>, StorageError> {
        Ok(UserRepo::list_active(&self.pool).await?)
    }

    async fn update_user(&self, user: &User) -> Result<Option<User>, StorageError> {
        Ok(UserRepo::replace(&self.pool, user).await?)
    }

    async fn insert_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<Appointment, StorageError> {
        Ok(AppointmentRepo::create(&self.pool, appointment).await?)
    }

    async fn find_appointment(&self, id: &str) -> Result<Option<Appointment>, StorageError> {
        Ok(AppointmentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_active_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, StorageError> {
        Ok(AppointmentRepo::list_active(&self.pool, status).await?)
    }

    async fn update_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<Option<Appointment>, StorageError> {
        Ok(AppointmentRepo::replace(&self.pool, appointment).await?)
    }

    async fn insert_store(&self, store: &Store) -> Result<Store, StorageError> {
        Ok(StoreRepo::create(&self.pool, store).await?)
    }

    async fn find_active_store_by_name(&self, nome: &str) -> Result<Option<Store>, StorageError> {
        Ok(StoreRepo::find_active_by_name(&self.pool, nome).await?)
    }

    async fn list_active_stores(&self) -> Result<Vec<Store>, StorageError> {
        Ok(StoreRepo::list_active(&self.pool).await?)
    }

    async fn insert_client(&self, client: &Client) -> Result<Client, StorageError> {
        Ok(ClientRepo::create(&self.pool, client).await?)
    }

    async fn list_active_clients(&self) -> Result<Vec<Client>, StorageError> {
        Ok(ClientRepo::list_active(&self.pool).await?)
    }

    async fn insert_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<Measurement, StorageError> {
        Ok(MeasurementRepo::create(&self.pool, measurement).await?)
    }

    async fn list_active_measurements(&self) -> Result<Vec<Measurement>, StorageError> {
        Ok(MeasurementRepo::list_active(&self.pool).await?)
    }

    async fn insert_project(&self, project: &Project) -> Result<Project, StorageError> {
        Ok(ProjectRepo::create(&self.pool, project).await?)
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError> {
        Ok(ProjectRepo::list_active(&self.pool).await?)
    }

    async fn insert_finance_entry(
        &self,
        entry: &FinanceEntry,
    ) -> Result<FinanceEntry, StorageError> {
        Ok(FinanceRepo::create(&self.pool, entry).await?)
    }

    async fn list_active_finance_entries(&self) -> Result<Vec<FinanceEntry>, StorageError> {
        Ok(FinanceRepo::list_active(&self.pool).await?)
    }

    async fn insert_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, StorageError> {
        Ok(NotificationRepo::create(&self.pool, notification).await?)
    }

    async fn list_notifications_for(
        &self,
        usuario_id: &str,
    ) -> Result<Vec<Notification>, StorageError> {
        Ok(NotificationRepo::list_for_user(&self.pool, usuario_id).await?)
    }

    async fn mark_notification_read(
        &self,
        id: &str,
        usuario_id: &str,
        at: Timestamp,
    ) -> Result<Option<Notification>, StorageError> {
        Ok(NotificationRepo::mark_read(&self.pool, id, usuario_id, at).await?)
    }
}
