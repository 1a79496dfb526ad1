//! In-process document [`Storage`].
//!
//! Each collection is a map from record id to the whole record, guarded by a
//! `tokio` read/write lock. Contents live as long as the process. The same
//! uniqueness rules as the relational schema are enforced here so both
//! backends reject the same writes.

use std::cmp::Ordering;
use std::collections::HashMap;

use agenda_core::appointment::AppointmentStatus;
use agenda_core::types::{RecordId, Timestamp};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::models::appointment::Appointment;
use crate::models::client::Client;
use crate::models::finance::FinanceEntry;
use crate::models::measurement::Measurement;
use crate::models::notification::Notification;
use crate::models::project::Project;
use crate::models::store::Store;
use crate::models::user::User;

#[derive(Default)]
pub struct MemoryStorage {
    users: RwLock<HashMap<RecordId, User>>,
    appointments: RwLock<HashMap<RecordId, Appointment>>,
    stores: RwLock<HashMap<RecordId, Store>>,
    clients: RwLock<HashMap<RecordId, Client>>,
    measurements: RwLock<HashMap<RecordId, Measurement>>,
    projects: RwLock<HashMap<RecordId, Project>>,
    finance: RwLock<HashMap<RecordId, FinanceEntry>>,
    notifications: RwLock<HashMap<RecordId, Notification>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate(constraint: &str) -> StorageError {
    StorageError::Conflict(format!(
        "Duplicate value violates unique constraint: {constraint}"
    ))
}

fn duplicate_id(id: &str) -> StorageError {
    StorageError::Conflict(format!("Record with id {id} already exists"))
}

/// Newest first, ties broken by id ascending.
fn newest_first(a: (&Timestamp, &str), b: (&Timestamp, &str)) -> Ordering {
    b.0.cmp(a.0).then_with(|| a.1.cmp(b.1))
}

/// Insert `record` under `id` unless the id is taken.
async fn insert_new<T: Clone>(
    map: &RwLock<HashMap<RecordId, T>>,
    id: &str,
    record: &T,
) -> Result<T, StorageError> {
    let mut map = map.write().await;
    if map.contains_key(id) {
        return Err(duplicate_id(id));
    }
    map.insert(id.to_string(), record.clone());
    Ok(record.clone())
}

fn email_taken(users: &HashMap<RecordId, User>, candidate: &User) -> bool {
    candidate.is_active
        && users
            .values()
            .any(|u| u.is_active && u.id != candidate.id && u.email == candidate.email)
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<User, StorageError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(duplicate_id(&user.id));
        }
        if email_taken(&users, user) {
            return Err(duplicate("uq_users_email_active"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let users = self.users.read().await;
        let mut matches: Vec<&User> = users.values().filter(|u| u.email == email).collect();
        matches.sort_by(|a, b| {
            b.is_active
                .cmp(&a.is_active)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(matches.first().map(|u| (*u).clone()))
    }

    async fn find_active_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.is_active && u.email == email)
            .cloned())
    }

    async fn list_active_users(&self) -> Result<Vec<User>, StorageError> {
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.is_active)
            .cloned()
            .collect();
        users.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(users)
    }

    async fn update_user(&self, user: &User) -> Result<Option<User>, StorageError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Ok(None);
        }
        if email_taken(&users, user) {
            return Err(duplicate("uq_users_email_active"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(Some(user.clone()))
    }

    async fn insert_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<Appointment, StorageError> {
        let mut appointments = self.appointments.write().await;
        if appointments.contains_key(&appointment.id) {
            return Err(duplicate_id(&appointment.id));
        }
        appointments.insert(appointment.id.clone(), appointment.clone());
        Ok(appointment.clone())
    }

    async fn find_appointment(&self, id: &str) -> Result<Option<Appointment>, StorageError> {
        Ok(self.appointments.read().await.get(id).cloned())
    }

    async fn list_active_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, StorageError> {
        let mut list: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.is_active && status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        list.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(list)
    }

    async fn update_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<Option<Appointment>, StorageError> {
        let mut appointments = self.appointments.write().await;
        let Some(stored) = appointments.get_mut(&appointment.id) else {
            return Ok(None);
        };
        let mut replacement = appointment.clone();
        // Creation metadata is fixed at insert, as in the relational schema.
        replacement.created_at = stored.created_at;
        replacement.created_by = stored.created_by.clone();
        *stored = replacement.clone();
        Ok(Some(replacement))
    }

    async fn insert_store(&self, store: &Store) -> Result<Store, StorageError> {
        let mut stores = self.stores.write().await;
        if stores.contains_key(&store.id) {
            return Err(duplicate_id(&store.id));
        }
        if store.is_active
            && stores
                .values()
                .any(|s| s.is_active && s.nome == store.nome)
        {
            return Err(duplicate("uq_lojas_nome_active"));
        }
        stores.insert(store.id.clone(), store.clone());
        Ok(store.clone())
    }

    async fn find_active_store_by_name(&self, nome: &str) -> Result<Option<Store>, StorageError> {
        Ok(self
            .stores
            .read()
            .await
            .values()
            .find(|s| s.is_active && s.nome == nome)
            .cloned())
    }

    async fn list_active_stores(&self) -> Result<Vec<Store>, StorageError> {
        let mut stores: Vec<Store> = self
            .stores
            .read()
            .await
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        stores.sort_by(|a, b| a.nome.cmp(&b.nome).then_with(|| a.id.cmp(&b.id)));
        Ok(stores)
    }

    async fn insert_client(&self, client: &Client) -> Result<Client, StorageError> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.id) {
            return Err(duplicate_id(&client.id));
        }
        clients.insert(client.id.clone(), client.clone());
        Ok(client.clone())
    }

    async fn list_active_clients(&self) -> Result<Vec<Client>, StorageError> {
        let mut clients: Vec<Client> = self
            .clients
            .read()
            .await
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        clients.sort_by(|a, b| a.nome.cmp(&b.nome).then_with(|| a.id.cmp(&b.id)));
        Ok(clients)
    }

    async fn insert_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<Measurement, StorageError> {
        insert_new(&self.measurements, &measurement.id, measurement).await
    }

    async fn list_active_measurements(&self) -> Result<Vec<Measurement>, StorageError> {
        let mut list: Vec<Measurement> = self
            .measurements
            .read()
            .await
            .values()
            .filter(|m| m.is_active)
            .cloned()
            .collect();
        list.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(list)
    }

    async fn insert_project(&self, project: &Project) -> Result<Project, StorageError> {
        insert_new(&self.projects, &project.id, project).await
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError> {
        let mut list: Vec<Project> = self
            .projects
            .read()
            .await
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        list.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(list)
    }

    async fn insert_finance_entry(
        &self,
        entry: &FinanceEntry,
    ) -> Result<FinanceEntry, StorageError> {
        insert_new(&self.finance, &entry.id, entry).await
    }

    async fn list_active_finance_entries(&self) -> Result<Vec<FinanceEntry>, StorageError> {
        let mut list: Vec<FinanceEntry> = self
            .finance
            .read()
            .await
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            newest_first((&a.data_movimento, &a.id), (&b.data_movimento, &b.id))
        });
        Ok(list)
    }

    async fn insert_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, StorageError> {
        insert_new(&self.notifications, &notification.id, notification).await
    }

    async fn list_notifications_for(
        &self,
        usuario_id: &str,
    ) -> Result<Vec<Notification>, StorageError> {
        let mut list: Vec<Notification> = self
            .notifications
            .read()
            .await
            .values()
            .filter(|n| n.is_active && n.usuario_id == usuario_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(list)
    }

    async fn mark_notification_read(
        &self,
        id: &str,
        usuario_id: &str,
        at: Timestamp,
    ) -> Result<Option<Notification>, StorageError> {
        let mut notifications = self.notifications.write().await;
        let Some(stored) = notifications
            .get_mut(id)
            .filter(|n| n.is_active && n.usuario_id == usuario_id)
        else {
            return Ok(None);
        };
        stored.lida = true;
        if stored.data_leitura.is_none() {
            stored.data_leitura = Some(at);
        }
        Ok(Some(stored.clone()))
    }
}
