//! User entity model and DTOs.

use agenda_core::roles::Role;
use agenda_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            nome: user.nome.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for creating a user.
///
/// Fields are optional at the serde level so that missing values surface as
/// a single validation error naming all of them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub nome: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for updating a user. Absent fields are left untouched; a
/// blank password keeps the existing hash.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub nome: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
    pub role: Option<String>,
    #[serde(alias = "ativo")]
    pub is_active: Option<bool>,
}
