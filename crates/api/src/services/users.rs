//! User record service.
//!
//! Everything except [`get_self`] is reached only through admin-gated
//! routes. Deletes are soft; an email is unique among active users.

use agenda_core::error::CoreError;
use agenda_core::fields::{non_blank, replace_required, require_fields};
use agenda_core::roles::Role;
use agenda_core::types::{new_record_id, now};
use agenda_core::user::{normalize_email, validate_email, validate_name};
use agenda_db::models::user::{CreateUser, UpdateUser, User};
use agenda_db::Storage;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::SeedAdminConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

const ENTITY: &str = "User";

fn hash(password: &str) -> AppResult<String> {
    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(CoreError::Validation)?;
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Conflict unless `email` is free or already held by `owner`.
async fn ensure_email_available(
    storage: &dyn Storage,
    email: &str,
    owner: Option<&str>,
) -> AppResult<()> {
    match storage.find_active_user_by_email(email).await? {
        Some(existing) if Some(existing.id.as_str()) != owner => Err(CoreError::Conflict(
            format!("Email '{email}' is already in use"),
        )
        .into()),
        _ => Ok(()),
    }
}

/// Create an account. The password is hashed before it reaches storage.
pub async fn create(storage: &dyn Storage, input: CreateUser) -> AppResult<User> {
    require_fields(&[
        ("nome", input.nome.as_deref()),
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ])?;

    let nome = input.nome.unwrap_or_default().trim().to_string();
    validate_name(&nome)?;
    let email = normalize_email(input.email.as_deref().unwrap_or_default());
    validate_email(&email)?;
    let role = match non_blank(input.role.as_deref()) {
        Some(raw) => raw.parse::<Role>()?,
        None => Role::default(),
    };
    let password_hash = hash(input.password.as_deref().unwrap_or_default())?;

    ensure_email_available(storage, &email, None).await?;

    let ts = now();
    let user = User {
        id: new_record_id(),
        nome,
        email,
        password_hash,
        role,
        is_active: true,
        created_at: ts,
        updated_at: ts,
    };

    let stored = storage.insert_user(&user).await?;
    tracing::info!(user_id = %stored.id, role = %stored.role, "User created");
    Ok(stored)
}

/// Active users, newest first.
pub async fn list(storage: &dyn Storage) -> AppResult<Vec<User>> {
    Ok(storage.list_active_users().await?)
}

/// The caller's own record. A token outliving its account resolves to
/// `NotFound`.
pub async fn get_self(storage: &dyn Storage, caller: &AuthUser) -> AppResult<User> {
    match storage.find_user(&caller.user_id).await? {
        Some(user) if user.is_active => Ok(user),
        _ => Err(CoreError::not_found(ENTITY, caller.user_id.clone()).into()),
    }
}

/// Merge `input` into the stored user.
///
/// A blank or absent password keeps the current hash. Inactive accounts can
/// be updated, which is how they are reactivated. Callers cannot change
/// their own role or deactivate themselves.
pub async fn update(
    storage: &dyn Storage,
    caller: &AuthUser,
    id: &str,
    input: UpdateUser,
) -> AppResult<User> {
    let mut user = storage
        .find_user(id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    if let Some(nome) = replace_required("nome", input.nome)? {
        validate_name(&nome)?;
        user.nome = nome;
    }
    if let Some(email) = replace_required("email", input.email)? {
        let email = normalize_email(&email);
        validate_email(&email)?;
        user.email = email;
    }
    if let Some(password) = non_blank(input.password.as_deref()) {
        user.password_hash = hash(&password)?;
    }
    if let Some(role) = non_blank(input.role.as_deref()) {
        let role: Role = role.parse()?;
        if role != user.role && user.id == caller.user_id {
            return Err(CoreError::Validation(
                "You cannot change your own role".to_string(),
            )
            .into());
        }
        user.role = role;
    }
    if let Some(active) = input.is_active {
        if !active && user.id == caller.user_id {
            return Err(CoreError::Validation(
                "You cannot deactivate your own account".to_string(),
            )
            .into());
        }
        user.is_active = active;
    }

    if user.is_active {
        ensure_email_available(storage, &user.email, Some(&user.id)).await?;
    }
    user.updated_at = now();

    let stored = storage
        .update_user(&user)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(user_id = %stored.id, active = stored.is_active, "User updated");
    Ok(stored)
}

/// Soft-delete an active account other than the caller's own.
pub async fn delete(storage: &dyn Storage, caller: &AuthUser, id: &str) -> AppResult<()> {
    let mut user = match storage.find_user(id).await? {
        Some(user) if user.is_active => user,
        _ => return Err(CoreError::not_found(ENTITY, id).into()),
    };
    if user.id == caller.user_id {
        return Err(
            CoreError::Validation("You cannot deactivate your own account".to_string()).into(),
        );
    }

    user.is_active = false;
    user.updated_at = now();
    storage
        .update_user(&user)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(user_id = %id, "User deactivated");
    Ok(())
}

/// Create the seed admin unless some account, active or not, already holds
/// its email. Returns whether an account was created.
pub async fn ensure_seed_admin(storage: &dyn Storage, seed: &SeedAdminConfig) -> AppResult<bool> {
    let email = normalize_email(&seed.email);
    if storage.find_user_by_email(&email).await?.is_some() {
        tracing::debug!(email = %email, "Seed admin already present");
        return Ok(false);
    }

    let input = CreateUser {
        nome: Some(seed.nome.clone()),
        email: Some(email),
        password: Some(seed.password.clone()),
        role: Some(Role::Admin.as_str().to_string()),
    };
    let admin = create(storage, input).await?;
    tracing::info!(user_id = %admin.id, email = %admin.email, "Seed admin created");
    Ok(true)
}
