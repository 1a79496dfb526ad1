//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, email, password_hash, role, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a fully-built user, returning the stored row.
    pub async fn create(pool: &PgPool, user: &User) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, nome, email, password_hash, role, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&user.id)
            .bind(&user.nome)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email, active or not. Prefers the active row when a
    /// deactivated account shares the address.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE email = $1
             ORDER BY is_active DESC, created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the active user holding `email`.
    pub async fn find_active_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1 AND is_active = true");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List active users ordered by most recently created first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE is_active = true ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of the row with `user.id`.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn replace(pool: &PgPool, user: &User) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                nome = $2,
                email = $3,
                password_hash = $4,
                role = $5,
                is_active = $6,
                updated_at = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&user.id)
            .bind(&user.nome)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.updated_at)
            .fetch_optional(pool)
            .await
    }
}
