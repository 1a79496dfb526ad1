//! Login: handle + password in, signed token out.

use agenda_core::fields::require_fields;
use agenda_core::user::normalize_email;
use agenda_db::models::user::User;
use agenda_db::Storage;

use crate::auth::jwt::{generate_token, JwtConfig};
use crate::auth::password::verify_password;
use crate::auth::AuthError;
use crate::error::{AppError, AppResult};

/// A freshly issued token and the account it was issued for.
#[derive(Debug)]
pub struct Session {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

/// Authenticate an active user by email and password.
///
/// Unknown email, inactive account and wrong password all fail the same way.
pub async fn login(
    storage: &dyn Storage,
    jwt: &JwtConfig,
    handle: Option<&str>,
    password: Option<&str>,
) -> AppResult<Session> {
    require_fields(&[("handle", handle), ("password", password)])?;
    let email = normalize_email(handle.unwrap_or_default());
    let password = password.unwrap_or_default();

    let Some(user) = storage.find_active_user_by_email(&email).await? else {
        tracing::info!(email = %email, "Login rejected: no active account");
        return Err(AuthError::InvalidCredentials.into());
    };

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = generate_token(&user.id, &user.email, user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");

    Ok(Session {
        token,
        expires_in: jwt.expiry_secs(),
        user,
    })
}
