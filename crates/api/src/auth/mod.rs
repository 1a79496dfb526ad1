//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT generation and validation.
//!
//! [`authenticate`] and [`require_role`] are the checks the request
//! extractors in [`crate::middleware`] are built on.

pub mod jwt;
pub mod password;

use agenda_core::roles::Role;

use crate::middleware::auth::AuthUser;
use jwt::{validate_token, JwtConfig};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Returned for an unknown handle, an inactive account and a wrong
    /// password alike.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing Authorization header")]
    MissingToken,

    /// Malformed header, bad signature, expired, or unreadable claims.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    Forbidden(String),
}

/// Resolve the caller identity from a raw `Authorization` header value.
pub fn authenticate(header: Option<&str>, config: &JwtConfig) -> Result<AuthUser, AuthError> {
    let header = header.ok_or(AuthError::MissingToken)?;
    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidToken)?;

    let claims = validate_token(token, config).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AuthError::InvalidToken
    })?;
    let role: Role = claims.role.parse().map_err(|_| AuthError::InvalidToken)?;

    Ok(AuthUser {
        user_id: claims.sub,
        email: claims.email,
        role,
    })
}

/// Fail with [`AuthError::Forbidden`] unless `user` holds exactly `role`.
pub fn require_role(user: &AuthUser, role: Role) -> Result<(), AuthError> {
    if user.role != role {
        return Err(AuthError::Forbidden(format!("{role} role required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            expiry_hours: 1,
        }
    }

    #[test]
    fn missing_header_is_missing_token() {
        assert_matches!(authenticate(None, &config()), Err(AuthError::MissingToken));
    }

    #[test]
    fn non_bearer_header_is_invalid_token() {
        assert_matches!(
            authenticate(Some("Basic abc"), &config()),
            Err(AuthError::InvalidToken)
        );
        assert_matches!(
            authenticate(Some("Bearer "), &config()),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn valid_token_yields_identity() {
        let token = jwt::generate_token("u-1", "ana@agenda.com", Role::User, &config()).unwrap();
        let user = authenticate(Some(&format!("Bearer {token}")), &config()).unwrap();
        assert_eq!(user.user_id, "u-1");
        assert_eq!(user.email, "ana@agenda.com");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn role_check() {
        let user = AuthUser {
            user_id: "u-1".to_string(),
            email: "ana@agenda.com".to_string(),
            role: Role::User,
        };
        assert_matches!(require_role(&user, Role::Admin), Err(AuthError::Forbidden(_)));
        assert!(require_role(&user, Role::User).is_ok());
    }
}
