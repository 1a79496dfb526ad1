//! JWT access-token generation and validation.
//!
//! Tokens are HS256-signed and carry a [`Claims`] payload. No session state
//! is kept server-side: the token is the session until it expires.

use agenda_core::roles::Role;
use agenda_core::types::RecordId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default token lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRY_HOURS: i64 = 24 * 366;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's record id.
    pub sub: RecordId,
    /// The user's normalised email at issue time.
    pub email: String,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for token signing and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours.
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Token lifetime in seconds, as reported to clients in `expiresIn`.
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_hours.saturating_mul(3600)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

/// Generate an HS256 token for the given user.
pub fn generate_token(
    user_id: &str,
    email: &str,
    role: Role,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.as_str().to_string(),
        exp: now.saturating_add(config.expiry_secs()),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
