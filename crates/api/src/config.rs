use axum::http::HeaderValue;

use crate::auth::jwt::{JwtConfig, DEFAULT_EXPIRY_HOURS, MAX_EXPIRY_HOURS};

/// Default seed admin credentials. Only suitable for a first local boot.
pub const DEFAULT_SEED_ADMIN_NAME: &str = "Administrador";
pub const DEFAULT_SEED_ADMIN_EMAIL: &str = "admin@agenda.com";
pub const DEFAULT_SEED_ADMIN_PASSWORD: &str = "admin123";

/// Origin list value that allows any origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which persistence adapter to run against.
#[derive(Clone)]
pub enum StorageConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

impl StorageConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::Memory => "memory",
        }
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageConfig::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("database_url", &"<redacted>")
                .field("max_connections", max_connections)
                .finish(),
            StorageConfig::Memory => f.write_str("Memory"),
        }
    }
}

/// Account created on boot when no user holds `email`.
#[derive(Clone)]
pub struct SeedAdminConfig {
    pub nome: String,
    pub email: String,
    pub password: String,
}

impl SeedAdminConfig {
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_SEED_ADMIN_PASSWORD
    }
}

impl Default for SeedAdminConfig {
    fn default() -> Self {
        Self {
            nome: DEFAULT_SEED_ADMIN_NAME.to_string(),
            email: DEFAULT_SEED_ADMIN_EMAIL.to_string(),
            password: DEFAULT_SEED_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl std::fmt::Debug for SeedAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdminConfig")
            .field("nome", &self.nome)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`; `*` allows any.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
    pub seed_admin: SeedAdminConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default            |
    /// |----------------------------|--------------------|
    /// | `HOST`                     | `0.0.0.0`          |
    /// | `PORT`                     | `5000`             |
    /// | `CORS_ORIGINS`             | `*`                |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`               |
    /// | `STORAGE_BACKEND`          | `postgres`         |
    /// | `DATABASE_URL`             | required (postgres)|
    /// | `DATABASE_MAX_CONNECTIONS` | `10`               |
    /// | `JWT_SECRET`               | required           |
    /// | `JWT_EXPIRY_HOURS`         | `24` (max `8784`)  |
    /// | `SEED_ADMIN_NAME`          | `Administrador`    |
    /// | `SEED_ADMIN_EMAIL`         | `admin@agenda.com` |
    /// | `SEED_ADMIN_PASSWORD`      | `admin123`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var("PORT", var("PORT"), 5000)?;

        let cors_raw = var("CORS_ORIGINS").unwrap_or_else(|| ANY_ORIGIN.into());
        let cors_origins: Vec<String> = cors_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_origins.iter().filter(|o| *o != ANY_ORIGIN) {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let request_timeout_secs: u64 =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30)?;

        let storage = match var("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("postgres") => StorageConfig::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_var(
                    "DATABASE_MAX_CONNECTIONS",
                    var("DATABASE_MAX_CONNECTIONS"),
                    10,
                )?,
            },
            Some("memory") => StorageConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "STORAGE_BACKEND",
                    value: other.to_string(),
                    reason: "expected 'postgres' or 'memory'".to_string(),
                })
            }
        };

        let jwt = JwtConfig {
            secret: var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            expiry_hours: parse_var("JWT_EXPIRY_HOURS", var("JWT_EXPIRY_HOURS"), DEFAULT_EXPIRY_HOURS)?,
        };
        if !(1..=MAX_EXPIRY_HOURS).contains(&jwt.expiry_hours) {
            return Err(ConfigError::Invalid {
                var: "JWT_EXPIRY_HOURS",
                value: jwt.expiry_hours.to_string(),
                reason: format!("must be between 1 and {MAX_EXPIRY_HOURS}"),
            });
        }

        let defaults = SeedAdminConfig::default();
        let seed_admin = SeedAdminConfig {
            nome: var("SEED_ADMIN_NAME").unwrap_or(defaults.nome),
            email: var("SEED_ADMIN_EMAIL").unwrap_or(defaults.email),
            password: var("SEED_ADMIN_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            jwt,
            seed_admin,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
