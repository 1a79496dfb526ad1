use agenda_core::error::CoreError;
use agenda_db::StorageError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`AuthError`] and [`StorageError`] and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// `{"error", "code"}` JSON body every failure shares.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A request that could not be parsed (malformed JSON body, query
    /// string or path segment).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Auth errors ---
            AppError::Auth(auth) => {
                let (status, code) = match auth {
                    AuthError::InvalidCredentials => {
                        (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
                    }
                    AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "MISSING_TOKEN"),
                    AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
                    AuthError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
                };
                (status, code, auth.to_string())
            }

            // --- Storage errors ---
            AppError::Storage(StorageError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                self.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
