#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use agenda_api::auth::jwt::JwtConfig;
use agenda_api::config::{SeedAdminConfig, ServerConfig, StorageConfig};
use agenda_api::router::build_app_router;
use agenda_api::services::users;
use agenda_api::state::AppState;
use agenda_db::MemoryStorage;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough";
pub const ADMIN_EMAIL: &str = "admin@agenda.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Build a test `ServerConfig` with the in-memory backend and default seed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::Memory,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 24,
        },
        seed_admin: SeedAdminConfig::default(),
    }
}

/// Build the full application router over fresh in-memory storage with the
/// seed admin in place.
///
/// Uses [`build_app_router`] so tests exercise the same middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) as production.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let storage = Arc::new(MemoryStorage::new());
    users::ensure_seed_admin(storage.as_ref(), &config.seed_admin)
        .await
        .expect("seed admin should be created");

    let state = AppState {
        storage,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> axum::response::Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> axum::response::Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> axum::response::Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> axum::response::Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> axum::response::Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a raw body with a JSON content type (for malformed-body tests).
pub async fn post_raw_auth(
    app: Router,
    uri: &str,
    body: &'static str,
    token: &str,
) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Log in and return the bearer token.
pub async fn login(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "handle": email, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    body_json(response).await["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}

pub async fn admin_token(app: Router) -> String {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// Create a `user`-role account through the API and return `(id, token)`.
pub async fn create_regular_user(app: Router, admin_token: &str, email: &str) -> (String, String) {
    let body = serde_json::json!({
        "nome": "Operador",
        "email": email,
        "password": "operador1",
    });
    let response = post_json_auth(app.clone(), "/api/users", body, admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();
    let token = login(app, email, "operador1").await;
    (id, token)
}

/// Assert that no object anywhere inside `value` carries a password field.
pub fn assert_no_password(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map {
                let lower = key.to_lowercase();
                assert!(
                    !lower.contains("password") && lower != "senha",
                    "response must not contain a password field, found '{key}'"
                );
                assert_no_password(inner);
            }
        }
        serde_json::Value::Array(items) => items.iter().for_each(assert_no_password),
        _ => {}
    }
}
