//! HTTP-level integration tests for login, `/auth/me` and token checks.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, assert_no_password, body_json, create_regular_user, get, get_auth, post_json,
    ADMIN_EMAIL, ADMIN_PASSWORD, TEST_JWT_SECRET,
};
use agenda_api::auth::jwt::{generate_token, JwtConfig};
use agenda_core::roles::Role;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// The seeded admin logs in with the default credentials.
#[tokio::test]
async fn test_login_seed_admin() {
    let app = common::build_test_app().await;
    let body = serde_json::json!({ "handle": ADMIN_EMAIL, "password": ADMIN_PASSWORD });

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["expiresIn"], 24 * 3600);
    assert_eq!(json["user"]["email"], ADMIN_EMAIL);
    assert_eq!(json["user"]["role"], "admin");
    assert_eq!(json["user"]["nome"], "Administrador");
    assert_eq!(json["user"]["isActive"], true);
    assert_no_password(&json);
}

/// `email`/`senha` are accepted in place of `handle`/`password`, and the
/// handle is case-insensitive.
#[tokio::test]
async fn test_login_accepts_aliases() {
    let app = common::build_test_app().await;
    let body = serde_json::json!({ "email": "  ADMIN@agenda.com", "senha": ADMIN_PASSWORD });

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = common::build_test_app().await;
    let body = serde_json::json!({ "handle": ADMIN_EMAIL, "password": "incorrect" });

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_login_unknown_handle() {
    let app = common::build_test_app().await;
    let body = serde_json::json!({ "handle": "nobody@agenda.com", "password": ADMIN_PASSWORD });

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = common::build_test_app().await;

    let response = post_json(app, "/api/auth/login", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// /auth/me
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_me_returns_own_record() {
    let app = common::build_test_app().await;
    let admin = admin_token(app.clone()).await;
    let (id, token) = create_regular_user(app.clone(), &admin, "op@agenda.com").await;

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["email"], "op@agenda.com");
    assert_eq!(json["role"], "user");
    assert_no_password(&json);
}

#[tokio::test]
async fn test_me_without_token_is_401() {
    let app = common::build_test_app().await;

    let response = get(app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_garbage_token_is_401() {
    let app = common::build_test_app().await;

    let response = get_auth(app, "/api/auth/me", "not-a-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_401() {
    let app = common::build_test_app().await;
    let foreign = JwtConfig {
        secret: format!("{TEST_JWT_SECRET}-other"),
        expiry_hours: 1,
    };
    let token = generate_token("someone", ADMIN_EMAIL, Role::Admin, &foreign).unwrap();

    let response = get_auth(app, "/api/agendamentos", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid token whose account was deactivated can no longer read itself.
#[tokio::test]
async fn test_me_after_deactivation_is_404() {
    let app = common::build_test_app().await;
    let admin = admin_token(app.clone()).await;
    let (id, token) = create_regular_user(app.clone(), &admin, "gone@agenda.com").await;

    let response =
        common::delete_auth(app.clone(), &format!("/api/users/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
