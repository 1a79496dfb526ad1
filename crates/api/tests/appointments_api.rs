//! HTTP-level integration tests for the `/agendamentos` resource.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_regular_user, delete_auth, get, get_auth, post_json_auth,
    put_json_auth,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create(app: axum::Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/agendamentos", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn full_body() -> serde_json::Value {
    serde_json::json!({
        "nomeCliente": "Maria Silva",
        "loja": "Loja Centro",
        "data": "2026-01-22",
        "hora": "14:00",
        "telefone": "41 99999-0000",
        "email": "maria@example.com",
        "tipoImovel": "Apartamento",
        "ambientes": ["Sala", "Cozinha"],
        "endereco": "Rua XV de Novembro",
        "cep": "80020-310",
        "numero": "100",
        "complemento": "Apto 12",
        "bairro": "Centro",
        "cidade": "Curitiba",
        "estado": "PR",
        "servico": "Medição Predial",
        "observacoes": "Ligar antes",
        "status": "confirmado"
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Minimal body: defaults are applied.
#[tokio::test]
async fn test_create_minimal_applies_defaults() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    let json = create(
        app,
        &token,
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;

    assert!(json["id"].is_string());
    assert_eq!(json["status"], "pendente");
    assert_eq!(json["servico"], "Medição Padrão");
    assert_eq!(json["ambientes"], serde_json::json!([]));
    assert!(json["data"].is_null());
    assert!(json["hora"].is_null());
    assert_eq!(json["isActive"], true);
    assert_eq!(json["createdAt"], json["updatedAt"]);
}

/// Every supplied field comes back unchanged, from create and from a lookup.
#[tokio::test]
async fn test_create_round_trip() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;
    let input = full_body();

    let created = create(app.clone(), &token, input.clone()).await;
    for (key, value) in input.as_object().unwrap() {
        assert_eq!(&created[key], value, "field {key} should round-trip");
    }

    let id = created["id"].as_str().unwrap();
    let response = get_auth(app.clone(), &format!("/api/agendamentos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = get_auth(app, "/api/agendamentos", &token).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], created);
}

/// The creator id is recorded for audit.
#[tokio::test]
async fn test_create_records_creator() {
    let app = common::build_test_app().await;
    let admin = admin_token(app.clone()).await;
    let (user_id, token) = create_regular_user(app.clone(), &admin, "op@agenda.com").await;

    let json = create(
        app,
        &token,
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;
    assert_eq!(json["createdBy"], user_id.as_str());
}

#[tokio::test]
async fn test_create_missing_required_fields() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/agendamentos",
        serde_json::json!({ "telefone": "123" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let msg = json["error"].as_str().unwrap();
    assert!(msg.contains("nomeCliente") && msg.contains("loja"));
}

#[tokio::test]
async fn test_create_invalid_status_or_date() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    for extra in [
        serde_json::json!({ "status": "invalido" }),
        serde_json::json!({ "data": "22/01/2026" }),
        serde_json::json!({ "hora": "2pm" }),
    ] {
        let mut body = serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" });
        body.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());

        let response = post_json_auth(app.clone(), "/api/agendamentos", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_requires_token() {
    let app = common::build_test_app().await;

    let response = get(app.clone(), "/api/agendamentos").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::post_json(
        app,
        "/api/agendamentos",
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_invalid_status_is_400() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;
    let created = create(
        app.clone(),
        &token,
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;
    let uri = format!("/api/agendamentos/{}", created["id"].as_str().unwrap());

    let response = put_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "status": "invalido" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let unchanged = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(unchanged["status"], "pendente");
}

#[tokio::test]
async fn test_partial_update_merges() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;
    let created = create(app.clone(), &token, full_body()).await;
    let uri = format!("/api/agendamentos/{}", created["id"].as_str().unwrap());

    let response = put_json_auth(
        app,
        &uri,
        serde_json::json!({ "status": "concluido", "hora": null, "ambientes": ["Quarto"] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "concluido");
    assert!(json["hora"].is_null());
    assert_eq!(json["ambientes"], serde_json::json!(["Quarto"]));
    assert_eq!(json["data"], "2026-01-22");
    assert_eq!(json["nomeCliente"], "Maria Silva");
    assert_eq!(json["createdAt"], created["createdAt"]);
}

/// `PUT {}` twice leaves every field but `updatedAt` untouched.
#[tokio::test]
async fn test_empty_update_is_idempotent() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;
    let created = create(app.clone(), &token, full_body()).await;
    let uri = format!("/api/agendamentos/{}", created["id"].as_str().unwrap());

    for _ in 0..2 {
        let response = put_json_auth(app.clone(), &uri, serde_json::json!({}), &token).await;
        assert_eq!(response.status(), StatusCode::OK);

        let mut json = body_json(response).await;
        let mut expected = created.clone();
        json.as_object_mut().unwrap().remove("updatedAt");
        expected.as_object_mut().unwrap().remove("updatedAt");
        assert_eq!(json, expected);
    }
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/agendamentos/does-not-exist",
        serde_json::json!({ "status": "confirmado" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_status_filter() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;
    create(
        app.clone(),
        &token,
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;
    create(
        app.clone(),
        &token,
        serde_json::json!({ "nomeCliente": "Bia", "loja": "Matriz", "status": "agendar" }),
    )
    .await;

    let response = get_auth(app.clone(), "/api/agendamentos?status=agendar", &token).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["nomeCliente"], "Bia");

    let response = get_auth(app, "/api/agendamentos?status=bogus", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A repeated `status` key does not deserialize into the single filter value;
/// the rejection still uses the JSON error shape.
#[tokio::test]
async fn test_repeated_status_param_is_json_400() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    let response = get_auth(
        app,
        "/api/agendamentos?status=pendente&status=confirmado",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_undecodable_path_id_is_json_400() {
    let app = common::build_test_app().await;
    let token = admin_token(app.clone()).await;

    let response = get_auth(app, "/api/agendamentos/%FF", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

/// Delete is soft: the record disappears from reads, and a second delete is 404.
#[tokio::test]
async fn test_delete_soft() {
    let app = common::build_test_app().await;
    let admin = admin_token(app.clone()).await;
    let (_, token) = create_regular_user(app.clone(), &admin, "op@agenda.com").await;
    let created = create(
        app.clone(),
        &token,
        serde_json::json!({ "nomeCliente": "Ana", "loja": "Matriz" }),
    )
    .await;
    let uri = format!("/api/agendamentos/{}", created["id"].as_str().unwrap());

    // Any authenticated user may delete.
    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["message"].is_string());

    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(get_auth(app.clone(), "/api/agendamentos", &token).await).await;
    assert!(list.as_array().unwrap().is_empty());

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
