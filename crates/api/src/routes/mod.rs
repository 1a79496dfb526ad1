pub mod appointments;
pub mod auth;
pub mod clients;
pub mod finance;
pub mod health;
pub mod measurements;
pub mod notifications;
pub mod projects;
pub mod stores;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                  login (public)
/// /auth/me                     current user (requires auth)
///
/// /users                       list, create (admin only)
/// /users/{id}                  update, deactivate (admin only)
///
/// /agendamentos                list (?status=), create
/// /agendamentos/{id}           get, update, deactivate
///
/// /lojas                       list, create (create is admin only)
/// /clientes                    list, create
///
/// /medicoes                    list, create
/// /projetos                    list, create
/// /financeiro                  list, create
///
/// /notificacoes                list own, create
/// /notificacoes/{id}/lida      mark own notification read
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/agendamentos", appointments::router())
        .nest("/lojas", stores::router())
        .nest("/clientes", clients::router())
        .nest("/medicoes", measurements::router())
        .nest("/projetos", projects::router())
        .nest("/financeiro", finance::router())
        .nest("/notificacoes", notifications::router())
}
