//! Scheduling admin API server library.
//!
//! Exposes configuration, state, error handling, services and routes so the
//! integration tests and the binary entrypoint share them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
