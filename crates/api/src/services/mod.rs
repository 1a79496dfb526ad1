//! Record services.
//!
//! Plain async functions over a borrowed [`agenda_db::Storage`]. Handlers
//! stay thin: they extract, call one service function, and serialize.

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod finance;
pub mod measurements;
pub mod notifications;
pub mod projects;
pub mod stores;
pub mod users;
