pub mod appointments;
pub mod auth;
pub mod clients;
pub mod finance;
pub mod measurements;
pub mod notifications;
pub mod projects;
pub mod stores;
pub mod users;
