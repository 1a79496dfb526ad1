pub mod address;
pub mod appointment;
pub mod client;
pub mod finance;
pub mod measurement;
pub mod notification;
pub mod project;
pub mod store;
pub mod user;
