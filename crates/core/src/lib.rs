//! Domain vocabulary for the scheduling service.
//!
//! Nothing in this crate performs I/O. The storage crate and the HTTP crate
//! both build on these types and validation rules.

pub mod appointment;
pub mod error;
pub mod fields;
pub mod patch;
pub mod records;
pub mod roles;
pub mod types;
pub mod user;
