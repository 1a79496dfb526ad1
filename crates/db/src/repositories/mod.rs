//! One repository struct per PostgreSQL table.
//!
//! Repositories are stateless and take the pool per call, issuing
//! runtime-checked `sqlx::query_as` statements.

pub mod appointment_repo;
pub mod client_repo;
pub mod finance_repo;
pub mod measurement_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod store_repo;
pub mod user_repo;

pub use appointment_repo::AppointmentRepo;
pub use client_repo::ClientRepo;
pub use finance_repo::FinanceRepo;
pub use measurement_repo::MeasurementRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use store_repo::StoreRepo;
pub use user_repo::UserRepo;
