//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `GET /agendamentos?status=` filter. Parsed by the service so an unknown
/// value yields a validation error rather than a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListParams {
    pub status: Option<String>,
}
