//! Appointment (agendamento) status vocabulary and field rules.
//!
//! The status set is closed. No transition table is enforced: any of the
//! five values may replace any other.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;

/// Service label applied when a new appointment does not name one.
pub const DEFAULT_SERVICE_LABEL: &str = "Medição Padrão";

/// Wire format of the `data` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical wire format of the `hora` field.
pub const TIME_FORMAT: &str = "%H:%M";

/// Serialized by name; inbound values go through [`FromStr`] so unknown
/// names become a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pendente,
    Confirmado,
    Cancelado,
    Concluido,
    Agendar,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Pendente,
        AppointmentStatus::Confirmado,
        AppointmentStatus::Cancelado,
        AppointmentStatus::Concluido,
        AppointmentStatus::Agendar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pendente => "pendente",
            AppointmentStatus::Confirmado => "confirmado",
            AppointmentStatus::Cancelado => "cancelado",
            AppointmentStatus::Concluido => "concluido",
            AppointmentStatus::Agendar => "agendar",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                let allowed: Vec<&str> =
                    AppointmentStatus::ALL.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid status '{wanted}'. Allowed statuses: {}",
                    allowed.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for AppointmentStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse an optional status, falling back to [`AppointmentStatus::Pendente`].
pub fn status_or_default(raw: Option<&str>) -> Result<AppointmentStatus, CoreError> {
    match raw {
        Some(value) => value.parse(),
        None => Ok(AppointmentStatus::default()),
    }
}

/// Parse the `data` field. Blank input means "no date".
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'. Expected YYYY-MM-DD")))
}

/// Parse the `hora` field and normalise it to `HH:MM`. Blank input means
/// "no time". Seconds are accepted and dropped.
pub fn parse_time(raw: &str) -> Result<Option<String>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(|t| Some(t.format(TIME_FORMAT).to_string()))
        .map_err(|_| CoreError::Validation(format!("Invalid time '{raw}'. Expected HH:MM")))
}

/// Normalise the room list: trim entries, drop blanks and repeats while
/// keeping first-seen order.
pub fn normalize_rooms(rooms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(rooms.len());
    for room in rooms {
        let room = room.trim();
        if !room.is_empty() && !out.iter().any(|r| r == room) {
            out.push(room.to_string());
        }
    }
    out
}

/// Resolve the `servico` label, defaulting blank input.
pub fn service_label(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => DEFAULT_SERVICE_LABEL.to_string(),
    }
}
