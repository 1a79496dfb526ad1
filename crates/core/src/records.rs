//! Field rules for the operational records: measurements (medicoes),
//! projects (projetos), finance entries (financeiro) and notifications
//! (notificacoes).
//!
//! Status values are free text set by the server on create; no update
//! operation exists for them yet, so they are not a closed enum.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::Deserialize;

use crate::appointment::DATE_FORMAT;
use crate::error::CoreError;
use crate::types::Timestamp;

/// Category label used when a kind/category field is left blank.
pub const DEFAULT_KIND: &str = "outros";

pub const MEASUREMENT_INITIAL_STATUS: &str = "em_andamento";
pub const PROJECT_INITIAL_STATUS: &str = "orcamento";
pub const FINANCE_INITIAL_STATUS: &str = "pendente";

pub const DEFAULT_NOTIFICATION_KIND: &str = "info";
pub const DEFAULT_NOTIFICATION_SOURCE: &str = "sistema";

/// Trimmed `raw`, or `default` when blank or absent.
pub fn label_or(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => default.to_string(),
    }
}

/// Parse an instant given either as an RFC 3339 timestamp or as a bare
/// `YYYY-MM-DD` date (midnight UTC). Blank input means "not given".
pub fn parse_instant(raw: &str) -> Result<Option<Timestamp>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc).trunc_subsecs(6)));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid date '{raw}'. Expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
}

/// A monetary amount as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Resolve to a finite value. `field` names the wire field in errors.
    pub fn resolve(&self, field: &str) -> Result<f64, CoreError> {
        let value = match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite()).ok_or_else(|| {
            CoreError::Validation(format!("{field} must be a number"))
        })
    }
}
