use chrono::{SubsecRound, Utc};
use uuid::Uuid;

/// Every record is keyed by an opaque string (UUID v4 text for new records).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh record identifier.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Current time truncated to microseconds, the precision PostgreSQL
/// `TIMESTAMPTZ` keeps. Records built in memory then compare equal to the
/// same records read back from storage.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}
