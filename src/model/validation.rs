use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use thiserror::Error;

/// Validation errors for depot form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unit and arrival time must both be set")]
    MissingSelection,
    #[error("invalid arrival time: {0}")]
    InvalidArrivalTime(String),
}

/// Longest value a datetime-local input produces (`YYYY-MM-DDTHH:MM:SS`).
pub const MAX_ARRIVAL_LEN: usize = 19;

static ARRIVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2})?$").expect("valid hardcoded regex")
});

/// Returns `true` for characters a datetime-local input can contain.
pub fn is_arrival_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '-' | 'T' | ':')
}

/// Parses a datetime-local string (`2024-05-01T08:30` or `2024-05-01T08:30:15`)
/// as a wall-clock time in `tz` and converts it to UTC.
///
/// Ambiguous local times resolve to the earlier instant. Times skipped by a
/// DST transition are rejected.
pub fn parse_arrival_time<Tz: TimeZone>(
    value: &str,
    tz: &Tz,
) -> Result<DateTime<Utc>, ValidationError> {
    let invalid = || ValidationError::InvalidArrivalTime(value.to_string());
    if !ARRIVAL_RE.is_match(value) {
        return Err(invalid());
    }

    let format = if value.len() == MAX_ARRIVAL_LEN {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M"
    };
    let naive = NaiveDateTime::parse_from_str(value, format).map_err(|_| invalid())?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}
