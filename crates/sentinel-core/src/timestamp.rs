//! `timestamp_utc` formatting.
//!
//! Timestamps are ISO-8601 without an offset, at microsecond precision,
//! followed by a literal `Z`. The fractional part is dropped entirely when the
//! microsecond component is zero, so both `2024-01-01T00:00:00Z` and
//! `2024-01-01T00:00:00.123456Z` are valid outputs.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::errors::CoreError;

const WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const WITH_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format a UTC instant for the `timestamp_utc` field.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let micros = at.nanosecond() / 1_000;
    let pattern = if micros == 0 { WHOLE_SECONDS } else { WITH_MICROS };
    // `%.6f` truncates the sub-microsecond digits.
    format!("{}Z", at.format(pattern))
}

/// Parse a `timestamp_utc` value back into a UTC instant.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the `Z` suffix is missing or the rest is
/// not `%Y-%m-%dT%H:%M:%S` with an optional fraction.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, CoreError> {
    let naive = value
        .strip_suffix('Z')
        .ok_or_else(|| CoreError::Validation(format!("timestamp '{value}' must end in 'Z'")))?;

    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|parsed| parsed.and_utc())
        .map_err(|error| CoreError::Validation(format!("invalid timestamp '{value}': {error}")))
}
