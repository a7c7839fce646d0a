//! RFC 3339 timestamp parsing and formatting.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::SchemaError;

/// Parses an RFC 3339 timestamp, accepting both `Z` and numeric offsets.
///
/// The result is normalised to UTC.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidTimestamp`] if the string does not parse.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SchemaError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| SchemaError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Formats a UTC instant as RFC 3339 with second precision and a `Z`
/// suffix, e.g. `2025-01-15T14:30:00Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
