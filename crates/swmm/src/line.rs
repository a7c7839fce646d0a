//! SWMM timeseries line formatting.

use chrono::{DateTime, Utc};
use notos_schema::{SchemaError, parse_timestamp};

/// Formats a UTC instant as SWMM date and time strings:
/// `(MM/DD/YYYY, HH:MM:SS)`.
pub fn swmm_date_time(instant: DateTime<Utc>) -> (String, String) {
    (
        instant.format("%m/%d/%Y").to_string(),
        instant.format("%H:%M:%S").to_string(),
    )
}

/// Splits an RFC 3339 timestamp into SWMM date and time strings.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidTimestamp`] if the string does not parse.
pub fn split_timestamp(iso: &str) -> Result<(String, String), SchemaError> {
    Ok(swmm_date_time(parse_timestamp(iso)?))
}

/// Formats one SWMM timeseries data line.
///
/// The layout is a hard requirement of the engine's line grammar and is
/// reproduced byte-for-byte: date, two spaces, time, five spaces, value
/// with exactly `decimal_places` digits after the decimal point.
pub fn format_line(date: &str, time: &str, value: f64, decimal_places: usize) -> String {
    format!("{date}  {time}     {value:.decimal_places$}")
}
