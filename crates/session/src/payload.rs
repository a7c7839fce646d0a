//! The parsing boundary for loosely-typed request payloads.
//!
//! Hosts deliver request bodies either as structured JSON or as a
//! JSON-encoded string, and nested fields (`areas`, `weather_ranges`,
//! `timeseries`, `query`) may independently arrive in either form.
//! Everything is normalized to strongly-typed structs here, before any
//! pipeline logic runs.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SessionError;

/// Decodes a payload that may be structured JSON or a JSON-encoded string.
///
/// # Errors
///
/// Returns [`SessionError::Malformed`] if the payload does not decode
/// into `T`.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, SessionError> {
    let decoded = match value {
        Value::String(text) => serde_json::from_str(text),
        other => serde_json::from_value(other.clone()),
    };
    decoded.map_err(|err| SessionError::Malformed {
        reason: err.to_string(),
    })
}
