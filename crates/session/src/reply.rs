//! Uniform status-envelope replies.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::SessionError;

/// Serializes `fields` and stamps the given status onto the object.
pub(crate) fn envelope<T: Serialize>(status: &str, fields: &T) -> Result<Value, SessionError> {
    let value = serde_json::to_value(fields).map_err(|err| SessionError::Encode {
        reason: err.to_string(),
    })?;
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("payload".to_string(), other);
            map
        }
    };
    map.insert("status".to_string(), Value::String(status.to_string()));
    Ok(Value::Object(map))
}

/// The `{status: "error", message}` failure reply.
pub fn failure(err: &SessionError) -> Value {
    json!({
        "status": "error",
        "message": err.to_string(),
    })
}

/// A bare lifecycle reply carrying only a status and a message.
pub(crate) fn lifecycle(status: &str, message: &str) -> Value {
    json!({
        "status": status,
        "message": message,
    })
}
