//! Converter session: SWMM rendering behind the lifecycle.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use notos_schema::ColumnarSeries;
use notos_swmm::{ConvertConfig, EnginePayload, convert};

use crate::error::SessionError;
use crate::payload::decode;
use crate::reply::{envelope, failure, lifecycle};

#[derive(Debug, Deserialize)]
struct ConvertRequest {
    timeseries: Value,
    #[serde(default)]
    parameter: Option<String>,
    #[serde(default)]
    decimal_places: Option<usize>,
    start_time: String,
    end_time: String,
}

#[derive(Serialize)]
struct ConvertReply {
    modifications: EnginePayload,
}

/// One converter lifecycle holding the session-default conversion
/// settings; per-request fields override them call by call.
#[derive(Debug, Default)]
pub struct ConverterSession {
    config: ConvertConfig,
}

impl ConverterSession {
    /// Creates a session from a `create` payload; omitted fields fall
    /// back to precipitation at two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if the payload does not decode.
    pub fn create(config: &Value) -> Result<Self, SessionError> {
        Ok(Self {
            config: decode(config)?,
        })
    }

    /// Creates a session from already-typed configuration.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// The `{status: "initialized", ...}` reply for this session.
    pub fn created_reply(&self) -> Value {
        json!({
            "status": "initialized",
            "message": "engine format converter initialized",
            "parameter": self.config.parameter,
            "decimal_places": self.config.decimal_places,
        })
    }

    /// Handles one conversion request, returning the uniform reply
    /// envelope with the engine `modifications` payload on success.
    pub fn receive(&self, request: &Value) -> Value {
        match self.handle(request) {
            Ok(reply) => reply,
            Err(err) => failure(&err),
        }
    }

    fn handle(&self, request: &Value) -> Result<Value, SessionError> {
        let request: ConvertRequest = decode(request)?;
        let series: BTreeMap<String, ColumnarSeries> = decode(&request.timeseries)?;
        let config = self
            .config
            .with_overrides(request.parameter, request.decimal_places);
        let modifications = convert(
            &series,
            &config,
            &request.start_time,
            &request.end_time,
            Utc::now(),
        )?;
        envelope("success", &ConvertReply { modifications })
    }

    /// Tears the session down, returning the `destroyed` reply.
    pub fn destroy(self) -> Value {
        lifecycle("destroyed", "engine format converter destroyed")
    }
}
