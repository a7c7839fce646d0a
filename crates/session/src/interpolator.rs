//! Interpolator session: IDW onto query points behind the lifecycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use notos_interpolate::{QueryPoint, interpolate};
use notos_schema::{ColumnarSeries, SeriesMeta};

use crate::error::SessionError;
use crate::payload::decode;
use crate::reply::{envelope, failure, lifecycle};

fn empty_map() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Deserialize)]
struct InterpolateRequest {
    timeseries: Value,
    #[serde(default = "empty_map")]
    query: Value,
}

/// The observation half of a request: per-area series plus the shared
/// metadata. Accepts a whole generator success reply, extra fields are
/// ignored.
#[derive(Debug, Deserialize)]
struct ObservationSet {
    area_timeseries: BTreeMap<String, ColumnarSeries>,
    #[serde(flatten)]
    meta: SeriesMeta,
}

#[derive(Serialize)]
struct InterpolateReply<'a> {
    timeseries: &'a BTreeMap<String, ColumnarSeries>,
    #[serde(flatten)]
    meta: &'a SeriesMeta,
}

/// One interpolator lifecycle. The stage is a pure function, so the
/// session carries no configuration; it exists for lifecycle uniformity.
#[derive(Debug, Default)]
pub struct InterpolatorSession;

impl InterpolatorSession {
    /// Creates a session. The `create` payload carries no settings for
    /// this stage and is accepted unexamined.
    pub fn create(_config: &Value) -> Self {
        Self
    }

    /// The `{status: "initialized", ...}` reply for this session.
    pub fn created_reply(&self) -> Value {
        lifecycle("initialized", "weather interpolation initialized")
    }

    /// Handles one interpolation request, returning the uniform reply
    /// envelope.
    pub fn receive(&self, request: &Value) -> Value {
        match self.handle(request) {
            Ok(reply) => reply,
            Err(err) => failure(&err),
        }
    }

    fn handle(&self, request: &Value) -> Result<Value, SessionError> {
        let request: InterpolateRequest = decode(request)?;
        let observations: ObservationSet = decode(&request.timeseries)?;
        let queries: BTreeMap<String, QueryPoint> = decode(&request.query)?;
        let results = interpolate(&observations.area_timeseries, &observations.meta, &queries)?;
        envelope(
            "success",
            &InterpolateReply {
                timeseries: &results,
                meta: &observations.meta,
            },
        )
    }

    /// Tears the session down, returning the `destroyed` reply.
    pub fn destroy(self) -> Value {
        lifecycle("destroyed", "weather interpolation destroyed")
    }
}
