//! Generator session: bounded random-walk synthesis behind the lifecycle.

use std::collections::BTreeMap;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use notos_generate::{Area, TimeGrid, generate};
use notos_ranges::{RangesPatch, WeatherRanges};
use notos_schema::{ColumnarSeries, SeriesMeta, parse_timestamp};

use crate::error::SessionError;
use crate::payload::decode;
use crate::reply::{envelope, failure, lifecycle};

/// `create` payload for the generator: the walk flag, an optional seed,
/// and the flat default-range fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorCreate {
    pub use_random_walk: bool,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub ranges: RangesPatch,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    start_time: Option<String>,
    time_delta: i64,
    total_time: i64,
    #[serde(default = "empty_list")]
    areas: Value,
}

fn default_temperature() -> f64 {
    20.0
}

fn default_pressure() -> f64 {
    1013.25
}

fn default_humidity() -> f64 {
    50.0
}

/// One area descriptor as it appears on the wire. Omitted starting
/// values fall back to calm defaults; `weather_ranges` may itself be a
/// JSON-encoded string.
#[derive(Debug, Deserialize)]
struct AreaSpec {
    name: String,
    x: f64,
    y: f64,
    #[serde(default)]
    precipitation: f64,
    #[serde(default = "default_temperature")]
    temperature: f64,
    #[serde(default = "default_pressure")]
    atmospheric_pressure: f64,
    #[serde(default = "default_humidity")]
    humidity: f64,
    #[serde(default)]
    wind_speed: f64,
    #[serde(default)]
    wind_direction: f64,
    #[serde(default)]
    weather_ranges: Option<Value>,
}

impl AreaSpec {
    fn into_area(self, defaults: &WeatherRanges) -> Result<Area, SessionError> {
        let ranges = match &self.weather_ranges {
            Some(value) if !value.is_null() => decode::<RangesPatch>(value)?.merge(defaults),
            _ => *defaults,
        };
        Ok(Area::new(self.name, self.x, self.y)
            .with_start_values([
                self.precipitation,
                self.temperature,
                self.atmospheric_pressure,
                self.humidity,
                self.wind_speed,
                self.wind_direction,
            ])
            .with_ranges(ranges))
    }
}

#[derive(Serialize)]
struct GenerateReply<'a> {
    area_timeseries: &'a BTreeMap<String, ColumnarSeries>,
    #[serde(flatten)]
    meta: &'a SeriesMeta,
}

/// One generator lifecycle: session default ranges, the walk flag, and
/// an owned random source.
///
/// Each session owns an independent copy of its configuration and RNG,
/// so concurrent sessions never share state.
#[derive(Debug)]
pub struct GeneratorSession {
    defaults: WeatherRanges,
    use_random_walk: bool,
    rng: StdRng,
}

impl GeneratorSession {
    /// Creates a session from a `create` payload.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if the payload does not decode.
    pub fn create(config: &Value) -> Result<Self, SessionError> {
        let create: GeneratorCreate = decode(config)?;
        Ok(Self::new(
            create.ranges.merge(&WeatherRanges::default()),
            create.use_random_walk,
            create.seed,
        ))
    }

    /// Creates a session from already-typed configuration. With no seed
    /// the random source draws from OS entropy.
    pub fn new(defaults: WeatherRanges, use_random_walk: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(use_random_walk, seeded = seed.is_some(), "generator session created");
        Self {
            defaults,
            use_random_walk,
            rng,
        }
    }

    /// The `{status: "initialized", ...}` reply for this session.
    pub fn created_reply(&self) -> Value {
        json!({
            "status": "initialized",
            "message": "weather generator initialized with default ranges",
            "use_random_walk": self.use_random_walk,
        })
    }

    /// Handles one generation request, returning the uniform reply
    /// envelope. Failures become `{status: "error", message}`; nothing is
    /// partially applied.
    pub fn receive(&mut self, request: &Value) -> Value {
        match self.handle(request) {
            Ok(reply) => reply,
            Err(err) => failure(&err),
        }
    }

    fn handle(&mut self, request: &Value) -> Result<Value, SessionError> {
        let request: GenerateRequest = decode(request)?;
        let start = match &request.start_time {
            Some(text) => parse_timestamp(text)?,
            None => Utc::now(),
        };
        let grid = TimeGrid::new(start, request.time_delta, request.total_time)?;
        let specs: Vec<AreaSpec> = decode(&request.areas)?;
        let areas = specs
            .into_iter()
            .map(|spec| spec.into_area(&self.defaults))
            .collect::<Result<Vec<_>, _>>()?;
        let result = generate(&areas, &grid, self.use_random_walk, &mut self.rng)?;
        let (series, meta) = result.into_parts();
        envelope(
            "success",
            &GenerateReply {
                area_timeseries: &series,
                meta: &meta,
            },
        )
    }

    /// Tears the session down, returning the `destroyed` reply.
    pub fn destroy(self) -> Value {
        lifecycle("destroyed", "weather generator destroyed")
    }
}
