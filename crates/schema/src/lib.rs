//! # notos-schema
//!
//! Shared schema for the notos pipeline: the six weather parameters, the
//! columnar series shape passed between stages, and timestamp helpers.
//!
//! Every stage of the pipeline exchanges [`ColumnarSeries`] values: a pair
//! of plane coordinates, an ordered column list (`timestamp` plus the six
//! parameters), and one [`WeatherRecord`] row per timestep. All series in
//! one pipeline run share the same column order and the same timestamp
//! sequence, which lets the interpolator treat positional timestep indices
//! across areas as simultaneous.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parameter` | Weather parameter enum and canonical column order |
//! | `record` | One timeseries row (named fields, 7-tuple wire form) |
//! | `series` | Columnar series container and schema validation |
//! | `meta` | Shared series metadata echoed between stages |
//! | `time` | RFC 3339 timestamp parse/format |
//! | `error` | Error types |

mod error;
mod meta;
mod parameter;
mod record;
mod series;
mod time;

pub use error::SchemaError;
pub use meta::SeriesMeta;
pub use parameter::{Parameter, TIMESTAMP_COLUMN, canonical_columns};
pub use record::WeatherRecord;
pub use series::ColumnarSeries;
pub use time::{format_timestamp, parse_timestamp};
