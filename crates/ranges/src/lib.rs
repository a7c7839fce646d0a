//! # notos-ranges
//!
//! Random-walk range configuration for the weather generator: per-parameter
//! `(min, max, step)` triples, session-wide defaults, and partial per-area
//! overrides.
//!
//! A [`WeatherRanges`] holds one validated [`ParamRange`] per parameter. A
//! [`RangesPatch`] is the wire form: eighteen optional flat fields
//! (`precipitation_min`, `precipitation_max`, `precipitation_step`, ...)
//! merged field-by-field over a base, so a per-area override only replaces
//! the fields it names.

mod error;
mod patch;
mod range;

pub use error::RangeError;
pub use patch::RangesPatch;
pub use range::{ParamRange, WeatherRanges};
