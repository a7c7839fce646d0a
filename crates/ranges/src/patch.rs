//! Partial range overrides in the flat wire form.

use serde::{Deserialize, Serialize};

use crate::range::{ParamRange, WeatherRanges};

/// A partial set of range fields, as they appear on the wire.
///
/// Every field is optional; [`RangesPatch::merge`] lays the patch over a
/// base [`WeatherRanges`] field-by-field, so callers can override a single
/// step size without restating the other seventeen values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangesPatch {
    pub precipitation_min: Option<f64>,
    pub precipitation_max: Option<f64>,
    pub precipitation_step: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub temperature_step: Option<f64>,
    pub atmospheric_pressure_min: Option<f64>,
    pub atmospheric_pressure_max: Option<f64>,
    pub atmospheric_pressure_step: Option<f64>,
    pub humidity_min: Option<f64>,
    pub humidity_max: Option<f64>,
    pub humidity_step: Option<f64>,
    pub wind_speed_min: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub wind_speed_step: Option<f64>,
    pub wind_direction_min: Option<f64>,
    pub wind_direction_max: Option<f64>,
    pub wind_direction_step: Option<f64>,
}

fn merge_one(
    base: ParamRange,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
) -> ParamRange {
    ParamRange {
        min: min.unwrap_or(base.min),
        max: max.unwrap_or(base.max),
        step: step.unwrap_or(base.step),
    }
}

impl RangesPatch {
    /// Lays this patch over `base`, replacing only the fields the patch
    /// names. The result is not validated; call
    /// [`WeatherRanges::validate`] afterwards.
    pub fn merge(&self, base: &WeatherRanges) -> WeatherRanges {
        WeatherRanges {
            precipitation: merge_one(
                base.precipitation,
                self.precipitation_min,
                self.precipitation_max,
                self.precipitation_step,
            ),
            temperature: merge_one(
                base.temperature,
                self.temperature_min,
                self.temperature_max,
                self.temperature_step,
            ),
            atmospheric_pressure: merge_one(
                base.atmospheric_pressure,
                self.atmospheric_pressure_min,
                self.atmospheric_pressure_max,
                self.atmospheric_pressure_step,
            ),
            humidity: merge_one(
                base.humidity,
                self.humidity_min,
                self.humidity_max,
                self.humidity_step,
            ),
            wind_speed: merge_one(
                base.wind_speed,
                self.wind_speed_min,
                self.wind_speed_max,
                self.wind_speed_step,
            ),
            wind_direction: merge_one(
                base.wind_direction,
                self.wind_direction_min,
                self.wind_direction_max,
                self.wind_direction_step,
            ),
        }
    }
}
