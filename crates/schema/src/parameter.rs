//! The six weather parameters and their canonical column order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Name of the leading timestamp column present in every series.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// One of the six weather parameters carried by every series.
///
/// The declaration order is the canonical column order; positional access
/// throughout the pipeline relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Precipitation rate (mm/hour).
    Precipitation,
    /// Air temperature (degrees Celsius).
    Temperature,
    /// Atmospheric pressure (hPa).
    AtmosphericPressure,
    /// Relative humidity (percent, 0..=100).
    Humidity,
    /// Wind speed (m/s).
    WindSpeed,
    /// Wind direction (degrees, 0..=360).
    WindDirection,
}

impl Parameter {
    /// All parameters in canonical column order.
    pub const ALL: [Parameter; 6] = [
        Parameter::Precipitation,
        Parameter::Temperature,
        Parameter::AtmosphericPressure,
        Parameter::Humidity,
        Parameter::WindSpeed,
        Parameter::WindDirection,
    ];

    /// Returns the wire name of this parameter.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::Precipitation => "precipitation",
            Parameter::Temperature => "temperature",
            Parameter::AtmosphericPressure => "atmospheric_pressure",
            Parameter::Humidity => "humidity",
            Parameter::WindSpeed => "wind_speed",
            Parameter::WindDirection => "wind_direction",
        }
    }

    /// Returns this parameter's position within [`Parameter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a wire name into the corresponding parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownParameter`] if the name is not one of
    /// the six parameters.
    pub fn parse(name: &str) -> Result<Self, SchemaError> {
        match name {
            "precipitation" => Ok(Parameter::Precipitation),
            "temperature" => Ok(Parameter::Temperature),
            "atmospheric_pressure" => Ok(Parameter::AtmosphericPressure),
            "humidity" => Ok(Parameter::Humidity),
            "wind_speed" => Ok(Parameter::WindSpeed),
            "wind_direction" => Ok(Parameter::WindDirection),
            other => Err(SchemaError::UnknownParameter {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the canonical column list: `timestamp` followed by the six
/// parameter names in declaration order.
pub fn canonical_columns() -> Vec<String> {
    std::iter::once(TIMESTAMP_COLUMN.to_string())
        .chain(Parameter::ALL.iter().map(|p| p.name().to_string()))
        .collect()
}
