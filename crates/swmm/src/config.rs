//! Conversion settings.

use notos_schema::Parameter;
use serde::{Deserialize, Serialize};

fn default_parameter() -> String {
    Parameter::Precipitation.name().to_string()
}

fn default_decimal_places() -> usize {
    2
}

/// Settings for rendering series into SWMM timeseries lines.
///
/// The parameter is carried as a column name rather than a [`Parameter`]
/// so that an unknown name surfaces as a conversion error against the
/// actual columns instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Name of the column to extract.
    #[serde(default = "default_parameter")]
    pub parameter: String,
    /// Digits after the decimal point in rendered values.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            parameter: default_parameter(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl ConvertConfig {
    /// Returns a config overriding only the fields that are `Some`.
    pub fn with_overrides(
        &self,
        parameter: Option<String>,
        decimal_places: Option<usize>,
    ) -> Self {
        Self {
            parameter: parameter.unwrap_or_else(|| self.parameter.clone()),
            decimal_places: decimal_places.unwrap_or(self.decimal_places),
        }
    }
}
