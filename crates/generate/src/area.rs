//! Observation area descriptors.

use notos_ranges::WeatherRanges;
use notos_schema::Parameter;

use crate::error::GenerateError;

/// Default starting values in canonical parameter order: precipitation,
/// temperature, atmospheric pressure, humidity, wind speed, wind direction.
const DEFAULT_START: [f64; 6] = [0.0, 20.0, 1013.25, 50.0, 0.0, 0.0];

/// A named, spatially located source of synthesized weather data.
///
/// Immutable during generation; the mutable walk state is derived from the
/// starting values internally.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    name: String,
    x: f64,
    y: f64,
    start_values: [f64; 6],
    ranges: WeatherRanges,
}

impl Area {
    /// Creates an area at `(x, y)` with default starting values and the
    /// session default ranges.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            start_values: DEFAULT_START,
            ranges: WeatherRanges::default(),
        }
    }

    /// Sets the starting value for one parameter.
    pub fn with_start(mut self, parameter: Parameter, value: f64) -> Self {
        self.start_values[parameter.index()] = value;
        self
    }

    /// Sets all six starting values in canonical parameter order.
    pub fn with_start_values(mut self, values: [f64; 6]) -> Self {
        self.start_values = values;
        self
    }

    /// Sets the effective walk ranges for this area.
    pub fn with_ranges(mut self, ranges: WeatherRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Returns the area name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the starting values in canonical parameter order.
    pub fn start_values(&self) -> [f64; 6] {
        self.start_values
    }

    /// Returns the effective walk ranges.
    pub fn ranges(&self) -> &WeatherRanges {
        &self.ranges
    }

    /// Validates coordinates, starting values, and ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NonFiniteField`] for NaN/infinite inputs
    /// and [`GenerateError::InvalidRanges`] for bad ranges.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for (value, field) in [(self.x, "x"), (self.y, "y")] {
            if !value.is_finite() {
                return Err(GenerateError::NonFiniteField {
                    area: self.name.clone(),
                    field,
                });
            }
        }
        if self.start_values.iter().any(|v| !v.is_finite()) {
            return Err(GenerateError::NonFiniteField {
                area: self.name.clone(),
                field: "start_values",
            });
        }
        self.ranges
            .validate()
            .map_err(|source| GenerateError::InvalidRanges {
                area: self.name.clone(),
                source,
            })
    }
}
