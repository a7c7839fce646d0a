//! Validated per-parameter ranges and session-wide defaults.

use notos_schema::Parameter;

use crate::error::RangeError;

/// Bounds and step size for one parameter's bounded random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lower clamp bound.
    pub min: f64,
    /// Upper clamp bound.
    pub max: f64,
    /// Maximum magnitude of one walk increment.
    pub step: f64,
}

impl ParamRange {
    /// Creates a new range. Call [`ParamRange::validate`] before use.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Validates this range for the given parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if any field is non-finite, `min > max`, or
    /// `step < 0`.
    pub fn validate(&self, parameter: Parameter) -> Result<(), RangeError> {
        for (value, field) in [(self.min, "min"), (self.max, "max"), (self.step, "step")] {
            if !value.is_finite() {
                return Err(RangeError::NonFinite { parameter, field });
            }
        }
        if self.min > self.max {
            return Err(RangeError::InvertedBounds {
                parameter,
                min: self.min,
                max: self.max,
            });
        }
        if self.step < 0.0 {
            return Err(RangeError::NegativeStep {
                parameter,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// One [`ParamRange`] per weather parameter.
///
/// The defaults match the shipped session defaults of the pipeline:
/// precipitation `[0, 50]` step 2, temperature `[-10, 40]` step 0.5,
/// atmospheric pressure `[980, 1040]` step 1, humidity `[0, 100]` step 2,
/// wind speed `[0, 30]` step 1, wind direction `[0, 360]` step 10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRanges {
    /// Precipitation range (mm/hour).
    pub precipitation: ParamRange,
    /// Temperature range (degrees Celsius).
    pub temperature: ParamRange,
    /// Atmospheric pressure range (hPa).
    pub atmospheric_pressure: ParamRange,
    /// Humidity range (percent).
    pub humidity: ParamRange,
    /// Wind speed range (m/s).
    pub wind_speed: ParamRange,
    /// Wind direction range (degrees).
    pub wind_direction: ParamRange,
}

impl WeatherRanges {
    /// Returns the range for one parameter.
    pub fn get(&self, parameter: Parameter) -> ParamRange {
        match parameter {
            Parameter::Precipitation => self.precipitation,
            Parameter::Temperature => self.temperature,
            Parameter::AtmosphericPressure => self.atmospheric_pressure,
            Parameter::Humidity => self.humidity,
            Parameter::WindSpeed => self.wind_speed,
            Parameter::WindDirection => self.wind_direction,
        }
    }

    /// Validates every parameter's range.
    ///
    /// # Errors
    ///
    /// Returns the first [`RangeError`] encountered, in canonical
    /// parameter order.
    pub fn validate(&self) -> Result<(), RangeError> {
        for parameter in Parameter::ALL {
            self.get(parameter).validate(parameter)?;
        }
        Ok(())
    }
}

impl Default for WeatherRanges {
    fn default() -> Self {
        Self {
            precipitation: ParamRange::new(0.0, 50.0, 2.0),
            temperature: ParamRange::new(-10.0, 40.0, 0.5),
            atmospheric_pressure: ParamRange::new(980.0, 1040.0, 1.0),
            humidity: ParamRange::new(0.0, 100.0, 2.0),
            wind_speed: ParamRange::new(0.0, 30.0, 1.0),
            wind_direction: ParamRange::new(0.0, 360.0, 10.0),
        }
    }
}
