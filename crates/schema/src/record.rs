//! One timeseries row: a timestamp plus the six weather parameters.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parameter::Parameter;

/// A single row of a columnar series.
///
/// Field order matches the canonical column order. On the wire a record is
/// a 7-element array `[timestamp, precipitation, temperature,
/// atmospheric_pressure, humidity, wind_speed, wind_direction]`, matching
/// the `columns` list of the enclosing series.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// RFC 3339 timestamp of this timestep.
    pub timestamp: String,
    /// Precipitation rate (mm/hour).
    pub precipitation: f64,
    /// Air temperature (degrees Celsius).
    pub temperature: f64,
    /// Atmospheric pressure (hPa).
    pub atmospheric_pressure: f64,
    /// Relative humidity (percent).
    pub humidity: f64,
    /// Wind speed (m/s).
    pub wind_speed: f64,
    /// Wind direction (degrees).
    pub wind_direction: f64,
}

impl WeatherRecord {
    /// Builds a record from a timestamp and parameter values in canonical
    /// order.
    pub fn from_values(timestamp: String, values: [f64; 6]) -> Self {
        Self {
            timestamp,
            precipitation: values[0],
            temperature: values[1],
            atmospheric_pressure: values[2],
            humidity: values[3],
            wind_speed: values[4],
            wind_direction: values[5],
        }
    }

    /// Returns the value of one parameter.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Precipitation => self.precipitation,
            Parameter::Temperature => self.temperature,
            Parameter::AtmosphericPressure => self.atmospheric_pressure,
            Parameter::Humidity => self.humidity,
            Parameter::WindSpeed => self.wind_speed,
            Parameter::WindDirection => self.wind_direction,
        }
    }

    /// Returns all six parameter values in canonical order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.precipitation,
            self.temperature,
            self.atmospheric_pressure,
            self.humidity,
            self.wind_speed,
            self.wind_direction,
        ]
    }
}

impl Serialize for WeatherRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(7)?;
        tuple.serialize_element(&self.timestamp)?;
        tuple.serialize_element(&self.precipitation)?;
        tuple.serialize_element(&self.temperature)?;
        tuple.serialize_element(&self.atmospheric_pressure)?;
        tuple.serialize_element(&self.humidity)?;
        tuple.serialize_element(&self.wind_speed)?;
        tuple.serialize_element(&self.wind_direction)?;
        tuple.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = WeatherRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 7-element [timestamp, parameters...] row")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let timestamp: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mut values = [0.0_f64; 6];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i + 1, &self))?;
        }
        Ok(WeatherRecord::from_values(timestamp, values))
    }
}

impl<'de> Deserialize<'de> for WeatherRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(7, RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherRecord {
        WeatherRecord::from_values(
            "2025-01-15T14:30:00Z".to_string(),
            [5.5, 21.0, 1013.25, 55.0, 3.2, 180.0],
        )
    }

    #[test]
    fn from_values_field_order() {
        let r = sample();
        assert_eq!(r.precipitation, 5.5);
        assert_eq!(r.temperature, 21.0);
        assert_eq!(r.atmospheric_pressure, 1013.25);
        assert_eq!(r.humidity, 55.0);
        assert_eq!(r.wind_speed, 3.2);
        assert_eq!(r.wind_direction, 180.0);
    }

    #[test]
    fn value_matches_fields() {
        let r = sample();
        for (i, p) in Parameter::ALL.iter().enumerate() {
            assert_eq!(r.value(*p), r.values()[i]);
        }
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            "[\"2025-01-15T14:30:00Z\",5.5,21.0,1013.25,55.0,3.2,180.0]"
        );
    }

    #[test]
    fn deserializes_from_array() {
        let r: WeatherRecord =
            serde_json::from_str("[\"2025-01-15T14:30:00Z\",5.5,21.0,1013.25,55.0,3.2,180.0]")
                .unwrap();
        assert_eq!(r, sample());
    }

    #[test]
    fn rejects_short_array() {
        let result: Result<WeatherRecord, _> =
            serde_json::from_str("[\"2025-01-15T14:30:00Z\",5.5]");
        assert!(result.is_err());
    }
}
