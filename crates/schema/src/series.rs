//! Columnar series container passed between pipeline stages.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::parameter::canonical_columns;
use crate::record::WeatherRecord;

/// A columnar timeseries for one named location.
///
/// Append-only during construction, read-only once handed to the next
/// stage. The `columns` list is carried on the wire so downstream
/// consumers can locate parameters positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnarSeries {
    /// Normalized plane x coordinate (0..=1 by convention).
    pub x: f64,
    /// Normalized plane y coordinate (0..=1 by convention).
    pub y: f64,
    /// Ordered column names: `timestamp` plus the six parameters.
    pub columns: Vec<String>,
    /// One record per timestep, in timestep order.
    pub timeseries: Vec<WeatherRecord>,
}

impl ColumnarSeries {
    /// Creates an empty series at the given coordinates with the canonical
    /// column order.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            columns: canonical_columns(),
            timeseries: Vec::new(),
        }
    }

    /// Creates an empty series with row capacity for `num_timesteps`.
    pub fn with_capacity(x: f64, y: f64, num_timesteps: usize) -> Self {
        Self {
            x,
            y,
            columns: canonical_columns(),
            timeseries: Vec::with_capacity(num_timesteps),
        }
    }

    /// Appends one record in timestep order.
    pub fn push(&mut self, record: WeatherRecord) {
        self.timeseries.push(record);
    }

    /// Returns the number of timesteps.
    pub fn len(&self) -> usize {
        self.timeseries.len()
    }

    /// Returns true if the series holds no timesteps.
    pub fn is_empty(&self) -> bool {
        self.timeseries.is_empty()
    }

    /// Checks that the column list matches the canonical schema.
    ///
    /// Positional parameter access is only sound against the canonical
    /// order, so stages that index into rows call this first.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ColumnMismatch`] on any deviation in name,
    /// order, or length.
    pub fn validate_schema(&self) -> Result<(), SchemaError> {
        if self.columns != canonical_columns() {
            return Err(SchemaError::ColumnMismatch {
                found: self.columns.clone(),
            });
        }
        Ok(())
    }
}
