//! # notos-swmm
//!
//! Renders columnar weather series into the SWMM timeseries line
//! format, one value column per call, together with the simulation
//! window re-anchored to the present.
//!
//! Each rendered line is `MM/DD/YYYY  HH:MM:SS     <value>` with the
//! value printed to a configured number of decimal places. The column
//! to extract is chosen by name and resolved positionally against each
//! series' declared columns.

mod config;
mod date_range;
mod error;
mod line;
mod payload;

pub use config::ConvertConfig;
pub use date_range::DateRange;
pub use error::SwmmError;
pub use line::{format_line, split_timestamp, swmm_date_time};
pub use payload::EnginePayload;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use notos_schema::{ColumnarSeries, Parameter, TIMESTAMP_COLUMN};

/// Renders one series into SWMM timeseries lines.
///
/// The parameter is located by name in the series' declared columns, so
/// the extraction follows the column order the producer advertised. The
/// timestamp column itself cannot be extracted.
///
/// # Errors
///
/// Returns [`SwmmError::ParameterNotFound`] if the name is absent from
/// the columns or names the timestamp column, and [`SwmmError::Series`]
/// if a record carries an unparseable timestamp.
pub fn convert_series(
    name: &str,
    series: &ColumnarSeries,
    config: &ConvertConfig,
) -> Result<Vec<String>, SwmmError> {
    series.validate_schema().map_err(|source| SwmmError::Series {
        name: name.to_string(),
        source,
    })?;

    let index = series
        .columns
        .iter()
        .position(|column| column == &config.parameter)
        .filter(|&index| index > 0)
        .ok_or_else(|| SwmmError::ParameterNotFound {
            parameter: config.parameter.clone(),
            columns: series.columns.clone(),
        })?;
    debug_assert_eq!(series.columns[0], TIMESTAMP_COLUMN);
    let parameter = Parameter::ALL[index - 1];

    let mut lines = Vec::with_capacity(series.len());
    for record in &series.timeseries {
        let (date, time) =
            split_timestamp(&record.timestamp).map_err(|source| SwmmError::Series {
                name: name.to_string(),
                source,
            })?;
        lines.push(format_line(&date, &time, record.value(parameter), config.decimal_places));
    }
    Ok(lines)
}

/// Renders every series and assembles the engine payload.
///
/// The simulation window `[start_time, end_time]` is re-anchored to
/// `now` with its duration preserved, so the engine always simulates
/// from the present regardless of the timestamps the series carry.
///
/// # Errors
///
/// Returns [`SwmmError`] if any series fails to convert, and
/// [`SwmmError::Window`] if either bound of the window does not parse.
#[tracing::instrument(skip(series_map, config), fields(n_series = series_map.len()))]
pub fn convert(
    series_map: &BTreeMap<String, ColumnarSeries>,
    config: &ConvertConfig,
    start_time: &str,
    end_time: &str,
    now: DateTime<Utc>,
) -> Result<EnginePayload, SwmmError> {
    let mut timeseries = BTreeMap::new();
    for (name, series) in series_map {
        timeseries.insert(name.clone(), convert_series(name, series, config)?);
    }

    let range = DateRange::reanchor(start_time, end_time, now)?;
    debug!(parameter = %config.parameter, "rendered engine payload");

    Ok(EnginePayload {
        timeseries,
        options: range.into_options(),
    })
}
