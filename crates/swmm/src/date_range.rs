//! Simulation date range handling.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::error::SwmmError;
use crate::line::swmm_date_time;

/// A simulation window expressed as SWMM option strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Simulation start date, `MM/DD/YYYY`.
    pub start_date: String,
    /// Simulation start time, `HH:MM:SS`.
    pub start_time: String,
    /// Simulation end date, `MM/DD/YYYY`.
    pub end_date: String,
    /// Simulation end time, `HH:MM:SS`.
    pub end_time: String,
}

impl DateRange {
    /// Re-anchors the window `[start, end]` to begin at `now`, keeping
    /// the original duration. A window that ends before it starts keeps
    /// its (negative) duration; callers validate ordering upstream.
    ///
    /// # Errors
    ///
    /// Returns [`SwmmError::Window`] naming the bound that failed to
    /// parse.
    pub fn reanchor(
        start: &str,
        end: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, SwmmError> {
        let start = notos_schema::parse_timestamp(start).map_err(|source| SwmmError::Window {
            bound: "start_time",
            source,
        })?;
        let end = notos_schema::parse_timestamp(end).map_err(|source| SwmmError::Window {
            bound: "end_time",
            source,
        })?;
        let duration = end - start;
        let (start_date, start_time) = swmm_date_time(now);
        let (end_date, end_time) = swmm_date_time(now + duration);
        Ok(Self {
            start_date,
            start_time,
            end_date,
            end_time,
        })
    }

    /// Flattens the window into SWMM `[OPTIONS]` entries.
    pub fn into_options(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("start_date".to_string(), self.start_date),
            ("start_time".to_string(), self.start_time),
            ("end_date".to_string(), self.end_date),
            ("end_time".to_string(), self.end_time),
        ])
    }
}
