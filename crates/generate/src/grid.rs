//! The fixed timestep grid every series in one run shares.

use chrono::{DateTime, Duration, Utc};
use notos_schema::{SeriesMeta, format_timestamp};

use crate::error::GenerateError;

/// An inclusive timestep grid: `start`, `start + delta`, ... while not
/// exceeding `start + total`.
///
/// `total_time_seconds = 0` yields exactly one timestep. The grid count is
/// `floor(total / delta) + 1`, so the final instant never exceeds the end
/// of the covered duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: DateTime<Utc>,
    time_delta_seconds: i64,
    total_time_seconds: i64,
}

impl TimeGrid {
    /// Creates a grid from a start instant, timestep interval, and total
    /// duration (both in seconds).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NonPositiveTimeDelta`] if
    /// `time_delta_seconds <= 0`, [`GenerateError::NegativeTotalTime`] if
    /// `total_time_seconds < 0`, and [`GenerateError::TimeOutOfRange`] if
    /// `start + total_time_seconds` is not a representable instant.
    pub fn new(
        start: DateTime<Utc>,
        time_delta_seconds: i64,
        total_time_seconds: i64,
    ) -> Result<Self, GenerateError> {
        if time_delta_seconds <= 0 {
            return Err(GenerateError::NonPositiveTimeDelta {
                time_delta: time_delta_seconds,
            });
        }
        if total_time_seconds < 0 {
            return Err(GenerateError::NegativeTotalTime {
                total_time: total_time_seconds,
            });
        }
        // Every grid instant lies in [start, start + total], so proving the
        // far end representable makes `end` and `timestamp` panic-free.
        Duration::try_seconds(total_time_seconds)
            .and_then(|span| start.checked_add_signed(span))
            .ok_or(GenerateError::TimeOutOfRange {
                total_time: total_time_seconds,
            })?;
        Ok(Self {
            start,
            time_delta_seconds,
            total_time_seconds,
        })
    }

    /// Returns the first instant of the grid.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns `start + total_time_seconds`. This may lie beyond the last
    /// timestep when the duration is not a multiple of the interval.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::seconds(self.total_time_seconds)
    }

    /// Returns the number of timesteps, `floor(total / delta) + 1`.
    pub fn num_timesteps(&self) -> usize {
        (self.total_time_seconds / self.time_delta_seconds) as usize + 1
    }

    /// Returns the instant of timestep `index`.
    pub fn timestamp(&self, index: usize) -> DateTime<Utc> {
        self.start + Duration::seconds(self.time_delta_seconds * index as i64)
    }

    /// Returns the grid as wire metadata.
    pub fn meta(&self) -> SeriesMeta {
        SeriesMeta {
            start_time: format_timestamp(self.start),
            end_time: format_timestamp(self.end()),
            time_delta_seconds: self.time_delta_seconds,
            total_time_seconds: self.total_time_seconds,
            num_timesteps: self.num_timesteps(),
        }
    }
}
