//! Error types for the notos-generate crate.

use notos_ranges::RangeError;

/// Error type for all fallible operations in the notos-generate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Returned when the timestep interval is zero or negative.
    #[error("time_delta must be > 0 seconds, got {time_delta}")]
    NonPositiveTimeDelta {
        /// The invalid interval in seconds.
        time_delta: i64,
    },

    /// Returned when the total duration is negative.
    #[error("total_time must be >= 0 seconds, got {total_time}")]
    NegativeTotalTime {
        /// The invalid duration in seconds.
        total_time: i64,
    },

    /// Returned when the grid extends past the representable time range.
    #[error("total_time of {total_time} seconds extends past the representable time range")]
    TimeOutOfRange {
        /// The requested duration in seconds.
        total_time: i64,
    },

    /// Returned when no areas are supplied.
    #[error("at least one area is required")]
    NoAreas,

    /// Returned when two areas share a name.
    #[error("duplicate area name {name:?}")]
    DuplicateArea {
        /// The colliding area name.
        name: String,
    },

    /// Returned when an area's coordinates or starting values are NaN or
    /// infinite.
    #[error("area {area:?}: non-finite value in {field}")]
    NonFiniteField {
        /// The offending area name.
        area: String,
        /// Which field was non-finite.
        field: &'static str,
    },

    /// Returned when an area's effective ranges fail validation.
    #[error("area {area:?}: {source}")]
    InvalidRanges {
        /// The offending area name.
        area: String,
        /// The underlying range error.
        source: RangeError,
    },
}
