//! Shared series metadata echoed from stage to stage.

use serde::{Deserialize, Serialize};

/// Time-grid metadata attached to every set of series in a pipeline run.
///
/// Produced by the generator and echoed verbatim by the interpolator so
/// that downstream stages never need to re-derive the grid from row data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// RFC 3339 timestamp of the first timestep.
    pub start_time: String,
    /// RFC 3339 timestamp of `start_time + total_time_seconds`.
    pub end_time: String,
    /// Seconds between consecutive timesteps.
    pub time_delta_seconds: i64,
    /// Total covered duration in seconds.
    pub total_time_seconds: i64,
    /// Number of rows in every series of the run.
    pub num_timesteps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let meta = SeriesMeta {
            start_time: "2025-01-01T00:00:00Z".to_string(),
            end_time: "2025-01-01T06:00:00Z".to_string(),
            time_delta_seconds: 900,
            total_time_seconds: 21600,
            num_timesteps: 25,
        };
        let json = serde_json::to_string(&meta).unwrap();
        let back: SeriesMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
