//! # notos-interpolate
//!
//! Spatially interpolates aligned area timeseries onto arbitrary query
//! points with inverse-distance weighting (power 2).
//!
//! All observation series in one call must share the canonical column
//! order and the advertised timestep count; the interpolator validates
//! both up front and then relies on positional timestep indices being
//! simultaneous across areas. Query points co-located with an observation
//! (within 1e-10 on both axes or in Euclidean distance) receive that
//! observation's values verbatim.

mod error;
mod idw;
mod point;

pub use error::InterpolateError;
pub use idw::COINCIDENCE_TOL;
pub use point::QueryPoint;

use std::collections::BTreeMap;

use tracing::debug;

use notos_schema::{ColumnarSeries, Parameter, SeriesMeta, WeatherRecord};

use crate::idw::idw_estimate;

/// Checks observation schemas, lengths, and coordinates against the
/// shared metadata.
fn validate_observations(
    observations: &BTreeMap<String, ColumnarSeries>,
    meta: &SeriesMeta,
) -> Result<(), InterpolateError> {
    if observations.is_empty() {
        return Err(InterpolateError::NoObservations);
    }
    for (name, series) in observations {
        series
            .validate_schema()
            .map_err(|source| InterpolateError::Schema {
                area: name.clone(),
                source,
            })?;
        if series.len() != meta.num_timesteps {
            return Err(InterpolateError::LengthMismatch {
                area: name.clone(),
                expected: meta.num_timesteps,
                got: series.len(),
            });
        }
        if !series.x.is_finite() || !series.y.is_finite() {
            return Err(InterpolateError::NonFiniteCoordinate {
                kind: "observation",
                name: name.clone(),
            });
        }
    }
    Ok(())
}

/// Interpolates every parameter of every timestep onto each query point.
///
/// Returns one series per query point, keyed by query name, in the same
/// columnar shape as the observations. Timestamps are copied verbatim
/// from the first observation series (all series share them by
/// precondition, which is re-checked here). An empty query map yields an
/// empty result, not an error.
///
/// # Errors
///
/// Returns [`InterpolateError`] if the observation set is empty, a series
/// deviates from the canonical schema or advertised length, or any
/// coordinate is non-finite.
#[tracing::instrument(skip(observations, meta, queries), fields(n_observations = observations.len(), n_queries = queries.len()))]
pub fn interpolate(
    observations: &BTreeMap<String, ColumnarSeries>,
    meta: &SeriesMeta,
    queries: &BTreeMap<String, QueryPoint>,
) -> Result<BTreeMap<String, ColumnarSeries>, InterpolateError> {
    validate_observations(observations, meta)?;
    for (name, point) in queries {
        if !point.is_finite() {
            return Err(InterpolateError::NonFiniteCoordinate {
                kind: "query",
                name: name.clone(),
            });
        }
    }

    debug!(num_timesteps = meta.num_timesteps, "interpolating query timeseries");

    // Validation guarantees at least one observation.
    let Some(reference) = observations.values().next() else {
        return Err(InterpolateError::NoObservations);
    };

    let mut result = BTreeMap::new();
    // Scratch buffer of (x, y, value) triples, reused across timesteps.
    let mut points: Vec<(f64, f64, f64)> = Vec::with_capacity(observations.len());

    for (query_name, query) in queries {
        let mut series = ColumnarSeries::with_capacity(query.x, query.y, meta.num_timesteps);
        for step in 0..meta.num_timesteps {
            let timestamp = reference.timeseries[step].timestamp.clone();
            let mut values = [0.0_f64; 6];
            for parameter in Parameter::ALL {
                points.clear();
                points.extend(observations.values().map(|obs| {
                    (obs.x, obs.y, obs.timeseries[step].value(parameter))
                }));
                values[parameter.index()] = idw_estimate(query.x, query.y, &points);
            }
            series.push(WeatherRecord::from_values(timestamp, values));
        }
        result.insert(query_name.clone(), series);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_at(x: f64, y: f64, values: [f64; 6], n: usize) -> ColumnarSeries {
        let mut s = ColumnarSeries::new(x, y);
        for step in 0..n {
            s.push(WeatherRecord::from_values(
                format!("2025-01-01T00:{:02}:00Z", step),
                values,
            ));
        }
        s
    }

    fn meta(n: usize) -> SeriesMeta {
        SeriesMeta {
            start_time: "2025-01-01T00:00:00Z".to_string(),
            end_time: format!("2025-01-01T00:{:02}:00Z", n - 1),
            time_delta_seconds: 60,
            total_time_seconds: 60 * (n as i64 - 1),
            num_timesteps: n,
        }
    }

    #[test]
    fn empty_observations_fail() {
        let result = interpolate(&BTreeMap::new(), &meta(1), &BTreeMap::new());
        assert_eq!(result.unwrap_err(), InterpolateError::NoObservations);
    }

    #[test]
    fn empty_queries_yield_empty_result() {
        let mut obs = BTreeMap::new();
        obs.insert("a".to_string(), series_at(0.0, 0.0, [1.0; 6], 3));
        let result = interpolate(&obs, &meta(3), &BTreeMap::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let mut obs = BTreeMap::new();
        obs.insert("a".to_string(), series_at(0.0, 0.0, [1.0; 6], 3));
        obs.insert("b".to_string(), series_at(1.0, 1.0, [2.0; 6], 2));
        let mut queries = BTreeMap::new();
        queries.insert("q".to_string(), QueryPoint::new(0.5, 0.5));
        assert!(matches!(
            interpolate(&obs, &meta(3), &queries),
            Err(InterpolateError::LengthMismatch { got: 2, .. })
        ));
    }

    #[test]
    fn schema_mismatch_fails_fast() {
        let mut bad = series_at(0.0, 0.0, [1.0; 6], 2);
        bad.columns.swap(1, 2);
        let mut obs = BTreeMap::new();
        obs.insert("a".to_string(), bad);
        let mut queries = BTreeMap::new();
        queries.insert("q".to_string(), QueryPoint::new(0.5, 0.5));
        assert!(matches!(
            interpolate(&obs, &meta(2), &queries),
            Err(InterpolateError::Schema { .. })
        ));
    }

    #[test]
    fn non_finite_query_rejected() {
        let mut obs = BTreeMap::new();
        obs.insert("a".to_string(), series_at(0.0, 0.0, [1.0; 6], 1));
        let mut queries = BTreeMap::new();
        queries.insert("q".to_string(), QueryPoint::new(f64::NAN, 0.5));
        assert!(matches!(
            interpolate(&obs, &meta(1), &queries),
            Err(InterpolateError::NonFiniteCoordinate { kind: "query", .. })
        ));
    }

    #[test]
    fn timestamps_copied_from_observations() {
        let mut obs = BTreeMap::new();
        obs.insert("a".to_string(), series_at(0.0, 0.0, [1.0; 6], 4));
        let mut queries = BTreeMap::new();
        queries.insert("q".to_string(), QueryPoint::new(0.3, 0.7));
        let result = interpolate(&obs, &meta(4), &queries).unwrap();
        let q = &result["q"];
        for (step, record) in q.timeseries.iter().enumerate() {
            assert_eq!(record.timestamp, obs["a"].timeseries[step].timestamp);
        }
    }
}
