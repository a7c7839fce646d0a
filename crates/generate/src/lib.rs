//! # notos-generate
//!
//! Synthesizes per-area weather timeseries over a fixed timestep grid.
//!
//! Each area starts from its configured parameter values. In random-walk
//! mode every parameter advances independently per timestep by a uniform
//! draw in `[-step, step]`, clamped to the parameter's `[min, max]` range;
//! the walk step is applied before recording, so the first emitted row is
//! already one step away from the starting values. In static mode the
//! starting values are repeated verbatim at every timestep.
//!
//! Randomness is injected as `&mut impl Rng`, so a seeded
//! [`rand::rngs::StdRng`] reproduces a walk exactly.

mod area;
mod error;
mod grid;
mod result;
mod walk;

pub use area::Area;
pub use error::GenerateError;
pub use grid::TimeGrid;
pub use result::GenerateResult;

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use notos_schema::{ColumnarSeries, Parameter, WeatherRecord, format_timestamp};

use crate::walk::walk_step;

/// Validates the area list: non-empty, no name collisions, finite fields,
/// valid ranges.
fn validate_areas(areas: &[Area]) -> Result<(), GenerateError> {
    if areas.is_empty() {
        return Err(GenerateError::NoAreas);
    }
    let mut seen = std::collections::BTreeSet::new();
    for area in areas {
        if !seen.insert(area.name()) {
            return Err(GenerateError::DuplicateArea {
                name: area.name().to_string(),
            });
        }
        area.validate()?;
    }
    Ok(())
}

/// Generates one columnar series per area over `grid`.
///
/// With `use_random_walk` set, every parameter of every area performs an
/// independent bounded random walk driven by `rng`; otherwise each area's
/// starting values are repeated at every timestep, which is fully
/// deterministic and never touches `rng`.
///
/// # Errors
///
/// Returns [`GenerateError`] if the area list is empty, contains a
/// duplicate name, or an area has non-finite fields or invalid ranges.
#[tracing::instrument(skip(areas, grid, rng), fields(n_areas = areas.len()))]
pub fn generate(
    areas: &[Area],
    grid: &TimeGrid,
    use_random_walk: bool,
    rng: &mut impl Rng,
) -> Result<GenerateResult, GenerateError> {
    validate_areas(areas)?;

    let num_timesteps = grid.num_timesteps();
    debug!(num_timesteps, use_random_walk, "generating area timeseries");

    // Series and walk state, both parallel to `areas`.
    let mut series: Vec<ColumnarSeries> = areas
        .iter()
        .map(|a| ColumnarSeries::with_capacity(a.x(), a.y(), num_timesteps))
        .collect();
    let mut states: Vec<[f64; 6]> = areas.iter().map(Area::start_values).collect();

    for step in 0..num_timesteps {
        let timestamp = format_timestamp(grid.timestamp(step));
        for ((area, state), out) in areas.iter().zip(&mut states).zip(&mut series) {
            let values = if use_random_walk {
                for parameter in Parameter::ALL {
                    let range = area.ranges().get(parameter);
                    state[parameter.index()] =
                        walk_step(state[parameter.index()], range, rng);
                }
                *state
            } else {
                area.start_values()
            };
            out.push(WeatherRecord::from_values(timestamp.clone(), values));
        }
    }

    let series: BTreeMap<String, ColumnarSeries> = areas
        .iter()
        .map(|a| a.name().to_string())
        .zip(series)
        .collect();
    Ok(GenerateResult::new(series, grid.meta()))
}
