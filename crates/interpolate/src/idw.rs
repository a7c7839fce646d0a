//! The inverse-distance weighting kernel.

/// Absolute tolerance below which a query point is treated as co-located
/// with an observation, on each axis and on Euclidean distance.
pub const COINCIDENCE_TOL: f64 = 1e-10;

/// Estimates a value at `(qx, qy)` from `(x, y, value)` observations using
/// inverse-distance weighting with power 2.
///
/// A single pass over the observations: the first one (in slice order)
/// whose axis deltas are both below [`COINCIDENCE_TOL`], or whose distance
/// to the query point is below it, short-circuits and its value is
/// returned directly. This guarantees exact pass-through for co-located
/// points and keeps the weights free of division by zero.
///
/// Assumes a non-empty slice; callers validate before dispatching.
pub(crate) fn idw_estimate(qx: f64, qy: f64, observations: &[(f64, f64, f64)]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for &(x, y, value) in observations {
        let dx = x - qx;
        let dy = y - qy;
        if dx.abs() < COINCIDENCE_TOL && dy.abs() < COINCIDENCE_TOL {
            return value;
        }
        let d2 = dx * dx + dy * dy;
        if d2 < COINCIDENCE_TOL * COINCIDENCE_TOL {
            return value;
        }
        // power = 2: weight is 1/d^2, so no square root is needed.
        let weight = 1.0 / d2;
        weighted_sum += weight * value;
        total_weight += weight;
    }
    weighted_sum / total_weight
}
