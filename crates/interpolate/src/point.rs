//! Query point descriptors.

use serde::{Deserialize, Serialize};

/// A named location at which interpolated values are requested.
///
/// The name is carried as the map key on the wire; only the coordinates
/// live here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryPoint {
    /// Normalized plane x coordinate.
    pub x: f64,
    /// Normalized plane y coordinate.
    pub y: f64,
}

impl QueryPoint {
    /// Creates a query point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
