//! Error types for the notos-ranges crate.

use notos_schema::Parameter;

/// Error type for all fallible operations in the notos-ranges crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Returned when a range has min greater than max.
    #[error("{parameter}: min {min} exceeds max {max}")]
    InvertedBounds {
        /// The parameter whose range is inverted.
        parameter: Parameter,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },

    /// Returned when a step size is negative.
    #[error("{parameter}: step must be >= 0, got {step}")]
    NegativeStep {
        /// The parameter with the negative step.
        parameter: Parameter,
        /// Configured step size.
        step: f64,
    },

    /// Returned when a range field is NaN or infinite.
    #[error("{parameter}: non-finite value in {field}")]
    NonFinite {
        /// The parameter with the non-finite field.
        parameter: Parameter,
        /// Which of min/max/step was non-finite.
        field: &'static str,
    },
}
