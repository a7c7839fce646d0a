//! Error types for the notos-interpolate crate.

use notos_schema::SchemaError;

/// Error type for all fallible operations in the notos-interpolate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpolateError {
    /// Returned when the observation set is empty.
    #[error("no observation series provided")]
    NoObservations,

    /// Returned when an observation series deviates from the canonical
    /// column schema.
    #[error("observation {area:?}: {source}")]
    Schema {
        /// The offending area name.
        area: String,
        /// The underlying schema error.
        source: SchemaError,
    },

    /// Returned when an observation series' length disagrees with the
    /// advertised timestep count.
    #[error("observation {area:?} has {got} timesteps, expected {expected}")]
    LengthMismatch {
        /// The offending area name.
        area: String,
        /// Expected timestep count from the shared metadata.
        expected: usize,
        /// Actual row count of the series.
        got: usize,
    },

    /// Returned when an observation or query coordinate is NaN or infinite.
    #[error("{kind} {name:?}: non-finite coordinate")]
    NonFiniteCoordinate {
        /// Either `"observation"` or `"query"`.
        kind: &'static str,
        /// The offending observation or query name.
        name: String,
    },
}
