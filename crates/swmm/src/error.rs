//! Error types for the notos-swmm crate.

use notos_schema::SchemaError;

/// Error type for all fallible operations in the notos-swmm crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwmmError {
    /// Returned when the requested parameter is absent from a series'
    /// declared columns.
    #[error("parameter {parameter:?} not found in columns {columns:?}")]
    ParameterNotFound {
        /// The requested parameter name.
        parameter: String,
        /// The columns that were declared.
        columns: Vec<String>,
    },

    /// Returned on schema or timestamp failures in the underlying series.
    #[error("series {name:?}: {source}")]
    Series {
        /// The offending series name.
        name: String,
        /// The underlying schema error.
        source: SchemaError,
    },

    /// Returned when a simulation window bound does not parse.
    #[error("simulation window {bound}: {source}")]
    Window {
        /// Either `"start_time"` or `"end_time"`.
        bound: &'static str,
        /// The underlying timestamp error.
        source: SchemaError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_parameter_not_found() {
        let e = SwmmError::ParameterNotFound {
            parameter: "snow".to_string(),
            columns: vec!["timestamp".to_string(), "precipitation".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "parameter \"snow\" not found in columns [\"timestamp\", \"precipitation\"]"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SwmmError>();
    }
}
