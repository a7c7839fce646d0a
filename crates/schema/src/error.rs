//! Error types for the notos-schema crate.

/// Error type for all fallible operations in the notos-schema crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Returned when a parameter name is not one of the six weather parameters.
    #[error("unknown parameter {name:?}")]
    UnknownParameter {
        /// The unrecognised parameter name.
        name: String,
    },

    /// Returned when a timestamp string is not valid RFC 3339.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The offending timestamp string.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Returned when a series' column list does not match the canonical schema.
    #[error("series columns {found:?} do not match the canonical column order")]
    ColumnMismatch {
        /// The column list that was found.
        found: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_parameter() {
        let e = SchemaError::UnknownParameter {
            name: "snowfall".to_string(),
        };
        assert_eq!(e.to_string(), "unknown parameter \"snowfall\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SchemaError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SchemaError>();
    }
}
