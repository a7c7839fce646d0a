//! Error types for the notos-session crate.

use notos_generate::GenerateError;
use notos_interpolate::InterpolateError;
use notos_schema::SchemaError;
use notos_swmm::SwmmError;

/// Error type for all fallible operations in the notos-session crate.
///
/// Every variant is rendered into the uniform `{status: "error", message}`
/// reply shape at the session boundary; nothing here escapes as a panic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Returned when a request body or nested field cannot be decoded.
    #[error("malformed request: {reason}")]
    Malformed {
        /// Decoder diagnostic.
        reason: String,
    },

    /// Returned when a reply cannot be encoded to JSON.
    #[error("failed to encode reply: {reason}")]
    Encode {
        /// Encoder diagnostic.
        reason: String,
    },

    /// Returned on timestamp parse failures in request fields.
    #[error("invalid timestamp: {source}")]
    Timestamp {
        /// The underlying schema error.
        #[from]
        source: SchemaError,
    },

    /// Returned when generation fails validation or execution.
    #[error("generation failed: {source}")]
    Generate {
        /// The underlying generation error.
        #[from]
        source: GenerateError,
    },

    /// Returned when interpolation fails validation or execution.
    #[error("interpolation failed: {source}")]
    Interpolate {
        /// The underlying interpolation error.
        #[from]
        source: InterpolateError,
    },

    /// Returned when format conversion fails.
    #[error("conversion failed: {source}")]
    Convert {
        /// The underlying conversion error.
        #[from]
        source: SwmmError,
    },
}
