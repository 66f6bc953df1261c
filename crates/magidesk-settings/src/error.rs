//! Error types for settings operations.

use thiserror::Error;

/// Primary error type for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Field contained a value outside its accepted range or shape.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Section that failed validation.
        section: String,
        /// Field that failed validation.
        field: String,
        /// Human-readable error description.
        message: String,
    },
    /// Category key was not recognised by the wire layer.
    #[error("unknown settings category '{key}'")]
    UnknownCategory {
        /// Key supplied by the caller.
        key: String,
    },
    /// Backend answered with a failure status.
    #[error("settings backend rejected the request ({status}): {detail}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Problem detail or status text supplied by the backend.
        detail: String,
    },
    /// Request never produced a usable response.
    #[error("settings transport failed during {operation}")]
    Transport {
        /// Operation identifier.
        operation: &'static str,
        /// Source transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Settings document could not be encoded or decoded.
    #[error("settings document could not be {operation}")]
    Serialization {
        /// Operation identifier (`encoded` or `decoded`).
        operation: &'static str,
        /// Source serialisation error.
        source: serde_json::Error,
    },
}

/// Convenience alias for settings results.
pub type SettingsResult<T> = Result<T, SettingsError>;
