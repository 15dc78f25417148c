//! Error types shared by every Medidash crate.
//!
//! Store mutators do not fail on unknown ids; they return `None` instead.
//! The variants below cover the I/O-facing edges: configuration, the theme
//! preference file, form conversion, and string parsing at the CLI boundary.

use thiserror::Error;

/// The unified error type for the Medidash workspace.
#[derive(Debug, Error)]
pub enum MedidashError {
    /// A configuration document could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The theme preference could not be loaded or saved.
    #[error("preference error: {reason}")]
    PreferenceError { reason: String },

    /// A form was converted into a store input while it still had field errors.
    #[error("validation failed with {count} field error(s): {summary}")]
    ValidationFailed { count: usize, summary: String },

    /// A string did not name any variant of the expected enumeration.
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    /// A value could not be serialized for rule evaluation or display.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for MedidashError {
    fn from(e: serde_json::Error) -> Self {
        MedidashError::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the Medidash crates.
pub type MedidashResult<T> = Result<T, MedidashError>;
