//! Error types for quantgrid-core

use crate::reference::ReferenceKind;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quantgrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// A required key is absent from a mapping
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A key is present but has the wrong shape
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The processor tag is not in the registry
    #[error("Unknown processor: {0}")]
    UnknownProcessor(String),

    /// A processor cross-reference could not be resolved
    #[error("{kind} reference not found: {id}")]
    ReferenceNotFound { kind: ReferenceKind, id: String },

    /// A processor's own deserialization failed
    #[error("Processor error: {0}")]
    Processor(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid-field error with a message
    pub fn invalid_field<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Error::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
