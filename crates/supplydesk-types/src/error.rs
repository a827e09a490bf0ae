use serde::Serialize;
use std::fmt;

/// Result type for supplydesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string could not be parsed into one of the closed vocabularies
    /// (status, importance level, supplier id).
    InvalidValue { kind: &'static str, value: String },

    /// One or more fields of a supplier payload failed validation
    Validation(Vec<FieldError>),
}

/// A single rejected field in a supplier payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue { kind, value } => {
                write!(f, "Invalid {}: '{}'", kind, value)
            }
            Error::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Validation failed: {}", joined)
            }
        }
    }
}

impl std::error::Error for Error {}
