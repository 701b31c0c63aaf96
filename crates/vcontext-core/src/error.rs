//! Error types for the document library.
//!
//! Building a document never fails. These errors only come from parsing
//! values at the edges, such as status names typed on a command line.

use thiserror::Error;

/// Error type for parsing document values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DocumentError {
        DocumentError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DocumentError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
