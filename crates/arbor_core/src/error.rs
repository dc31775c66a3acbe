//! Error types for tree operations.

use arbor_schema::{SchemaError, ValidationError};
use thiserror::Error;

/// Errors that can occur while building, checking or converting nodes.
#[derive(Debug, Error)]
pub enum AstError {
    /// Unknown type or alias name.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// More positional builder arguments than the type accepts.
    #[error(
        "{node_type}: Too many arguments passed. Received {received} but can receive no more than {max}"
    )]
    BuilderArity {
        node_type: String,
        received: usize,
        max: usize,
    },

    /// A field value violated its constraint.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A type assertion failed.
    #[error("Expected type \"{expected}\" with option {shape}")]
    TypeAssertion { expected: String, shape: String },

    /// The value is not a node of any registered type.
    #[error("Not a valid node \"{0}\"")]
    InvalidNode(String),

    /// A structural conversion could not be applied.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl AstError {
    /// Creates a conversion error.
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }
}
