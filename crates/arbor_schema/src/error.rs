//! Schema error types.

use thiserror::Error;

/// Errors raised while loading definitions or looking up types.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The name is neither a node type, an alias nor a deprecated name.
    #[error("Unknown node type or alias: {0}")]
    UnknownType(String),

    /// A definition is internally inconsistent.
    #[error("Invalid definition for {type_name}: {message}")]
    InvalidDefinition { type_name: String, message: String },

    /// The definitions document failed schema validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The definitions document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType(name.into())
    }

    /// Creates an invalid definition error.
    pub fn invalid_definition(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// A field value violated its declared constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Property {key} of {node_type} expected {expected} but got {received}")]
pub struct ValidationError {
    /// Type of the node owning the field.
    pub node_type: String,
    /// Field key, with an `[index]` suffix for list elements.
    pub key: String,
    /// Human-readable constraint.
    pub expected: String,
    /// Description of the offending value.
    pub received: String,
}

impl ValidationError {
    pub fn new(
        node_type: impl Into<String>,
        key: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            key: key.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Identifier", "name", "type string", "number 1");
        assert_eq!(
            err.to_string(),
            "Property name of Identifier expected type string but got number 1"
        );
    }

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::unknown_type("Nope").to_string(),
            "Unknown node type or alias: Nope"
        );
        assert_eq!(
            SchemaError::invalid_definition("Foo", "builder key bar is not a field").to_string(),
            "Invalid definition for Foo: builder key bar is not a field"
        );
    }
}
