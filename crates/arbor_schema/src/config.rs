//! Loading node type definitions from JSON.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use arbor_ast::Value;
use indexmap::IndexMap;
use jsonschema::Validator as JsonSchemaValidator;
use serde::{Deserialize, Serialize};

use crate::{FieldSpec, NodeTypeDef, Registry, SchemaError, Validator};

// Embed the schema
// Path is relative to this file: ../../../schemas/v1/definitions.json
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/definitions.json");
static DEFINITIONS_SCHEMA: OnceLock<JsonSchemaValidator> = OnceLock::new();

const ES_DEFINITIONS_JSON: &str = include_str!("../definitions/es.json");
static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// The structure of a definitions document.
/// This matches `schemas/v1/definitions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionsDocument {
    pub types: Vec<TypeDefinition>,
    /// Deprecated name to replacement type.
    #[serde(default)]
    pub deprecated: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Positional builder order. Defaults to the visitor keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<Vec<String>>,
    #[serde(default)]
    pub visitor: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// A JSON `null` default means "no default".
    #[serde(default)]
    pub default: serde_json::Value,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validator>,
}

impl Registry {
    /// Loads definitions from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses definitions from a JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        // Parse into Value first for validation
        let value: serde_json::Value = serde_json::from_str(json)?;

        let schema = DEFINITIONS_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded definitions schema");
            JsonSchemaValidator::new(&schema_json).expect("Invalid definitions schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(SchemaError::config(format!(
                "Definitions validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        let document: DefinitionsDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    /// Builds a registry from an already deserialized document.
    pub fn from_document(document: DefinitionsDocument) -> Result<Self, SchemaError> {
        let mut builder = Registry::builder();
        for ty in document.types {
            builder.define_type(ty.into_node_type_def()?)?;
        }
        for (old, new) in document.deprecated {
            builder.deprecate(old, new);
        }
        builder.build()
    }
}

impl TypeDefinition {
    fn into_node_type_def(self) -> Result<NodeTypeDef, SchemaError> {
        let builder = self.builder.unwrap_or_else(|| self.visitor.clone());
        let mut def = NodeTypeDef::new(&self.name)
            .aliases(self.aliases)
            .builder(builder)
            .visitor(self.visitor);

        for (name, field) in self.fields {
            let mut spec = FieldSpec::new(name);
            spec.default = default_value(&self.name, &field.default)?;
            spec.optional = field.optional;
            spec.hidden = field.hidden;
            spec.validate = field.validate;
            def = def.field(spec);
        }

        Ok(def)
    }
}

fn default_value(type_name: &str, json: &serde_json::Value) -> Result<Option<Value>, SchemaError> {
    if json.is_null() {
        return Ok(None);
    }
    json_to_value(type_name, json).map(Some)
}

fn json_to_value(type_name: &str, json: &serde_json::Value) -> Result<Value, SchemaError> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::List(
            items
                .iter()
                .map(|item| json_to_value(type_name, item))
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(_) => {
            return Err(SchemaError::invalid_definition(
                type_name,
                "object defaults are not supported",
            ));
        }
    })
}

/// Returns the process-wide registry of built-in ECMAScript node types.
///
/// The definitions are embedded at compile time and loaded on first use.
pub fn builtin() -> &'static Registry {
    BUILTIN.get_or_init(|| {
        Registry::from_json(ES_DEFINITIONS_JSON).expect("Invalid embedded node definitions")
    })
}
