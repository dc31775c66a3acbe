//! Node type and field definitions.

use arbor_ast::Value;
use indexmap::IndexMap;

use crate::Validator;

/// Definition of one field of a node type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSpec {
    pub name: String,
    /// Value assigned by the builder when no argument is supplied.
    pub default: Option<Value>,
    /// Whether the field may be absent or null.
    pub optional: bool,
    /// Whether structural equivalence ignores the field.
    pub hidden: bool,
    pub validate: Option<Validator>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    /// Returns a fresh copy of the default, owned by the caller.
    pub fn fresh_default(&self) -> Option<Value> {
        self.default.clone()
    }
}

/// Definition of a node type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeTypeDef {
    pub name: String,
    /// Fields in declaration order.
    pub fields: IndexMap<String, FieldSpec>,
    /// Aliases this type belongs to.
    pub aliases: Vec<String>,
    /// Field names in positional builder-argument order.
    pub builder: Vec<String>,
    /// Fields holding child nodes, in traversal order.
    pub visitor: Vec<String>,
}

impl NodeTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a field, replacing any earlier field with the same name.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn builder<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn visitor<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visitor = keys.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}
