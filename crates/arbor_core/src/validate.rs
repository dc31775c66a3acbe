//! Field validation.

use arbor_ast::{Node, Value};
use arbor_schema::ValidationError;

use crate::Types;

impl Types<'_> {
    /// Checks `value` against the validator of field `key` of `node`.
    ///
    /// Passes when the node is absent, its type or the field is unknown,
    /// the field declares no validator, or the field is optional and the
    /// value is absent or null. An absent value for a required field fails.
    pub fn validate(
        &self,
        node: Option<&Node>,
        key: &str,
        value: Option<&Value>,
    ) -> Result<(), ValidationError> {
        let Some(node) = node else {
            return Ok(());
        };
        let Some(field) = self.registry().field(&node.node_type, key) else {
            return Ok(());
        };
        let Some(validator) = &field.validate else {
            return Ok(());
        };
        if field.optional && value.is_none_or(Value::is_null) {
            return Ok(());
        }

        match value {
            Some(value) => validator.check(self.registry(), node, key, value),
            None => Err(ValidationError::new(&node.node_type, key, "a value", "undefined")),
        }
    }

    /// Validates every field the node's type declares.
    pub fn validate_node(&self, node: &Node) -> Result<(), ValidationError> {
        let Ok(fields) = self.registry().fields_of(&node.node_type) else {
            return Ok(());
        };
        for key in fields.keys() {
            self.validate(Some(node), key, node.get(key))?;
        }
        Ok(())
    }
}
