//! Type predicates and assertions.
//!
//! [`Types::is`] answers whether a node belongs to a concrete type or an
//! alias, optionally matching a partial shape. The remaining predicates in
//! this module's children look at tree shape rather than the schema.

mod binding;
mod scope;

pub use binding::{is_binding, is_referenced};

use arbor_ast::{Node, Value};
use indexmap::IndexMap;

use crate::{AstError, Types};

/// A partial shape: field names paired with the values they must hold.
///
/// Values compare with [`Value::strict_eq`], so child nodes match only
/// when they are the very same node.
pub type Shape<'a> = [(&'a str, &'a Value)];

/// Returns true if every field named in `shape` holds the given value.
pub fn shallow_equal(node: &Node, shape: &Shape<'_>) -> bool {
    shape
        .iter()
        .all(|(key, expected)| node.get(key).is_some_and(|actual| actual.strict_eq(expected)))
}

impl Types<'_> {
    /// Returns true if `node` is of `type_name` (a concrete type, alias or
    /// deprecated name) and matches `shape`. An empty shape matches any
    /// node.
    ///
    /// An absent node is never of any type. An unknown `type_name` is an
    /// error.
    pub fn is<'n>(
        &self,
        type_name: &str,
        node: impl Into<Option<&'n Node>>,
        shape: &Shape<'_>,
    ) -> Result<bool, AstError> {
        let Some(node) = node.into() else {
            return Ok(false);
        };
        let target = self.resolve_name(type_name);
        if !self.registry().matches(&node.node_type, target)? {
            return Ok(false);
        }
        Ok(shallow_equal(node, shape))
    }

    /// Like [`Types::is`], failing with [`AstError::TypeAssertion`] instead
    /// of returning false.
    pub fn assert_is<'n>(
        &self,
        type_name: &str,
        node: impl Into<Option<&'n Node>>,
        shape: &Shape<'_>,
    ) -> Result<(), AstError> {
        if self.is(type_name, node, shape)? {
            return Ok(());
        }
        let shape: IndexMap<&str, &Value> = shape.iter().copied().collect();
        Err(AstError::TypeAssertion {
            expected: type_name.to_string(),
            shape: serde_json::to_string(&shape).unwrap_or_default(),
        })
    }

    /// Returns true if `node` is tagged with a registered concrete type.
    pub fn is_node(&self, node: Option<&Node>) -> bool {
        node.is_some_and(|node| self.registry().is_type(&node.node_type))
    }

    pub fn assert_node(&self, node: Option<&Node>) -> Result<(), AstError> {
        if self.is_node(node) {
            return Ok(());
        }
        let shown = node.map_or("null", |node| node.node_type.as_str());
        Err(AstError::InvalidNode(shown.to_string()))
    }
}
