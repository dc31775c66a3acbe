//! Structural equivalence.

use arbor_ast::{Node, Value};

use crate::Types;

impl Types<'_> {
    /// Returns true if `a` and `b` have the same type and equivalent
    /// fields, ignoring positions, comments and private bookkeeping.
    ///
    /// The compared fields are the non-hidden fields of `a`'s type, or
    /// `a`'s own fields when its type is unknown. A field that only `b`
    /// holds is never looked at, so the relation is not always symmetric.
    pub fn is_nodes_equivalent(&self, a: &Node, b: &Node) -> bool {
        if a.node_type != b.node_type {
            return false;
        }

        match self.registry().fields_of(&a.node_type) {
            Ok(fields) => fields
                .iter()
                .filter(|(_, spec)| !spec.hidden)
                .all(|(key, _)| self.fields_equivalent(a.get(key), b.get(key))),
            Err(_) => a
                .fields()
                .all(|(key, value)| self.fields_equivalent(Some(value), b.get(key))),
        }
    }

    fn fields_equivalent(&self, a: Option<&Value>, b: Option<&Value>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.values_equivalent(a, b),
            _ => false,
        }
    }

    fn values_equivalent(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Node(a), Value::Node(b)) => self.is_nodes_equivalent(a, b),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| self.values_equivalent(a, b))
            }
            (a, b) => a == b,
        }
    }
}
