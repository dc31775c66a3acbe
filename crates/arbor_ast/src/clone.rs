//! Node cloning.
//!
//! Children are owned, so every clone copies the whole subtree. The
//! variants differ in which bookkeeping they carry over:
//!
//! - [`Node::shallow_clone`] drops the private side table of the cloned
//!   node only; descendants are copied verbatim.
//! - [`Node::clone_without_loc`] additionally clears `loc`.
//! - [`Node::deep_clone`] rebuilds every descendant, dropping the private
//!   side table at every level.

use crate::{Node, Value};

impl Node {
    /// Copies the node without its private side table.
    pub fn shallow_clone(&self) -> Node {
        self.copy_with(Value::clone)
    }

    /// Copies the node without its private side table and without `loc`.
    pub fn clone_without_loc(&self) -> Node {
        let mut node = self.shallow_clone();
        node.loc = None;
        node
    }

    /// Recursively copies the node and all descendants, dropping private
    /// side tables everywhere.
    pub fn deep_clone(&self) -> Node {
        self.copy_with(deep_clone_value)
    }

    fn copy_with(&self, copy: impl Fn(&Value) -> Value) -> Node {
        let mut node = Node::new(self.node_type.clone());
        for (key, value) in self.fields() {
            node.set(key, copy(value));
        }
        node.span = self.span;
        node.loc = self.loc;
        node.raw = self.raw.clone();
        node.leading_comments = self.leading_comments.clone();
        node.trailing_comments = self.trailing_comments.clone();
        node.inner_comments = self.inner_comments.clone();
        node
    }
}

fn deep_clone_value(value: &Value) -> Value {
    match value {
        Value::Node(node) => Value::Node(Box::new(node.deep_clone())),
        Value::List(items) => Value::List(items.iter().map(deep_clone_value).collect()),
        other => other.clone(),
    }
}

/// Shallow clone that passes an absent node through.
pub fn clone(node: Option<&Node>) -> Option<Node> {
    node.map(Node::shallow_clone)
}

/// Location-free clone that passes an absent node through.
pub fn clone_without_loc(node: Option<&Node>) -> Option<Node> {
    node.map(Node::clone_without_loc)
}

/// Deep clone that passes an absent node through.
pub fn clone_deep(node: Option<&Node>) -> Option<Node> {
    node.map(Node::deep_clone)
}
