//! MutVisitor trait for transforming nodes in place.
//!
//! # Example
//!
//! ```rust
//! use arbor_ast::Node;
//! use arbor_ast::visitor::{MutVisitor, VisitResult, walk_node_mut};
//! use std::ops::ControlFlow;
//!
//! struct Rename;
//!
//! impl MutVisitor for Rename {
//!     fn enter_node_mut(&mut self, node: &mut Node) -> VisitResult {
//!         if node.get_str("name") == Some("old") {
//!             node.set("name", "new");
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut node = Node::new("ExpressionStatement")
//!     .with("expression", Node::new("Identifier").with("name", "old"));
//! let _ = walk_node_mut(&mut Rename, &mut node);
//! assert_eq!(node.get_node("expression").and_then(|n| n.get_str("name")), Some("new"));
//! ```

use std::ops::ControlFlow;

use crate::{Node, Value};

use super::visit::VisitResult;

/// Visitor trait for modifying nodes during traversal.
///
/// `enter_node_mut` runs before children are visited, so changes it makes
/// to a node's fields decide which children the walk descends into.
pub trait MutVisitor: Sized {
    #[inline]
    fn enter_node_mut(&mut self, _node: &mut Node) -> VisitResult {
        ControlFlow::Continue(())
    }

    #[inline]
    fn exit_node_mut(&mut self, _node: &mut Node) -> VisitResult {
        ControlFlow::Continue(())
    }

    #[inline]
    fn visit_node_mut(&mut self, node: &mut Node) -> VisitResult {
        walk_children_mut(self, node)
    }
}

/// Walks a node: `enter_node_mut`, `visit_node_mut`, then `exit_node_mut`.
pub fn walk_node_mut<V>(visitor: &mut V, node: &mut Node) -> VisitResult
where
    V: MutVisitor,
{
    visitor.enter_node_mut(node)?;
    visitor.visit_node_mut(node)?;
    visitor.exit_node_mut(node)
}

/// Walks all children of a node mutably.
pub fn walk_children_mut<V>(visitor: &mut V, node: &mut Node) -> VisitResult
where
    V: MutVisitor,
{
    for (_, value) in node.fields_mut() {
        walk_value_mut(visitor, value)?;
    }
    ControlFlow::Continue(())
}

fn walk_value_mut<V>(visitor: &mut V, value: &mut Value) -> VisitResult
where
    V: MutVisitor,
{
    match value {
        Value::Node(child) => walk_node_mut(visitor, child),
        Value::List(items) => {
            for item in items {
                if let Value::Node(child) = item {
                    walk_node_mut(visitor, child)?;
                }
            }
            ControlFlow::Continue(())
        }
        _ => ControlFlow::Continue(()),
    }
}
