//! Walk functions for tree traversal.
//!
//! These provide the default traversal logic for [`Visitor`] and the
//! closure-based [`traverse_fast`] helpers.

use std::ops::ControlFlow;

use crate::{Node, Value};

use super::visit::{VisitResult, Visitor};
use super::visit_mut::{MutVisitor, walk_node_mut};

/// Walks a node: `enter_node`, `visit_node`, then `exit_node`.
pub fn walk_node<'a, V>(visitor: &mut V, node: &'a Node) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;
    visitor.visit_node(node)?;
    visitor.exit_node(node)
}

/// Walks all children of a node, including nodes held in lists.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &'a Node) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children() {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

struct FastVisitor<F>(F);

impl<'a, F> Visitor<'a> for FastVisitor<F>
where
    F: FnMut(&'a Node),
{
    #[inline]
    fn enter_node(&mut self, node: &'a Node) -> VisitResult {
        (self.0)(node);
        ControlFlow::Continue(())
    }
}

impl<F> MutVisitor for FastVisitor<F>
where
    F: FnMut(&mut Node),
{
    #[inline]
    fn enter_node_mut(&mut self, node: &mut Node) -> VisitResult {
        (self.0)(node);
        ControlFlow::Continue(())
    }
}

/// Calls `f` on `node` and every descendant, in pre-order.
pub fn traverse_fast<'a, F>(node: &'a Node, f: F)
where
    F: FnMut(&'a Node),
{
    let _ = walk_node(&mut FastVisitor(f), node);
}

/// Calls `f` on `node` and every descendant, in pre-order, with mutable
/// access. Children are read after `f` returns for their parent.
pub fn traverse_fast_mut<F>(node: &mut Node, f: F)
where
    F: FnMut(&mut Node),
{
    let _ = walk_node_mut(&mut FastVisitor(f), node);
}

/// Names the fields of a node type that hold its children.
pub trait ChildKeys {
    /// Returns the child fields of `node_type` in visiting order, or
    /// `None` to visit every field.
    fn child_keys(&self, node_type: &str) -> Option<&[String]>;
}

/// Like [`traverse_fast`], but descends only through the fields `keys`
/// names for each node type.
pub fn traverse_fast_with<'a, K, F>(node: &'a Node, keys: &K, mut f: F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&'a Node),
{
    visit_keyed(node, keys, &mut f);
}

/// Like [`traverse_fast_mut`], but descends only through the fields
/// `keys` names for each node type.
pub fn traverse_fast_mut_with<K, F>(node: &mut Node, keys: &K, mut f: F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&mut Node),
{
    visit_keyed_mut(node, keys, &mut f);
}

fn visit_keyed<'a, K, F>(node: &'a Node, keys: &K, f: &mut F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&'a Node),
{
    f(node);
    match keys.child_keys(&node.node_type) {
        Some(fields) => {
            for key in fields {
                if let Some(value) = node.get(key) {
                    visit_value(value, keys, f);
                }
            }
        }
        None => {
            for (_, value) in node.fields() {
                visit_value(value, keys, f);
            }
        }
    }
}

fn visit_value<'a, K, F>(value: &'a Value, keys: &K, f: &mut F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&'a Node),
{
    match value {
        Value::Node(child) => visit_keyed(child, keys, f),
        Value::List(items) => {
            for item in items {
                if let Value::Node(child) = item {
                    visit_keyed(child, keys, f);
                }
            }
        }
        _ => {}
    }
}

fn visit_keyed_mut<K, F>(node: &mut Node, keys: &K, f: &mut F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&mut Node),
{
    f(node);
    match keys.child_keys(&node.node_type) {
        Some(fields) => {
            for key in fields {
                if let Some(value) = node.get_mut(key) {
                    visit_value_mut(value, keys, f);
                }
            }
        }
        None => {
            for (_, value) in node.fields_mut() {
                visit_value_mut(value, keys, f);
            }
        }
    }
}

fn visit_value_mut<K, F>(value: &mut Value, keys: &K, f: &mut F)
where
    K: ChildKeys + ?Sized,
    F: FnMut(&mut Node),
{
    match value {
        Value::Node(child) => visit_keyed_mut(child, keys, f),
        Value::List(items) => {
            for item in items {
                if let Value::Node(child) = item {
                    visit_keyed_mut(child, keys, f);
                }
            }
        }
        _ => {}
    }
}
