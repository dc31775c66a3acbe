//! Visitor trait for read-only traversal.

use std::ops::ControlFlow;

use crate::Node;

use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing nodes without modification.
///
/// The `'a` lifetime lets implementors keep references into the visited
/// tree. Return `ControlFlow::Break(())` from any hook to stop the walk;
/// the `?` operator propagates it.
pub trait Visitor<'a>: Sized {
    /// Called before a node's children are visited.
    #[inline]
    fn enter_node(&mut self, _node: &'a Node) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all its children were visited.
    #[inline]
    fn exit_node(&mut self, _node: &'a Node) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits the children of a node.
    ///
    /// Override this to prune subtrees: returning `Continue` without
    /// calling [`walk_children`] skips them.
    #[inline]
    fn visit_node(&mut self, node: &'a Node) -> VisitResult {
        walk_children(self, node)
    }
}
