//! Visitor pattern for syntax tree traversal.
//!
//! - [`Visitor`] - read-only traversal
//! - [`MutVisitor`] - in-place transformation
//! - [`walk_node`] / [`walk_children`] - default traversal logic
//! - [`traverse_fast`] / [`traverse_fast_mut`] - closure-based pre-order walks
//! - [`traverse_fast_with`] / [`traverse_fast_mut_with`] - the same walks
//!   restricted to the child fields a [`ChildKeys`] names
//!
//! Children are discovered from the node's fields in insertion order;
//! nodes inside lists are visited in list order.
//!
//! # Examples
//!
//! ## Collecting identifier names
//!
//! ```rust
//! use arbor_ast::Node;
//! use arbor_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct NameCollector<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for NameCollector<'a> {
//!     fn enter_node(&mut self, node: &'a Node) -> VisitResult {
//!         if node.is_type("Identifier") {
//!             self.names.extend(node.get_str("name"));
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let call = Node::new("CallExpression")
//!     .with("callee", Node::new("Identifier").with("name", "f"))
//!     .with("arguments", vec![Node::new("Identifier").with("name", "x")]);
//!
//! let mut collector = NameCollector { names: Vec::new() };
//! let _ = walk_node(&mut collector, &call);
//! assert_eq!(collector.names, ["f", "x"]);
//! ```
//!
//! ## Early termination
//!
//! ```rust
//! use arbor_ast::Node;
//! use arbor_ast::visitor::{Visitor, VisitResult};
//! use std::ops::ControlFlow;
//!
//! struct ContainsThis(bool);
//!
//! impl<'a> Visitor<'a> for ContainsThis {
//!     fn enter_node(&mut self, node: &'a Node) -> VisitResult {
//!         if node.is_type("ThisExpression") {
//!             self.0 = true;
//!             return ControlFlow::Break(());
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//! ```

mod visit;
mod visit_mut;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use visit_mut::{MutVisitor, walk_children_mut, walk_node_mut};
pub use walk::{
    ChildKeys, traverse_fast, traverse_fast_mut, traverse_fast_mut_with, traverse_fast_with,
    walk_children, walk_node,
};
