//! # arbor_ast
//!
//! Syntax tree data model for Arbor.
//!
//! This crate provides the node representation shared by every Arbor crate:
//! dynamically typed [`Node`]s whose fields are described by a schema held
//! elsewhere (see `arbor_schema`), plus the schema-independent operations on
//! them.
//!
//! ## Architecture
//!
//! - A [`Node`] owns its children through [`Value`], so trees are acyclic
//! - Positions, raw token text and comments live in dedicated slots, never
//!   in the field map
//! - Implementation bookkeeping lives in the explicit [`Node::private`]
//!   side table and is dropped by every clone
//!
//! ## Example
//!
//! ```rust
//! use arbor_ast::{Comment, CommentPlacement, Node, add_comments};
//!
//! let mut stmt = Node::new("ExpressionStatement")
//!     .with("expression", Node::new("Identifier").with("name", "x"));
//! add_comments(&mut stmt, CommentPlacement::Leading, [Comment::line(" note")]);
//!
//! let copy = stmt.deep_clone();
//! assert_eq!(copy, stmt);
//! ```

mod clone;
mod comment;
mod comments;
mod identifier;
mod node;
mod span;
mod value;
pub mod visitor;

pub use clone::{clone, clone_deep, clone_without_loc};
pub use comment::{Comment, CommentKind, CommentPlacement};
pub use comments::{
    add_comment, add_comments, inherit_comments, inherit_inner_comments,
    inherit_leading_comments, inherit_trailing_comments, inherits_comments, remove_comments,
};
pub use identifier::{
    RESERVED_WORDS, RESERVED_WORDS_ES3_ONLY, is_identifier_name, is_valid_es3_identifier,
    is_valid_identifier, to_binding_identifier_name, to_identifier,
};
pub use node::{Node, Raw};
pub use span::{Location, Position, Span};
pub use value::{Value, ValueKind};

// Re-export commonly used visitor items for convenience
pub use visitor::{MutVisitor, VisitResult, Visitor};
