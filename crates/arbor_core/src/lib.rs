//! # arbor_core
//!
//! Schema-driven operations on Arbor syntax trees.
//!
//! Everything that needs to know which node types exist goes through
//! [`Types`], a handle on one [`Registry`]:
//!
//! - **Builders**: [`Types::build`] assigns positional arguments in the
//!   type's builder order, fills defaults and validates every field
//! - **Predicates**: [`Types::is`] checks concrete types, aliases and
//!   partial shapes
//! - **Validation**: [`Types::validate`] checks one field value
//! - **Conversions**: statements, expressions, blocks and literal nodes
//! - **Equivalence**: [`Types::is_nodes_equivalent`]
//! - **Flow and JSX**: union annotations, `typeof` annotations and JSX
//!   children, plus the tag checks in [`react`]
//!
//! Operations that only look at tree shape are free functions:
//! member-expression surgery, [`inherits`], [`remove_properties`] and
//! [`matches_pattern`].
//!
//! ## Example
//!
//! ```rust
//! use arbor_core::{Types, Value};
//!
//! let t = Types::default();
//! let sum = t.build(
//!     "BinaryExpression",
//!     [Value::from("+"), t.build("Identifier", ["a"])?.into(), t.build("NumericLiteral", [1])?.into()],
//! )?;
//!
//! assert!(t.is("Binary", &sum, &[])?);
//! assert!(t.is("Expression", &sum, &[("operator", &Value::from("+"))])?);
//! # Ok::<(), arbor_core::AstError>(())
//! ```

mod builder;
mod constants;
mod converters;
mod equivalence;
mod error;
mod flow;
mod host_value;
mod key_alias;
mod modifications;
mod pattern;
mod predicates;
pub mod react;
mod retrievers;
mod types;
mod validate;

pub use arbor_ast;
pub use arbor_schema;

pub use arbor_ast::{
    Comment, CommentKind, CommentPlacement, Location, Node, Position, Raw, Span, Value, ValueKind,
    add_comment, add_comments, clone, clone_deep, clone_without_loc, inherit_comments,
    inherit_inner_comments, inherit_leading_comments, inherit_trailing_comments,
    inherits_comments, is_valid_es3_identifier, is_valid_identifier, remove_comments,
    to_binding_identifier_name, to_identifier,
};
pub use arbor_schema::{Registry, SchemaError, ValidationError, builtin};

pub use constants::{
    BINARY_OPERATORS, BLOCK_SCOPED_MARKER, BOOLEAN_BINARY_OPERATORS,
    BOOLEAN_NUMBER_BINARY_OPERATORS, BOOLEAN_UNARY_OPERATORS, COMMENT_KEYS,
    COMPARISON_BINARY_OPERATORS, EQUALITY_BINARY_OPERATORS, FLATTENABLE_KEYS, FOR_INIT_KEYS,
    INHERIT_KEYS, InheritKeys, LOGICAL_OPERATORS, NUMBER_BINARY_OPERATORS,
    NUMBER_UNARY_OPERATORS, STATEMENT_OR_BLOCK_KEYS, STRING_UNARY_OPERATORS, UNARY_OPERATORS,
    UPDATE_OPERATORS,
};
pub use converters::{HoistedDeclaration, Scope};
pub use error::AstError;
pub use host_value::HostValue;
pub use key_alias::KeyAliasCounter;
pub use modifications::{
    RemovePropertiesOptions, append_to_member_expression, inherits, prepend_to_member_expression,
    remove_properties,
};
pub use pattern::{PatternParts, build_match_member_expression, matches_pattern};
pub use predicates::{Shape, is_binding, is_referenced, shallow_equal};
pub use retrievers::binding_keys;
pub use types::Types;
