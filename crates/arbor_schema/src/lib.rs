//! # arbor_schema
//!
//! Node type registry for Arbor.
//!
//! This crate holds, per node type, its fields (default, optionality,
//! validator), its aliases, its positional builder order and the fields
//! holding child nodes, plus the table of deprecated type names. Every
//! other Arbor operation derives its behavior from a [`Registry`].
//!
//! Definitions are static configuration: they are either assembled with
//! [`RegistryBuilder`] or loaded from a JSON document checked against
//! `schemas/v1/definitions.json`. [`builtin`] returns the embedded
//! ECMAScript definitions.
//!
//! ## Example
//!
//! ```rust
//! let registry = arbor_schema::builtin();
//!
//! assert!(registry.matches("ForStatement", "Loop").unwrap());
//! assert_eq!(
//!     registry.builder_order_of("BinaryExpression").unwrap(),
//!     ["operator", "left", "right"]
//! );
//! ```

mod config;
mod definition;
mod error;
mod registry;
mod validator;

pub use config::{DefinitionsDocument, FieldDefinition, TypeDefinition, builtin};
pub use definition::{FieldSpec, NodeTypeDef};
pub use error::{SchemaError, ValidationError};
pub use registry::{Registry, RegistryBuilder};
pub use validator::{Validator, array_of};
