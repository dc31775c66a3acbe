//! The [`Types`] facade.

use arbor_ast::Node;
use arbor_schema::Registry;
use tracing::warn;

/// Tree operations bound to one node type registry.
///
/// `Types` is a cheap, copyable handle: every schema-aware operation
/// (builders, predicates, validation, conversions) is a method on it.
///
/// # Example
///
/// ```rust
/// use arbor_core::{Types, Value};
///
/// let t = Types::default();
/// let id = t.build("Identifier", ["foo"]).unwrap();
///
/// assert!(t.is("Expression", &id, &[]).unwrap());
/// assert!(t.is("Identifier", &id, &[("name", &Value::from("foo"))]).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Types<'r> {
    registry: &'r Registry,
}

impl<'r> Types<'r> {
    /// Creates a facade over `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Every concrete type, alias and deprecated name.
    pub fn type_names(&self) -> Vec<&'r str> {
        self.registry.type_names().collect()
    }

    /// Maps a deprecated type name onto its replacement, logging a warning.
    pub(crate) fn resolve_name<'a>(&self, name: &'a str) -> &'a str
    where
        'r: 'a,
    {
        match self.registry.replacement_for(name) {
            Some(replacement) => {
                warn!(
                    target: "arbor_core::deprecation",
                    deprecated = name,
                    replacement,
                    "The node type {name} has been renamed to {replacement}"
                );
                replacement
            }
            None => name,
        }
    }

    /// Silent, infallible type check for internal use. Unknown targets
    /// never match.
    #[inline]
    pub(crate) fn is_a(&self, node: &Node, target: &str) -> bool {
        self.registry.is_type_of(&node.node_type, target)
    }

    pub(crate) fn is_a_opt(&self, node: Option<&Node>, target: &str) -> bool {
        node.is_some_and(|node| self.is_a(node, target))
    }
}

impl Default for Types<'static> {
    /// Uses the built-in ECMAScript definitions.
    fn default() -> Self {
        Self::new(arbor_schema::builtin())
    }
}
