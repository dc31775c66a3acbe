//! Schema-driven node construction.

use std::collections::HashMap;

use arbor_ast::{Node, Value};

use crate::{AstError, Types};

impl Types<'_> {
    /// Builds a node of `type_name` from positional arguments.
    ///
    /// Arguments are assigned to fields in the type's builder order.
    /// Fields without an argument receive a fresh copy of their default,
    /// or stay absent. Every declared field is then validated.
    ///
    /// Deprecated type names build their replacement and log a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor_core::{Types, Value};
    ///
    /// let t = Types::default();
    /// let member = t
    ///     .build(
    ///         "MemberExpression",
    ///         [t.build("Identifier", ["a"])?, t.build("Identifier", ["b"])?],
    ///     )?;
    ///
    /// assert_eq!(member.get("computed"), Some(&Value::Bool(false)));
    /// # Ok::<(), arbor_core::AstError>(())
    /// ```
    pub fn build<I>(&self, type_name: &str, args: I) -> Result<Node, AstError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.build_partial(type_name, args.into_iter().map(|arg| Some(arg.into())))
    }

    /// Like [`Types::build`], where `None` skips a position so the field
    /// falls back to its default.
    pub fn build_partial<I>(&self, type_name: &str, args: I) -> Result<Node, AstError>
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        let name = self.resolve_name(type_name);
        let def = self.registry().type_def(name)?;

        let args: Vec<Option<Value>> = args.into_iter().collect();
        if args.len() > def.builder.len() {
            return Err(AstError::BuilderArity {
                node_type: type_name.to_string(),
                received: args.len(),
                max: def.builder.len(),
            });
        }

        let mut supplied: HashMap<&str, Value> = def
            .builder
            .iter()
            .map(String::as_str)
            .zip(args)
            .filter_map(|(key, arg)| arg.map(|arg| (key, arg)))
            .collect();

        let mut node = Node::new(&def.name);
        for (key, field) in &def.fields {
            if let Some(value) = supplied
                .remove(key.as_str())
                .or_else(|| field.fresh_default())
            {
                node.set(key, value);
            }
        }

        self.validate_node(&node)?;
        Ok(node)
    }
}
