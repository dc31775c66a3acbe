//! Declarative field validators.
//!
//! Validators are data, so definitions can be loaded from JSON. In a
//! definitions document they are written externally tagged:
//!
//! ```json
//! { "chain": [
//!     { "valueType": "array" },
//!     { "each": { "nodeOrValueType": ["null", "Expression", "SpreadElement"] } }
//! ] }
//! ```

use arbor_ast::{Node, Value, ValueKind, is_identifier_name};
use serde::{Deserialize, Serialize};

use crate::{Registry, ValidationError};

/// A constraint on the value of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validator {
    /// The value has the given runtime kind.
    ValueType(ValueKind),

    /// The value is a node matching one of the listed types or aliases.
    NodeType(Vec<String>),

    /// The value is of one of the listed kinds, or a node matching one of
    /// the listed types or aliases.
    NodeOrValueType(Vec<String>),

    /// The value is a string equal to one of the listed strings.
    OneOf(Vec<String>),

    /// Every element of a list satisfies the inner validator. Non-list
    /// values pass; combine with `ValueType(Array)` in a chain.
    Each(Box<Validator>),

    /// Every validator in order; the first failure is reported.
    Chain(Vec<Validator>),

    /// The value is a string that is lexically an identifier name.
    Identifier,
}

impl Validator {
    /// Checks `value` as the field `key` of `node`.
    pub fn check(
        &self,
        registry: &Registry,
        node: &Node,
        key: &str,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let fail = |expected: String, received: String| {
            Err(ValidationError::new(&node.node_type, key, expected, received))
        };

        match self {
            Validator::ValueType(kind) => {
                if value.kind() == *kind {
                    Ok(())
                } else {
                    fail(format!("type {kind}"), value.kind().to_string())
                }
            }
            Validator::NodeType(types) => {
                let matched = value
                    .as_node()
                    .is_some_and(|child| types.iter().any(|t| registry.is_type_of(&child.node_type, t)));
                if matched {
                    Ok(())
                } else {
                    fail(format!("node of type {}", types.join(" | ")), value.describe())
                }
            }
            Validator::NodeOrValueType(types) => {
                let matched = types.iter().any(|t| match ValueKind::from_name(t) {
                    Some(kind) => value.kind() == kind,
                    None => value
                        .as_node()
                        .is_some_and(|child| registry.is_type_of(&child.node_type, t)),
                });
                if matched {
                    Ok(())
                } else {
                    fail(format!("node or value of type {}", types.join(" | ")), value.describe())
                }
            }
            Validator::OneOf(values) => {
                if value.as_str().is_some_and(|s| values.iter().any(|v| v == s)) {
                    Ok(())
                } else {
                    fail(format!("one of {values:?}"), value.describe())
                }
            }
            Validator::Each(inner) => {
                let Some(items) = value.as_list() else {
                    return Ok(());
                };
                for (index, item) in items.iter().enumerate() {
                    inner.check(registry, node, &format!("{key}[{index}]"), item)?;
                }
                Ok(())
            }
            Validator::Chain(validators) => {
                for validator in validators {
                    validator.check(registry, node, key, value)?;
                }
                Ok(())
            }
            Validator::Identifier => {
                if value.as_str().is_some_and(is_identifier_name) {
                    Ok(())
                } else {
                    fail("a valid identifier name".to_string(), value.describe())
                }
            }
        }
    }

    /// Collects the node type names this validator refers to. Value kind
    /// names inside `NodeOrValueType` are skipped.
    pub(crate) fn type_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Validator::NodeType(types) => out.extend(types.iter().map(String::as_str)),
            Validator::NodeOrValueType(types) => out.extend(
                types
                    .iter()
                    .map(String::as_str)
                    .filter(|t| ValueKind::from_name(t).is_none()),
            ),
            Validator::Each(inner) => inner.type_references(out),
            Validator::Chain(validators) => {
                for validator in validators {
                    validator.type_references(out);
                }
            }
            Validator::ValueType(_) | Validator::OneOf(_) | Validator::Identifier => {}
        }
    }
}

/// Shorthand for `Chain([ValueType(Array), Each(inner)])`.
pub fn array_of(inner: Validator) -> Validator {
    Validator::Chain(vec![
        Validator::ValueType(ValueKind::Array),
        Validator::Each(Box::new(inner)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldSpec, NodeTypeDef};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> Registry {
        let mut builder = Registry::builder();
        builder
            .define_type(
                NodeTypeDef::new("Identifier")
                    .field(FieldSpec::new("name"))
                    .aliases(["Expression"]),
            )
            .unwrap()
            .define_type(NodeTypeDef::new("ThisExpression").aliases(["Expression"]))
            .unwrap()
            .define_type(NodeTypeDef::new("EmptyStatement").aliases(["Statement"]))
            .unwrap();
        builder.build().unwrap()
    }

    fn holder() -> Node {
        Node::new("Holder")
    }

    fn ident() -> Value {
        Node::new("Identifier").with("name", "a").into()
    }

    #[rstest]
    fn test_value_type(registry: Registry) {
        let validator = Validator::ValueType(ValueKind::String);
        assert!(validator.check(&registry, &holder(), "k", &Value::from("x")).is_ok());

        let err = validator
            .check(&registry, &holder(), "k", &Value::from(1))
            .unwrap_err();
        assert_eq!(err.to_string(), "Property k of Holder expected type string but got number");
    }

    #[rstest]
    #[case::concrete(vec!["Identifier"], ident(), true)]
    #[case::alias(vec!["Expression"], ident(), true)]
    #[case::wrong_alias(vec!["Statement"], ident(), false)]
    #[case::scalar(vec!["Expression"], Value::from("a"), false)]
    #[case::null(vec!["Expression"], Value::Null, false)]
    fn test_node_type(
        registry: Registry,
        #[case] types: Vec<&str>,
        #[case] value: Value,
        #[case] expected: bool,
    ) {
        let validator = Validator::NodeType(types.into_iter().map(String::from).collect());
        assert_eq!(validator.check(&registry, &holder(), "k", &value).is_ok(), expected);
    }

    #[rstest]
    #[case::null(Value::Null, true)]
    #[case::node(ident(), true)]
    #[case::statement(Node::new("EmptyStatement").into(), false)]
    #[case::string(Value::from("a"), false)]
    fn test_node_or_value_type(registry: Registry, #[case] value: Value, #[case] expected: bool) {
        let validator = Validator::NodeOrValueType(vec!["null".into(), "Expression".into()]);
        assert_eq!(validator.check(&registry, &holder(), "k", &value).is_ok(), expected);
    }

    #[rstest]
    fn test_one_of(registry: Registry) {
        let validator = Validator::OneOf(vec!["var".into(), "let".into()]);
        assert!(validator.check(&registry, &holder(), "kind", &Value::from("let")).is_ok());

        let err = validator
            .check(&registry, &holder(), "kind", &Value::from("const"))
            .unwrap_err();
        assert_eq!(err.expected, r#"one of ["var", "let"]"#);
        assert_eq!(err.received, r#""const""#);
    }

    #[rstest]
    fn test_each_reports_element_index(registry: Registry) {
        let validator = array_of(Validator::NodeType(vec!["Expression".into()]));
        let value = Value::List(vec![ident(), Node::new("EmptyStatement").into()]);

        let err = validator.check(&registry, &holder(), "items", &value).unwrap_err();
        assert_eq!(err.key, "items[1]");
        assert_eq!(err.received, r#"node of type "EmptyStatement""#);
    }

    #[rstest]
    fn test_chain_rejects_non_list(registry: Registry) {
        let validator = array_of(Validator::NodeType(vec!["Expression".into()]));
        let err = validator
            .check(&registry, &holder(), "items", &Value::from("x"))
            .unwrap_err();
        assert_eq!(err.expected, "type array");
    }

    #[rstest]
    #[case::plain("foo", true)]
    #[case::keyword("class", true)]
    #[case::dash("a-b", false)]
    fn test_identifier(registry: Registry, #[case] name: &str, #[case] expected: bool) {
        let result = Validator::Identifier.check(&registry, &holder(), "name", &Value::from(name));
        assert_eq!(result.is_ok(), expected);
    }

    #[test]
    fn test_deserialize_externally_tagged() {
        let validator: Validator = serde_json::from_str(
            r#"{ "chain": [{ "valueType": "array" }, { "each": { "nodeType": ["Statement"] } }] }"#,
        )
        .unwrap();
        assert_eq!(validator, array_of(Validator::NodeType(vec!["Statement".into()])));

        let identifier: Validator = serde_json::from_str(r#""identifier""#).unwrap();
        assert_eq!(identifier, Validator::Identifier);
    }

    #[test]
    fn test_type_references_skip_value_kinds() {
        let validator = Validator::Chain(vec![
            Validator::NodeOrValueType(vec!["null".into(), "Expression".into()]),
            Validator::Each(Box::new(Validator::NodeType(vec!["Pattern".into()]))),
        ]);
        let mut refs = Vec::new();
        validator.type_references(&mut refs);
        assert_eq!(refs, ["Expression", "Pattern"]);
    }
}
