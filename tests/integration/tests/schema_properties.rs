//! Properties that hold for every type in the built-in definitions.

use arbor_core::arbor_schema::Validator;
use arbor_core::{AstError, Node, Types, Value, ValueKind, is_binding};
use pretty_assertions::assert_eq;

const MAX_DEPTH: usize = 8;

/// Builds a node of `type_name` from generated arguments that satisfy its
/// validators. Fields with a default or marked optional are left to the
/// builder.
fn sample(t: &Types<'_>, type_name: &str, depth: usize) -> Option<Node> {
    if depth > MAX_DEPTH {
        return None;
    }
    let def = t.registry().type_def(type_name).ok()?;

    let mut args = Vec::with_capacity(def.builder.len());
    for key in &def.builder {
        let field = def.get_field(key)?;
        if field.optional || field.default.is_some() {
            args.push(None);
            continue;
        }
        let value = match &field.validate {
            Some(validator) => sample_value(t, validator, depth + 1)?,
            None => Value::Null,
        };
        args.push(Some(value));
    }

    t.build_partial(type_name, args).ok()
}

fn sample_kind(kind: ValueKind) -> Option<Value> {
    match kind {
        ValueKind::Null => Some(Value::Null),
        ValueKind::Boolean => Some(Value::Bool(false)),
        ValueKind::Number => Some(Value::Number(0.0)),
        ValueKind::String => Some(Value::from("x")),
        ValueKind::Array => Some(Value::List(vec![])),
        ValueKind::Node => None,
    }
}

fn sample_node(t: &Types<'_>, targets: &[String], depth: usize) -> Option<Value> {
    let registry = t.registry();
    targets.iter().find_map(|target| {
        let target = registry.canonical_name(target);
        if registry.is_type(target) {
            sample(t, target, depth).map(Value::from)
        } else {
            registry
                .resolve_alias_members(target)
                .ok()?
                .iter()
                .find_map(|member| sample(t, member, depth))
                .map(Value::from)
        }
    })
}

fn sample_value(t: &Types<'_>, validator: &Validator, depth: usize) -> Option<Value> {
    match validator {
        Validator::ValueType(kind) => sample_kind(*kind),
        Validator::NodeType(targets) => sample_node(t, targets, depth),
        Validator::NodeOrValueType(targets) => targets
            .iter()
            .find_map(|target| ValueKind::from_name(target).and_then(sample_kind))
            .or_else(|| sample_node(t, targets, depth)),
        Validator::OneOf(values) => values.first().map(|v| Value::from(v.as_str())),
        Validator::Each(_) => Some(Value::List(vec![])),
        Validator::Chain(validators) => validators
            .first()
            .and_then(|first| sample_value(t, first, depth)),
        Validator::Identifier => Some(Value::from("x")),
    }
}

fn all_samples(t: &Types<'_>) -> Vec<Node> {
    t.registry()
        .types()
        .map(|def| {
            sample(t, &def.name, 0)
                .unwrap_or_else(|| panic!("could not build a sample {}", def.name))
        })
        .collect()
}

#[test]
fn every_built_node_is_its_type_and_aliases() {
    let t = Types::default();
    for node in all_samples(&t) {
        assert!(t.is(&node.node_type, &node, &[]).unwrap(), "{}", node.node_type);
        for alias in t.registry().aliases_of(&node.node_type).unwrap() {
            assert!(t.is(alias, &node, &[]).unwrap(), "{} is {alias}", node.node_type);
        }
        assert!(t.is_node(Some(&node)));
    }
}

#[test]
fn deprecated_names_match_their_replacements() {
    let t = Types::default();
    let renamed: Vec<(String, String)> = t
        .registry()
        .deprecations()
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .collect();
    assert!(!renamed.is_empty());

    for (old, new) in renamed {
        let node = sample(&t, &new, 0).unwrap();
        assert!(t.is(&old, &node, &[]).unwrap(), "{new} is {old}");
    }
}

#[test]
fn too_many_builder_arguments_always_fail() {
    let t = Types::default();
    for def in t.registry().types() {
        let args = vec![Value::Null; def.builder.len() + 1];
        match t.build(&def.name, args) {
            Err(AstError::BuilderArity { received, max, .. }) => {
                assert_eq!(received, def.builder.len() + 1);
                assert_eq!(max, def.builder.len());
            }
            other => panic!("{}: unexpected result {other:?}", def.name),
        }
    }
}

#[test]
fn deep_clones_are_equivalent() {
    let t = Types::default();
    for node in all_samples(&t) {
        let copy = node.deep_clone();
        assert!(t.is_nodes_equivalent(&node, &copy), "{}", node.node_type);
        assert!(t.is_nodes_equivalent(&copy, &node), "{}", node.node_type);
    }
}

#[test]
fn every_sample_validates() {
    let t = Types::default();
    for node in all_samples(&t) {
        assert!(t.validate_node(&node).is_ok(), "{}", node.node_type);
    }
}

#[test]
fn binding_keys_name_declared_fields() {
    let t = Types::default();
    for def in t.registry().types() {
        for key in arbor_core::binding_keys(&def.name) {
            assert!(
                def.get_field(key).is_some(),
                "{} has no field {key}",
                def.name
            );
        }
    }
    let decl = t
        .build(
            "VariableDeclarator",
            [t.build("Identifier", ["x"]).unwrap()],
        )
        .unwrap();
    assert!(is_binding(decl.get_node("id").unwrap(), &decl));
}
