//! Loading a custom definitions document and working with it.

use arbor_core::{AstError, Registry, SchemaError, Types, Value};
use pretty_assertions::assert_eq;

const DEFINITIONS: &str = r#"{
    "types": [
        {
            "name": "Word",
            "aliases": ["Inline"],
            "fields": { "text": { "validate": { "valueType": "string" } } },
            "builder": ["text"]
        },
        {
            "name": "Emphasis",
            "aliases": ["Inline"],
            "fields": {
                "children": {
                    "default": [],
                    "validate": { "chain": [{ "valueType": "array" }, { "each": { "nodeType": ["Inline"] } }] }
                },
                "strong": { "default": false, "validate": { "valueType": "boolean" } }
            },
            "builder": ["children", "strong"]
        }
    ],
    "deprecated": { "Strong": "Emphasis" }
}"#;

fn registry() -> Registry {
    Registry::from_json(DEFINITIONS).unwrap()
}

#[test]
fn builds_and_checks_custom_types() {
    let registry = registry();
    let t = Types::new(&registry);

    let word = t.build("Word", ["hello"]).unwrap();
    let emphasis = t
        .build("Emphasis", [Value::from(vec![word.clone()]), true.into()])
        .unwrap();

    assert!(t.is("Inline", &word, &[]).unwrap());
    assert!(t.is("Strong", &emphasis, &[("strong", &Value::Bool(true))]).unwrap());
    assert_eq!(t.type_names(), ["Word", "Emphasis", "Inline", "Strong"]);
}

#[test]
fn custom_validators_apply() {
    let registry = registry();
    let t = Types::new(&registry);

    let err = t
        .build("Emphasis", [Value::List(vec![Value::from("raw text")])])
        .unwrap_err();
    match err {
        AstError::Validation(e) => {
            assert_eq!(e.key, "children[0]");
            assert_eq!(e.expected, "node of type Inline");
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn builtin_types_are_unknown_to_a_custom_registry() {
    let registry = registry();
    let t = Types::new(&registry);

    let err = t.build("Identifier", ["x"]).unwrap_err();
    assert!(matches!(err, AstError::Schema(SchemaError::UnknownType(_))));
}

#[test]
fn malformed_documents_are_rejected() {
    let err = Registry::from_json(r#"{ "types": [{ "name": "X", "fields": { "a": { "validate": { "bogus": 1 } } } }] }"#)
        .unwrap_err();
    assert!(matches!(err, SchemaError::Config(_)), "{err}");
}
