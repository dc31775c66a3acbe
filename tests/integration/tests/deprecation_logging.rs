//! Deprecated type names succeed and report through `tracing`.

use std::sync::{Arc, Mutex};

use arbor_core::{Types, Value};
use pretty_assertions::assert_eq;
use tracing_subscriber::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Deprecation {
    deprecated: String,
    replacement: String,
    message: String,
}

struct DeprecationRecorder(Arc<Mutex<Vec<Deprecation>>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for DeprecationRecorder {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if event.metadata().target() != "arbor_core::deprecation" {
            return;
        }
        let mut visitor = DeprecationVisitor(Deprecation::default());
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0);
    }
}

struct DeprecationVisitor(Deprecation);

impl tracing::field::Visit for DeprecationVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "deprecated" => self.0.deprecated = value.to_string(),
            "replacement" => self.0.replacement = value.to_string(),
            "message" => self.0.message = value.to_string(),
            _ => {}
        }
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Deprecation>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(DeprecationRecorder(events.clone()));
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

#[test]
fn building_a_deprecated_type_warns_and_builds_the_replacement() {
    let t = Types::default();
    let (node, events) = capture(|| t.build("NumberLiteral", [1]).unwrap());

    assert_eq!(node.node_type, "NumericLiteral");
    assert_eq!(
        events,
        [Deprecation {
            deprecated: "NumberLiteral".to_string(),
            replacement: "NumericLiteral".to_string(),
            message: "The node type NumberLiteral has been renamed to NumericLiteral".to_string(),
        }]
    );
}

#[test]
fn predicates_with_deprecated_names_warn() {
    let t = Types::default();
    let pattern = t.build("RegExpLiteral", ["a+"]).unwrap();

    let (matched, events) = capture(|| t.is("RegexLiteral", &pattern, &[]).unwrap());
    assert!(matched);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].replacement, "RegExpLiteral");

    let (result, events) =
        capture(|| t.assert_is("RegexLiteral", &pattern, &[("flags", &Value::from(""))]));
    assert!(result.is_ok());
    assert_eq!(events.len(), 1);
}

#[test]
fn current_names_do_not_warn() {
    let t = Types::default();
    let (_, events) = capture(|| {
        let id = t.build("Identifier", ["x"]).unwrap();
        t.is("Expression", &id, &[]).unwrap()
    });
    assert!(events.is_empty());
}
