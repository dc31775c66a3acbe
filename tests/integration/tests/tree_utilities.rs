//! Cloning, comments, conversions and matching across the public API.

use arbor_core::{
    Comment, CommentPlacement, HoistedDeclaration, HostValue, Node, Scope, Types, Value,
    add_comments, inherit_comments, matches_pattern, to_binding_identifier_name, to_identifier,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn t() -> Types<'static> {
    Types::default()
}

fn ident(t: &Types<'_>, name: &str) -> Node {
    t.build("Identifier", [name]).unwrap()
}

/// `React.createClass({ render: this.render })`
fn sample_tree(t: &Types<'_>) -> Node {
    let member = t
        .build("MemberExpression", [ident(t, "React"), ident(t, "createClass")])
        .unwrap();
    let this_render = t
        .build(
            "MemberExpression",
            [t.build("ThisExpression", Vec::<Value>::new()).unwrap(), ident(t, "render")],
        )
        .unwrap();
    let prop = t
        .build("ObjectProperty", [ident(t, "render"), this_render])
        .unwrap();
    let object = t.build("ObjectExpression", [vec![prop]]).unwrap();
    t.build("CallExpression", [Value::from(member), vec![object].into()])
        .unwrap()
}

#[derive(Default)]
struct TestScope {
    declarations: Vec<HoistedDeclaration>,
}

impl Scope for TestScope {
    fn build_undefined_node(&mut self) -> Node {
        Types::default().build("Identifier", ["undefined"]).unwrap()
    }

    fn push(&mut self, declaration: HoistedDeclaration) {
        self.declarations.push(declaration);
    }
}

#[rstest]
fn deep_clone_shares_nothing(t: Types<'static>) {
    let original = sample_tree(&t);
    let mut copy = original.deep_clone();
    assert!(t.is_nodes_equivalent(&original, &copy));

    copy.get_node_mut("callee")
        .and_then(|callee| callee.get_node_mut("object"))
        .unwrap()
        .set("name", "Preact");

    let callee = original.get_node("callee").unwrap();
    assert_eq!(callee.get_node("object").unwrap().get_str("name"), Some("React"));
    assert!(!t.is_nodes_equivalent(&original, &copy));
}

#[rstest]
fn shallow_clone_drops_private_fields(t: Types<'static>) {
    let mut node = sample_tree(&t);
    node.private.insert("paths".to_string(), Value::List(vec![]));

    let copy = node.shallow_clone();
    assert!(copy.private.is_empty());
    assert_eq!(copy.fields().collect::<Vec<_>>(), node.fields().collect::<Vec<_>>());
}

#[rstest]
#[case::dashed("foo-bar", "fooBar")]
#[case::leading_digits("123abc", "abc")]
#[case::empty("", "_")]
#[case::reserved("class", "_class")]
fn to_identifier_sanitizes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_identifier(input), expected);
}

#[test]
fn to_binding_identifier_name_escapes_eval() {
    assert_eq!(to_binding_identifier_name("eval"), "_eval");
}

#[rstest]
fn sequence_of_one_statement_is_its_expression(t: Types<'static>) {
    let x = ident(&t, "x");
    let stmt = t.build("ExpressionStatement", [x.clone()]).unwrap();
    let mut scope = TestScope::default();

    let result = t.to_sequence_expression(&[stmt], &mut scope).unwrap();
    assert_eq!(result, Some(x));
}

#[rstest]
fn sequence_of_expressions_keeps_order(t: Types<'static>) {
    let (a, b) = (ident(&t, "a"), ident(&t, "b"));
    let mut scope = TestScope::default();

    let result = t
        .to_sequence_expression(&[a.clone(), b.clone()], &mut scope)
        .unwrap()
        .unwrap();
    assert_eq!(result.node_type, "SequenceExpression");
    assert_eq!(result.get_list("expressions").unwrap(), [Value::from(a), Value::from(b)]);
    assert!(scope.declarations.is_empty());
}

#[rstest]
#[case::exact("React.createClass", false, true)]
#[case::prefix_only("React", false, false)]
#[case::prefix_partial("React", true, true)]
fn matches_react_create_class(
    t: Types<'static>,
    #[case] pattern: &str,
    #[case] allow_partial: bool,
    #[case] expected: bool,
) {
    let tree = sample_tree(&t);
    let callee = tree.get_node("callee");
    assert_eq!(matches_pattern(callee, pattern, allow_partial), expected);
}

#[rstest]
fn value_to_node_keys(t: Types<'static>) {
    let node = t
        .value_to_node(&HostValue::from(json!({"a": 1, "b-c": 2})))
        .unwrap();
    assert_eq!(node.node_type, "ObjectExpression");

    let keys: Vec<(String, String)> = node
        .get_list("properties")
        .unwrap()
        .iter()
        .filter_map(|prop| prop.as_node()?.get_node("key"))
        .map(|key| {
            let text = key.get_str("name").or(key.get_str("value")).unwrap_or_default();
            (key.node_type.clone(), text.to_string())
        })
        .collect();
    assert_eq!(
        keys,
        [
            ("Identifier".to_string(), "a".to_string()),
            ("StringLiteral".to_string(), "b-c".to_string()),
        ]
    );
}

#[rstest]
fn leading_comments_are_newest_first(t: Types<'static>) {
    let mut node = sample_tree(&t);
    add_comments(&mut node, CommentPlacement::Leading, [Comment::line("c1")]);
    add_comments(&mut node, CommentPlacement::Leading, [Comment::line("c2")]);
    assert_eq!(node.leading_comments, [Comment::line("c2"), Comment::line("c1")]);
}

#[rstest]
fn inherit_is_idempotent(t: Types<'static>) {
    let mut parent = sample_tree(&t);
    parent.trailing_comments.push(Comment::block(" shared "));
    let mut child = ident(&t, "x");

    for _ in 0..2 {
        inherit_comments(CommentPlacement::Trailing, Some(&mut child), Some(&parent));
    }
    assert_eq!(child.trailing_comments, [Comment::block(" shared ")]);
}

#[rstest]
fn equivalence_uses_first_nodes_fields(t: Types<'static>) {
    let a = ident(&t, "x");
    let mut b = ident(&t, "x");
    b.set("extraneous", true);

    assert!(t.is_nodes_equivalent(&a, &b));
    // Fields outside the schema are never compared.
    assert!(t.is_nodes_equivalent(&b, &a));

    let loose_a = Node::new("Unregistered").with("x", 1);
    let loose_b = Node::new("Unregistered").with("x", 1).with("y", 2);
    assert!(t.is_nodes_equivalent(&loose_a, &loose_b));
    assert!(!t.is_nodes_equivalent(&loose_b, &loose_a));
}
