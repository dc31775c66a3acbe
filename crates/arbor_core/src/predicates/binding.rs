//! Binding and reference position checks.
//!
//! Both predicates identify `node` among `parent`'s children by identity,
//! so `node` must be borrowed from `parent` itself.

use arbor_ast::{Node, Value};

use crate::binding_keys;

/// Returns true if `parent` holds `node` in `key`, either directly or as
/// a list element.
fn holds(parent: &Node, key: &str, node: &Node) -> bool {
    match parent.get(key) {
        Some(Value::Node(child)) => std::ptr::eq(child.as_ref(), node),
        Some(Value::List(items)) => items
            .iter()
            .filter_map(Value::as_node)
            .any(|child| std::ptr::eq(child, node)),
        _ => false,
    }
}

/// Returns true if `node` sits in a position of `parent` that declares a
/// binding.
pub fn is_binding(node: &Node, parent: &Node) -> bool {
    binding_keys(&parent.node_type)
        .iter()
        .any(|key| holds(parent, key, node))
}

/// Returns true if `node`, in its position under `parent`, reads a bound
/// variable rather than naming a property, label or declaration.
pub fn is_referenced(node: &Node, parent: &Node) -> bool {
    let at = |key: &str| holds(parent, key, node);

    match parent.node_type.as_str() {
        // object::NODE, NODE::callee
        "BindExpression" => at("object") || at("callee"),

        // PARENT[NODE] and NODE.child, but not parent.NODE
        "MemberExpression" | "JSXMemberExpression" => {
            (at("property") && parent.flag("computed")) || at("object")
        }

        "MetaProperty" => false,

        // { [NODE]: "" } and { key: NODE }, but not { NODE: "" }
        "ObjectProperty" => !at("key") || parent.flag("computed"),

        "VariableDeclarator" => !at("id"),

        "ArrowFunctionExpression" | "FunctionDeclaration" | "FunctionExpression" => {
            !at("params") && !at("id")
        }

        // export { NODE as foo }, but not when re-exporting from a source
        "ExportSpecifier" => parent.is_unset("source") && at("local"),

        "ExportNamespaceSpecifier" | "ExportDefaultSpecifier" => false,

        "JSXAttribute" => !at("name"),

        "ClassProperty" => {
            if at("key") {
                parent.flag("computed")
            } else {
                at("value")
            }
        }

        "ImportDefaultSpecifier" | "ImportNamespaceSpecifier" | "ImportSpecifier" => false,

        "ClassDeclaration" | "ClassExpression" => !at("id"),

        // class { [NODE]() {} }
        "ClassMethod" | "ObjectMethod" => at("key") && parent.flag("computed"),

        "LabeledStatement" => false,

        "CatchClause" => !at("param"),

        "RestElement" => false,

        "AssignmentExpression" | "AssignmentPattern" => at("right"),

        "ObjectPattern" | "ArrayPattern" => false,

        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Types;

    fn t() -> Types<'static> {
        Types::default()
    }

    fn ident(name: &str) -> Node {
        t().build("Identifier", [name]).unwrap()
    }

    fn child<'a>(parent: &'a Node, key: &str) -> &'a Node {
        parent.get_node(key).unwrap()
    }

    #[test]
    fn test_member_expression_positions() {
        let member = t().build("MemberExpression", [ident("a"), ident("b")]).unwrap();
        assert!(is_referenced(child(&member, "object"), &member));
        assert!(!is_referenced(child(&member, "property"), &member));

        let computed = t()
            .build("MemberExpression", [Value::from(ident("a")), ident("b").into(), true.into()])
            .unwrap();
        assert!(is_referenced(child(&computed, "property"), &computed));
    }

    #[test]
    fn test_identity_not_equality() {
        let member = t().build("MemberExpression", [ident("a"), ident("b")]).unwrap();
        let lookalike = ident("a");
        assert!(!is_referenced(&lookalike, &member));
    }

    #[test]
    fn test_object_property_positions() {
        let prop = t().build("ObjectProperty", [ident("k"), ident("v")]).unwrap();
        assert!(!is_referenced(child(&prop, "key"), &prop));
        assert!(is_referenced(child(&prop, "value"), &prop));
    }

    #[test]
    fn test_declarator_positions() {
        let decl = t().build("VariableDeclarator", [ident("x"), ident("y")]).unwrap();
        let id = child(&decl, "id");
        assert!(!is_referenced(id, &decl));
        assert!(is_referenced(child(&decl, "init"), &decl));
        assert!(is_binding(id, &decl));
        assert!(!is_binding(child(&decl, "init"), &decl));
    }

    #[test]
    fn test_function_params() {
        let body = t().build("BlockStatement", [Value::List(vec![])]).unwrap();
        let func = t()
            .build(
                "FunctionDeclaration",
                [ident("f").into(), Value::from(vec![ident("p")]), body.into()],
            )
            .unwrap();
        let param = func.get_list("params").unwrap()[0].as_node().unwrap();

        assert!(!is_referenced(param, &func));
        assert!(!is_referenced(child(&func, "id"), &func));
        assert!(is_binding(param, &func));
    }

    #[test]
    fn test_export_specifier() {
        let spec = t().build("ExportSpecifier", [ident("local"), ident("exported")]).unwrap();
        assert!(is_referenced(child(&spec, "local"), &spec));
        assert!(!is_referenced(child(&spec, "exported"), &spec));

        let mut from_source = spec.clone();
        from_source.set("source", t().build("StringLiteral", ["mod"]).unwrap());
        assert!(!is_referenced(child(&from_source, "local"), &from_source));
    }

    #[test]
    fn test_assignment_positions() {
        let assign = t().build("AssignmentExpression", ["=".into(), Value::from(ident("a")), ident("b").into()]).unwrap();
        assert!(!is_referenced(child(&assign, "left"), &assign));
        assert!(is_referenced(child(&assign, "right"), &assign));
        assert!(is_binding(child(&assign, "left"), &assign));
    }

    fn jsx_ident(name: &str) -> Node {
        t().build("JSXIdentifier", [name]).unwrap()
    }

    #[test]
    fn test_jsx_member_expression_positions() {
        let member = t()
            .build("JSXMemberExpression", [jsx_ident("Foo"), jsx_ident("Bar")])
            .unwrap();
        assert!(is_referenced(child(&member, "object"), &member));
        assert!(!is_referenced(child(&member, "property"), &member));
    }

    #[test]
    fn test_jsx_attribute_name_is_not_referenced() {
        let container = t().build("JSXExpressionContainer", [ident("handler")]).unwrap();
        let attribute = t()
            .build("JSXAttribute", [jsx_ident("onClick"), container])
            .unwrap();
        assert!(!is_referenced(child(&attribute, "name"), &attribute));
        assert!(is_referenced(child(&attribute, "value"), &attribute));
    }

    #[test]
    fn test_export_namespace_specifier_binds_exported() {
        let spec = t().build("ExportNamespaceSpecifier", [ident("ns")]).unwrap();
        assert!(!is_referenced(child(&spec, "exported"), &spec));
        assert!(is_binding(child(&spec, "exported"), &spec));
    }

    #[test]
    fn test_unlisted_parent_is_referenced() {
        let stmt = t().build("ExpressionStatement", [ident("x")]).unwrap();
        assert!(is_referenced(child(&stmt, "expression"), &stmt));
        assert!(!is_binding(child(&stmt, "expression"), &stmt));
    }
}
