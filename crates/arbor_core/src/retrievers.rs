//! Binding identifier retrieval.

use std::collections::VecDeque;

use arbor_ast::{Node, Value};
use indexmap::IndexMap;

use crate::Types;

/// Fields of a node type that may hold declared bindings, directly or
/// through nested patterns.
pub fn binding_keys(node_type: &str) -> &'static [&'static str] {
    match node_type {
        "DeclareClass" | "DeclareFunction" | "DeclareModule" | "DeclareVariable" => &["id"],
        "DeclareInterface" | "DeclareTypeAlias" | "InterfaceDeclaration" | "TypeAlias" => &["id"],
        "CatchClause" => &["param"],
        "LabeledStatement" => &["label"],
        "UnaryExpression" | "UpdateExpression" | "RestElement" | "RestProperty" => &["argument"],
        "AssignmentExpression" | "AssignmentPattern" | "ForInStatement" | "ForOfStatement" => {
            &["left"]
        }
        "ImportSpecifier" | "ImportNamespaceSpecifier" | "ImportDefaultSpecifier" => &["local"],
        "ImportDeclaration" => &["specifiers"],
        "ExportSpecifier" | "ExportNamespaceSpecifier" | "ExportDefaultSpecifier" => &["exported"],
        "FunctionDeclaration" | "FunctionExpression" => &["id", "params"],
        "ArrowFunctionExpression" | "ObjectMethod" | "ClassMethod" => &["params"],
        "ClassDeclaration" | "ClassExpression" => &["id"],
        "ObjectProperty" => &["value"],
        "ArrayPattern" => &["elements"],
        "ObjectPattern" => &["properties"],
        "VariableDeclaration" => &["declarations"],
        "VariableDeclarator" => &["id"],
        _ => &[],
    }
}

impl Types<'_> {
    /// Collects every identifier `node` declares, keyed by name. When a
    /// name is declared twice the last declaration wins.
    pub fn get_binding_identifiers<'n>(&self, node: &'n Node) -> IndexMap<&'n str, &'n Node> {
        let mut ids = IndexMap::new();
        self.collect_bindings(node, false, |name, id| {
            ids.insert(name, id);
        });
        ids
    }

    /// Like [`Types::get_binding_identifiers`], keeping every declaration
    /// of a repeated name.
    pub fn get_all_binding_identifiers<'n>(
        &self,
        node: &'n Node,
    ) -> IndexMap<&'n str, Vec<&'n Node>> {
        let mut ids: IndexMap<&str, Vec<&Node>> = IndexMap::new();
        self.collect_bindings(node, false, |name, id| {
            ids.entry(name).or_default().push(id);
        });
        ids
    }

    /// Like [`Types::get_binding_identifiers`], but only the bindings
    /// visible in the enclosing scope: a function declaration contributes
    /// its name, not its parameters, and function expressions contribute
    /// nothing.
    pub fn get_outer_binding_identifiers<'n>(
        &self,
        node: &'n Node,
    ) -> IndexMap<&'n str, &'n Node> {
        let mut ids = IndexMap::new();
        self.collect_bindings(node, true, |name, id| {
            ids.insert(name, id);
        });
        ids
    }

    fn collect_bindings<'n>(
        &self,
        root: &'n Node,
        outer_only: bool,
        mut found: impl FnMut(&'n str, &'n Node),
    ) {
        let mut search: VecDeque<&'n Node> = VecDeque::from([root]);

        while let Some(id) = search.pop_front() {
            if self.is_a(id, "Identifier") {
                if let Some(name) = id.get_str("name") {
                    found(name, id);
                }
                continue;
            }

            if self.is_a(id, "ExportDeclaration") {
                if let Some(declaration) = id.get_node("declaration")
                    && self.is_a(declaration, "Declaration")
                {
                    search.push_back(declaration);
                }
                continue;
            }

            if outer_only {
                if self.is_a(id, "FunctionDeclaration") {
                    search.extend(id.get_node("id"));
                    continue;
                }
                if self.is_a(id, "FunctionExpression") {
                    continue;
                }
            }

            for key in binding_keys(&id.node_type) {
                match id.get(key) {
                    Some(Value::Node(child)) => search.push_back(child),
                    Some(Value::List(items)) => {
                        search.extend(items.iter().filter_map(Value::as_node));
                    }
                    _ => {}
                }
            }
        }
    }
}
