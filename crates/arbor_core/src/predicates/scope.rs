//! Declaration-kind and scope predicates.

use arbor_ast::{Node, Value};

use crate::{BLOCK_SCOPED_MARKER, Types};

fn marked_block_scoped(node: &Node) -> bool {
    matches!(node.private.get(BLOCK_SCOPED_MARKER), Some(Value::Bool(true)))
}

impl Types<'_> {
    /// Returns true for `let` and `const` declarations, and for `var`
    /// declarations marked block scoped.
    pub fn is_let(&self, node: &Node) -> bool {
        self.is_a(node, "VariableDeclaration")
            && (node.get_str("kind") != Some("var") || marked_block_scoped(node))
    }

    pub fn is_block_scoped(&self, node: &Node) -> bool {
        self.is_a(node, "FunctionDeclaration")
            || self.is_a(node, "ClassDeclaration")
            || self.is_let(node)
    }

    /// Returns true for `var` declarations not marked block scoped.
    pub fn is_var(&self, node: &Node) -> bool {
        self.is_a(node, "VariableDeclaration")
            && node.get_str("kind") == Some("var")
            && !marked_block_scoped(node)
    }

    /// Returns true for `import x from`, `import { default as x }` and
    /// `export { x as default }` specifiers.
    pub fn is_specifier_default(&self, specifier: &Node) -> bool {
        if self.is_a(specifier, "ImportDefaultSpecifier") {
            return true;
        }
        let named = specifier
            .get_node("imported")
            .or_else(|| specifier.get_node("exported"));
        named.is_some_and(|id| self.is_a(id, "Identifier") && id.get_str("name") == Some("default"))
    }

    /// Returns true if `node` introduces a scope. A block that is the body
    /// of a function or catch clause does not; the parent owns that scope.
    pub fn is_scope(&self, node: &Node, parent: Option<&Node>) -> bool {
        if self.is_a(node, "BlockStatement") {
            let owned_by = |target: &str| {
                parent.is_some_and(|parent| {
                    self.is_a(parent, target)
                        && parent
                            .get_node("body")
                            .is_some_and(|body| std::ptr::eq(body, node))
                })
            };
            if owned_by("Function") || owned_by("CatchClause") {
                return false;
            }
        }
        self.is_a(node, "Scopable")
    }

    /// Returns true if the node's value can never change: immutable
    /// literals and the identifier `undefined`.
    pub fn is_immutable(&self, node: &Node) -> bool {
        if self.is_a(node, "Immutable") {
            return true;
        }
        self.is_a(node, "Identifier") && node.get_str("name") == Some("undefined")
    }
}
