//! In-place restructuring and metadata stripping.

use arbor_ast::visitor::traverse_fast_mut_with;
use arbor_ast::{Node, Value, inherits_comments, remove_comments};

use crate::{INHERIT_KEYS, Types};

/// Metadata slots cleared by [`remove_properties`], named as they
/// serialize.
const CLEAR_KEYS: [&str; 6] = ["tokens", "start", "end", "loc", "raw", "rawValue"];

/// Nests the current access of `member` one level deeper and makes
/// `append` the new outermost property: `a.b` becomes `a.b.append`.
pub fn append_to_member_expression(member: &mut Node, append: Node, computed: bool) {
    let object = member.set("object", Value::Null).unwrap_or(Value::Null);
    let property = member.set("property", append).unwrap_or(Value::Null);
    let inner = member_expression(object, property, member.flag("computed"));

    member.set("object", inner);
    member.set("computed", computed);
}

/// Makes `prepend` the new base object of `member`: `a.b` becomes
/// `prepend.a.b`. The new inner access is never computed.
pub fn prepend_to_member_expression(member: &mut Node, prepend: Node) {
    let object = member.set("object", Value::Null).unwrap_or(Value::Null);
    member.set("object", member_expression(prepend.into(), object, false));
}

fn member_expression(object: Value, property: Value, computed: bool) -> Node {
    Node::new("MemberExpression")
        .with("object", object)
        .with("property", property)
        .with("computed", computed)
}

/// Carries contextual properties from `parent` over to `child`, the node
/// replacing it.
///
/// Type annotations are copied only where the child has none. Positions
/// and the private side table are always copied, then comments are
/// merged.
pub fn inherits(child: Option<&mut Node>, parent: Option<&Node>) {
    let (Some(child), Some(parent)) = (child, parent) else {
        return;
    };

    for key in INHERIT_KEYS.optional {
        if child.is_unset(key)
            && let Some(value) = parent.get(key)
        {
            child.set(*key, value.clone());
        }
    }

    for (key, value) in &parent.private {
        child.private.insert(key.clone(), value.clone());
    }

    for key in INHERIT_KEYS.force {
        match *key {
            "start" | "end" => child.span = parent.span,
            "loc" => child.loc = parent.loc,
            other => match parent.get(other) {
                Some(value) => {
                    child.set(other, value.clone());
                }
                None => {
                    child.remove(other);
                }
            },
        }
    }

    inherits_comments(Some(child), Some(parent));
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemovePropertiesOptions {
    /// Keep the comment lists.
    pub preserve_comments: bool,
}

/// Strips positions, tokens, raw text, comments and private bookkeeping
/// from `node`. Children are untouched.
pub fn remove_properties(node: &mut Node, options: RemovePropertiesOptions) {
    for key in CLEAR_KEYS {
        match key {
            "start" | "end" => node.span = None,
            "loc" => node.loc = None,
            "raw" | "rawValue" => node.raw = None,
            other => {
                node.remove(other);
            }
        }
    }

    if !options.preserve_comments {
        remove_comments(node);
        node.remove("comments");
    }

    node.private.clear();
}

impl Types<'_> {
    /// Applies [`remove_properties`] to `tree` and every descendant
    /// reachable through visitor keys.
    pub fn remove_properties_deep(&self, tree: &mut Node, options: RemovePropertiesOptions) {
        traverse_fast_mut_with(tree, self.registry(), |node| remove_properties(node, options));
    }
}
