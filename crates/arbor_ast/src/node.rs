//! Node definition.
//!
//! A [`Node`] is one element of the syntax tree: a `type` tag that selects
//! its schema, an ordered map of schema fields, and a fixed set of
//! bookkeeping slots (positions, raw token text, comments and a private
//! side table) that never live in the field map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Comment, CommentPlacement, Location, Span, Value};

/// Raw source text of a literal token (the ESTree `extra` object).
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub raw: String,
    pub raw_value: Value,
}

/// A node in the syntax tree.
///
/// Nodes own their children through [`Value::Node`] and [`Value::List`],
/// so a tree can never contain itself.
///
/// # Example
///
/// ```rust
/// use arbor_ast::{Node, Value};
///
/// let mut member = Node::new("MemberExpression");
/// member.set("object", Node::new("Identifier").with("name", "React"));
/// member.set("property", Node::new("Identifier").with("name", "createClass"));
/// member.set("computed", false);
///
/// assert_eq!(member.get_node("object").and_then(|n| n.get_str("name")), Some("React"));
/// assert_eq!(member.get("computed"), Some(&Value::Bool(false)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Type tag naming the node's schema, e.g. `"Identifier"`.
    pub node_type: String,

    fields: IndexMap<String, Value>,

    /// Byte offsets in the source.
    pub span: Option<Span>,

    /// Line/column location in the source.
    pub loc: Option<Location>,

    /// Raw token text for literals.
    pub raw: Option<Raw>,

    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
    pub inner_comments: Vec<Comment>,

    /// Implementation-private bookkeeping. Never cloned, compared or
    /// serialized.
    pub private: IndexMap<String, Value>,
}

impl Node {
    /// Creates a node with the given type tag and no fields.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Sets a field and returns the node, for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    #[inline]
    pub fn is_type(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    /// Assigns a field, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Removes a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns true if the field is absent or explicitly null.
    pub fn is_unset(&self, key: &str) -> bool {
        self.get(key).is_none_or(Value::is_null)
    }

    pub fn get_node(&self, key: &str) -> Option<&Node> {
        self.get(key).and_then(Value::as_node)
    }

    pub fn get_node_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.get_mut(key).and_then(Value::as_node_mut)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_list(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_list)
    }

    /// Returns true only if the field holds `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }

    /// Iterates over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.fields.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over the direct child nodes, including nodes inside lists.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.fields.values().flat_map(|value| {
            let (single, list) = match value {
                Value::Node(node) => (Some(node.as_ref()), None),
                Value::List(items) => (None, Some(items.iter().filter_map(Value::as_node))),
                _ => (None, None),
            };
            single.into_iter().chain(list.into_iter().flatten())
        })
    }

    pub fn comments(&self, placement: CommentPlacement) -> &Vec<Comment> {
        match placement {
            CommentPlacement::Leading => &self.leading_comments,
            CommentPlacement::Trailing => &self.trailing_comments,
            CommentPlacement::Inner => &self.inner_comments,
        }
    }

    pub fn comments_mut(&mut self, placement: CommentPlacement) -> &mut Vec<Comment> {
        match placement {
            CommentPlacement::Leading => &mut self.leading_comments,
            CommentPlacement::Trailing => &mut self.trailing_comments,
            CommentPlacement::Inner => &mut self.inner_comments,
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.node_type)?;

        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }

        if let Some(span) = &self.span {
            map.serialize_entry("start", &span.start)?;
            map.serialize_entry("end", &span.end)?;
        }
        if let Some(loc) = &self.loc {
            map.serialize_entry("loc", loc)?;
        }
        if let Some(raw) = &self.raw {
            map.serialize_entry("extra", raw)?;
        }

        for placement in CommentPlacement::ALL {
            let comments = self.comments(placement);
            if !comments.is_empty() {
                map.serialize_entry(placement.key(), comments)?;
            }
        }

        map.end()
    }
}

impl Serialize for Raw {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Raw", 2)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("rawValue", &self.raw_value)?;
        state.end()
    }
}
