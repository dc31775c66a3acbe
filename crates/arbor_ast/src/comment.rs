//! Comment records attached to nodes.

use serde::{Deserialize, Serialize};

use crate::{Location, Span};

/// Whether a comment was written as `// line` or `/* block */`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    #[serde(rename = "CommentLine")]
    Line,
    #[serde(rename = "CommentBlock")]
    Block,
}

/// A source comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Comment {
    /// Creates a `//` comment with no position.
    pub fn line(value: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Line,
            value: value.into(),
            span: None,
            loc: None,
        }
    }

    /// Creates a `/* */` comment with no position.
    pub fn block(value: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Block,
            value: value.into(),
            span: None,
            loc: None,
        }
    }
}

/// Which of a node's three comment lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPlacement {
    Leading,
    Trailing,
    Inner,
}

impl CommentPlacement {
    pub const ALL: [CommentPlacement; 3] = [
        CommentPlacement::Leading,
        CommentPlacement::Trailing,
        CommentPlacement::Inner,
    ];

    /// Property name of the list in serialized output.
    pub const fn key(&self) -> &'static str {
        match self {
            CommentPlacement::Leading => "leadingComments",
            CommentPlacement::Trailing => "trailingComments",
            CommentPlacement::Inner => "innerComments",
        }
    }
}
