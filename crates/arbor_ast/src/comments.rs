//! Attaching, merging and removing comments on nodes.
//!
//! Every function here tolerates an absent node and does nothing in that
//! case, so callers can pass the result of an optional lookup directly.

use crate::{Comment, CommentPlacement, Node};

/// Attaches `comments` to one of the node's comment lists.
///
/// Leading comments are prepended: a comment attached later sorts before
/// the ones already present. Trailing and inner comments are appended.
pub fn add_comments<'n>(
    node: impl Into<Option<&'n mut Node>>,
    placement: CommentPlacement,
    comments: impl IntoIterator<Item = Comment>,
) {
    let Some(node) = node.into() else {
        return;
    };

    let list = node.comments_mut(placement);
    match placement {
        CommentPlacement::Leading => {
            let existing = std::mem::take(list);
            list.extend(comments);
            list.extend(existing);
        }
        CommentPlacement::Trailing | CommentPlacement::Inner => list.extend(comments),
    }
}

/// Attaches a single comment built from `content`.
pub fn add_comment<'n>(
    node: impl Into<Option<&'n mut Node>>,
    placement: CommentPlacement,
    content: impl Into<String>,
    line: bool,
) {
    let comment = if line {
        Comment::line(content)
    } else {
        Comment::block(content)
    };
    add_comments(node, placement, [comment]);
}

/// Clears all three comment lists.
pub fn remove_comments(node: &mut Node) {
    for placement in CommentPlacement::ALL {
        node.comments_mut(placement).clear();
    }
}

/// Merges `parent`'s comments for one placement into `child`.
///
/// The merged list keeps the first occurrence of each distinct comment,
/// child's entries first.
pub fn inherit_comments(placement: CommentPlacement, child: Option<&mut Node>, parent: Option<&Node>) {
    let (Some(child), Some(parent)) = (child, parent) else {
        return;
    };

    let mut merged: Vec<Comment> = Vec::with_capacity(
        child.comments(placement).len() + parent.comments(placement).len(),
    );
    let incoming = std::mem::take(child.comments_mut(placement));
    for comment in incoming.into_iter().chain(parent.comments(placement).iter().cloned()) {
        if !merged.contains(&comment) {
            merged.push(comment);
        }
    }
    *child.comments_mut(placement) = merged;
}

pub fn inherit_leading_comments(child: Option<&mut Node>, parent: Option<&Node>) {
    inherit_comments(CommentPlacement::Leading, child, parent);
}

pub fn inherit_trailing_comments(child: Option<&mut Node>, parent: Option<&Node>) {
    inherit_comments(CommentPlacement::Trailing, child, parent);
}

pub fn inherit_inner_comments(child: Option<&mut Node>, parent: Option<&Node>) {
    inherit_comments(CommentPlacement::Inner, child, parent);
}

/// Merges all three comment lists of `parent` into `child`.
pub fn inherits_comments(mut child: Option<&mut Node>, parent: Option<&Node>) {
    for placement in [
        CommentPlacement::Trailing,
        CommentPlacement::Leading,
        CommentPlacement::Inner,
    ] {
        inherit_comments(placement, child.as_deref_mut(), parent);
    }
}
