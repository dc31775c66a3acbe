//! JSX helpers.

use arbor_ast::{Node, Value};

use crate::{AstError, Types, matches_pattern};

/// Returns true if `tag_name` names an intrinsic element such as `div`
/// rather than a component.
pub fn is_compat_tag(tag_name: Option<&str>) -> bool {
    tag_name.is_some_and(|name| name.starts_with(|c: char| c.is_ascii_lowercase()))
}

/// Returns true if `member` is `React.Component`.
pub fn is_react_component(member: Option<&Node>) -> bool {
    matches_pattern(member, "React.Component", false)
}

impl Types<'_> {
    /// Collects the children of a JSX element as call arguments.
    ///
    /// Text is collapsed the way JSX renders it and becomes a string
    /// literal, expression containers are unwrapped and empty expressions
    /// are dropped.
    pub fn build_children(&self, element: &Node) -> Result<Vec<Node>, AstError> {
        let mut elements = Vec::new();

        for child in element
            .get_list("children")
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_node)
        {
            if self.is_a(child, "JSXText") {
                let text = clean_jsx_text(child.get_str("value").unwrap_or_default());
                if !text.is_empty() {
                    elements.push(self.build("StringLiteral", [text])?);
                }
                continue;
            }

            let child = if self.is_a(child, "JSXExpressionContainer") {
                match child.get_node("expression") {
                    Some(expression) => expression,
                    None => continue,
                }
            } else {
                child
            };

            if self.is_a(child, "JSXEmptyExpression") {
                continue;
            }
            elements.push(child.clone());
        }

        Ok(elements)
    }
}

/// Collapses JSX text: tabs count as spaces, whitespace touching a line
/// break is dropped and the remaining lines are joined with one space.
fn clean_jsx_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let last_non_empty = lines
        .iter()
        .rposition(|line| line.chars().any(|c| c != ' ' && c != '\t'))
        .unwrap_or(0);

    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        let spaced = line.replace('\t', " ");
        let mut trimmed = spaced.as_str();
        if index != 0 {
            trimmed = trimmed.trim_start_matches(' ');
        }
        if index != lines.len() - 1 {
            trimmed = trimmed.trim_end_matches(' ');
        }

        if !trimmed.is_empty() {
            out.push_str(trimmed);
            if index != last_non_empty {
                out.push(' ');
            }
        }
    }
    out
}
