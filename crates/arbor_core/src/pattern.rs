//! Matching member expression chains against dotted paths.

use arbor_ast::Node;

/// The parts of a dotted path such as `React.createClass`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParts(Vec<String>);

impl PatternParts {
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Returns true if `member` is a member expression chain spelling out
    /// these parts, base object first.
    ///
    /// With `allow_partial` the chain may continue past the last part, so
    /// `a.b` matches `a.b.c`.
    pub fn matches(&self, member: Option<&Node>, allow_partial: bool) -> bool {
        let Some(member) = member.filter(|node| node.is_type("MemberExpression")) else {
            return false;
        };

        let mut nodes: Vec<Option<&Node>> = Vec::new();
        let mut current = member;
        loop {
            nodes.push(current.get_node("property"));
            match current.get_node("object") {
                Some(object) if object.is_type("MemberExpression") => current = object,
                base => {
                    nodes.push(base);
                    break;
                }
            }
        }

        if nodes.len() < self.0.len() || (!allow_partial && nodes.len() > self.0.len()) {
            return false;
        }

        self.0
            .iter()
            .zip(nodes.iter().rev())
            .all(|(part, node)| node.and_then(segment_name) == Some(part.as_str()))
    }
}

/// The name a chain segment spells: an identifier's name or a string
/// literal's value.
fn segment_name(node: &Node) -> Option<&str> {
    match node.node_type.as_str() {
        "Identifier" => node.get_str("name"),
        "StringLiteral" => node.get_str("value"),
        _ => None,
    }
}

impl From<&str> for PatternParts {
    fn from(pattern: &str) -> Self {
        Self(pattern.split('.').map(str::to_string).collect())
    }
}

impl From<&[&str]> for PatternParts {
    fn from(parts: &[&str]) -> Self {
        Self(parts.iter().map(|part| part.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PatternParts {
    fn from(parts: [&str; N]) -> Self {
        Self::from(&parts[..])
    }
}

impl From<Vec<String>> for PatternParts {
    fn from(parts: Vec<String>) -> Self {
        Self(parts)
    }
}

impl From<&[String]> for PatternParts {
    fn from(parts: &[String]) -> Self {
        Self(parts.to_vec())
    }
}

/// Returns true if `member` spells out `pattern`, a dotted path or a list
/// of parts. Computed string accesses count, so `React["createClass"]`
/// matches `React.createClass`.
pub fn matches_pattern(
    member: Option<&Node>,
    pattern: impl Into<PatternParts>,
    allow_partial: bool,
) -> bool {
    pattern.into().matches(member, allow_partial)
}

/// Returns a reusable matcher for `pattern`.
///
/// ```rust
/// use arbor_core::{Types, build_match_member_expression};
///
/// let t = Types::default();
/// let member = t.build(
///     "MemberExpression",
///     [t.build("Identifier", ["React"])?, t.build("Identifier", ["createClass"])?],
/// )?;
///
/// let is_create_class = build_match_member_expression("React.createClass", false);
/// assert!(is_create_class(Some(&member)));
/// # Ok::<(), arbor_core::AstError>(())
/// ```
pub fn build_match_member_expression(
    pattern: &str,
    allow_partial: bool,
) -> impl Fn(Option<&Node>) -> bool + use<> {
    let parts = PatternParts::from(pattern);
    move |member: Option<&Node>| parts.matches(member, allow_partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Types;
    use arbor_ast::Value;
    use rstest::rstest;

    fn t() -> Types<'static> {
        Types::default()
    }

    fn ident(name: &str) -> Node {
        t().build("Identifier", [name]).unwrap()
    }

    fn chain(parts: &[&str]) -> Node {
        let mut node = ident(parts[0]);
        for part in &parts[1..] {
            node = t().build("MemberExpression", [node, ident(part)]).unwrap();
        }
        node
    }

    #[rstest]
    #[case::exact("a.b.c", false, true)]
    #[case::too_short("a.b", false, false)]
    #[case::partial("a.b", true, true)]
    #[case::too_long("a.b.c.d", true, false)]
    #[case::wrong_base("x.b.c", false, false)]
    #[case::wrong_tail("a.b.x", false, false)]
    fn test_matches_pattern(#[case] pattern: &str, #[case] allow_partial: bool, #[case] expected: bool) {
        let member = chain(&["a", "b", "c"]);
        assert_eq!(matches_pattern(Some(&member), pattern, allow_partial), expected);
    }

    #[test]
    fn test_string_literal_property() {
        let member = t()
            .build(
                "MemberExpression",
                [
                    Value::from(ident("React")),
                    t().build("StringLiteral", ["createClass"]).unwrap().into(),
                    true.into(),
                ],
            )
            .unwrap();
        assert!(matches_pattern(Some(&member), ["React", "createClass"], false));
    }

    #[test]
    fn test_non_member_never_matches() {
        assert!(!matches_pattern(Some(&ident("a")), "a", false));
        assert!(!matches_pattern(None, "a", true));
    }

    #[test]
    fn test_computed_non_literal_segment_fails() {
        let member = t()
            .build("MemberExpression", [Value::from(ident("a")), chain(&["b", "c"]).into(), true.into()])
            .unwrap();
        assert!(!matches_pattern(Some(&member), "a.b", false));
    }

    #[test]
    fn test_build_match_member_expression() {
        let matcher = build_match_member_expression("a.b", true);
        assert!(matcher(Some(&chain(&["a", "b", "c"]))));
        assert!(!matcher(Some(&chain(&["b", "a"]))));
    }

    #[test]
    fn test_pattern_parts_conversions() {
        let expected = PatternParts(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(PatternParts::from("a.b"), expected);
        assert_eq!(PatternParts::from(["a", "b"]), expected);
        assert_eq!(PatternParts::from(vec!["a".to_string(), "b".to_string()]), expected);
        assert_eq!(expected.parts(), ["a", "b"]);
    }
}
