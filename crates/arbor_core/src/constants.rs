//! Shared constant tables.

/// Serialized names of the three comment lists.
pub const COMMENT_KEYS: [&str; 3] = ["leadingComments", "trailingComments", "innerComments"];

pub const LOGICAL_OPERATORS: &[&str] = &["||", "&&", "??"];
pub const UPDATE_OPERATORS: &[&str] = &["++", "--"];

pub const BOOLEAN_NUMBER_BINARY_OPERATORS: &[&str] = &[">", "<", ">=", "<="];
pub const EQUALITY_BINARY_OPERATORS: &[&str] = &["==", "===", "!=", "!=="];
pub const COMPARISON_BINARY_OPERATORS: &[&str] = &[
    "==", "===", "!=", "!==", "in", "instanceof", ">", "<", ">=", "<=",
];
pub const BOOLEAN_BINARY_OPERATORS: &[&str] = COMPARISON_BINARY_OPERATORS;
pub const NUMBER_BINARY_OPERATORS: &[&str] =
    &["-", "/", "%", "*", "**", "&", "|", ">>", ">>>", "<<", "^"];
pub const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "/", "%", "*", "**", "&", "|", ">>", ">>>", "<<", "^", "==", "===", "!=", "!==",
    "in", "instanceof", ">", "<", ">=", "<=",
];

pub const BOOLEAN_UNARY_OPERATORS: &[&str] = &["delete", "!"];
pub const NUMBER_UNARY_OPERATORS: &[&str] = &["+", "-", "~"];
pub const STRING_UNARY_OPERATORS: &[&str] = &["typeof"];
pub const UNARY_OPERATORS: &[&str] = &["void", "throw", "delete", "!", "+", "-", "~", "typeof"];

/// Fields that hold either a single statement or a block.
pub const STATEMENT_OR_BLOCK_KEYS: [&str; 3] = ["consequent", "body", "alternate"];
/// Fields whose lists may absorb a nested list of the same kind.
pub const FLATTENABLE_KEYS: [&str; 2] = ["body", "expressions"];
/// Loop heads that may hold a declaration.
pub const FOR_INIT_KEYS: [&str; 2] = ["left", "init"];

/// Fields [`crate::inherits`] copies from parent to child.
#[derive(Debug, Clone, Copy)]
pub struct InheritKeys {
    /// Copied only when the child's field is unset.
    pub optional: &'static [&'static str],
    /// Always copied. These name the position slots.
    pub force: &'static [&'static str],
}

pub const INHERIT_KEYS: InheritKeys = InheritKeys {
    optional: &["typeAnnotation", "typeParameters", "returnType"],
    force: &["start", "loc", "end"],
};

/// Private side-table key marking a `var` declaration as block scoped.
pub const BLOCK_SCOPED_MARKER: &str = "blockScoped";
