//! Identifier name validation and sanitization.

/// Words that can never be used as an identifier in strict-mode ES2015+.
pub const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield", "await",
];

/// Additional words reserved only by ES3.
pub const RESERVED_WORDS_ES3_ONLY: &[&str] = &[
    "abstract", "boolean", "byte", "char", "double", "final", "float", "goto", "int", "long",
    "native", "short", "synchronized", "throws", "transient", "volatile",
];

/// Returns true if `name` is a syntactically valid, non-reserved identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    !RESERVED_WORDS.contains(&name) && is_identifier_name(name)
}

/// Returns true if `name` is lexically an identifier name. Reserved words
/// pass, since they are legal as property names.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_identifier_part)
}

/// Like [`is_valid_identifier`], but also rejects ES3-only reserved words.
pub fn is_valid_es3_identifier(name: &str) -> bool {
    is_valid_identifier(name) && !RESERVED_WORDS_ES3_ONLY.contains(&name)
}

fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}

/// Turns an arbitrary string into a valid identifier.
///
/// Characters outside `[A-Za-z0-9$_]` become separators, leading
/// separators and digits are dropped, the character following a run of
/// separators is upper-cased, and the result is prefixed with `_` when it
/// still is not a valid identifier (for example a reserved word).
///
/// ```rust
/// use arbor_ast::to_identifier;
///
/// assert_eq!(to_identifier("foo-bar"), "fooBar");
/// assert_eq!(to_identifier("123abc"), "abc");
/// assert_eq!(to_identifier("class"), "_class");
/// assert_eq!(to_identifier(""), "_");
/// ```
pub fn to_identifier(name: &str) -> String {
    let dashed: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '$' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = dashed.trim_start_matches(|c: char| c == '-' || c.is_ascii_digit());

    let mut camel = String::with_capacity(trimmed.len());
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '-' || c.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    if !is_valid_identifier(&camel) {
        camel.insert(0, '_');
    }

    camel
}

/// Like [`to_identifier`], but also escapes `eval` and `arguments`, which
/// cannot be bound in strict mode.
pub fn to_binding_identifier_name(name: &str) -> String {
    let name = to_identifier(name);
    if name == "eval" || name == "arguments" {
        format!("_{name}")
    } else {
        name
    }
}
