//! Host values that [`Types::value_to_node`](crate::Types::value_to_node)
//! turns into literal nodes.

use indexmap::IndexMap;

/// A plain runtime value, as produced by evaluating constant code or by
/// reading JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    RegExp { pattern: String, flags: String },
    Array(Vec<HostValue>),
    /// A plain record. Keys keep insertion order.
    Object(IndexMap<String, HostValue>),
    /// Anything with no literal form, described for error messages.
    Opaque(String),
}

impl HostValue {
    pub fn regexp(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        HostValue::RegExp {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }
}

impl From<serde_json::Value> for HostValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => HostValue::Null,
            serde_json::Value::Bool(b) => HostValue::Bool(b),
            serde_json::Value::Number(n) => HostValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => HostValue::String(s),
            serde_json::Value::Array(items) => {
                HostValue::Array(items.into_iter().map(HostValue::from).collect())
            }
            serde_json::Value::Object(map) => HostValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, HostValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Number(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::String(value)
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(HostValue::Undefined, Into::into)
    }
}
