//! Lookup keys for object and class members.

use arbor_ast::Node;

use crate::{AstError, RemovePropertiesOptions, Types};

/// Source of the unique aliases given to methods.
///
/// Values count up from zero. After [`KeyAliasCounter::MAX`] the counter
/// wraps to zero, so aliases repeat once that many have been handed out;
/// callers relying on uniqueness accept that collision.
#[derive(Debug, Clone, Default)]
pub struct KeyAliasCounter {
    uid: u64,
}

impl KeyAliasCounter {
    /// The largest integer a double represents exactly.
    pub const MAX: u64 = 9_007_199_254_740_991;

    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `uid`.
    pub fn starting_at(uid: u64) -> Self {
        Self { uid }
    }

    /// Returns the next value.
    pub fn increment(&mut self) -> u64 {
        if self.uid >= Self::MAX {
            self.uid = 0;
            0
        } else {
            let current = self.uid;
            self.uid += 1;
            current
        }
    }
}

impl Types<'_> {
    /// Returns a string identifying the member `node` by its key.
    ///
    /// Methods always get a fresh number from `counter`. Otherwise the key
    /// renders as an identifier name, a quoted string, or the JSON of the
    /// key with positions and comments stripped. Computed keys are wrapped
    /// in brackets and static members are prefixed with `static:`.
    ///
    /// `key` defaults to the node's `key` field.
    pub fn to_key_alias(
        &self,
        node: &Node,
        key: Option<&Node>,
        counter: &mut KeyAliasCounter,
    ) -> Result<String, AstError> {
        if node.get_str("kind") == Some("method") {
            return Ok(counter.increment().to_string());
        }

        let key = key.or_else(|| node.get_node("key")).ok_or_else(|| {
            AstError::conversion(format!("{} has no key to alias", node.node_type))
        })?;

        let mut alias = match (self.is_a(key, "Identifier"), self.is_a(key, "StringLiteral")) {
            (true, _) => key.get_str("name").unwrap_or_default().to_string(),
            (_, true) => json(&key.get_str("value").unwrap_or_default())?,
            _ => {
                let mut stripped = key.deep_clone();
                self.remove_properties_deep(&mut stripped, RemovePropertiesOptions::default());
                json(&stripped)?
            }
        };

        if node.flag("computed") {
            alias = format!("[{alias}]");
        }
        if node.flag("static") {
            alias = format!("static:{alias}");
        }
        Ok(alias)
    }
}

fn json(value: &impl serde::Serialize) -> Result<String, AstError> {
    serde_json::to_string(value).map_err(|e| AstError::conversion(e.to_string()))
}
