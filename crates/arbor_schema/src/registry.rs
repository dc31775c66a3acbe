//! The node type registry.
//!
//! A [`Registry`] is assembled once through a [`RegistryBuilder`] (or
//! loaded from a definitions document) and is immutable afterwards. The
//! flipped alias index is computed when the registry is built.

use arbor_ast::visitor::ChildKeys;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::{FieldSpec, NodeTypeDef, SchemaError};

/// Node type definitions, the flipped alias index and deprecated names.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, NodeTypeDef>,
    aliases: IndexMap<String, IndexSet<String>>,
    deprecated: IndexMap<String, String>,
}

impl Registry {
    /// Starts assembling a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the number of concrete node types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the concrete node types in definition order.
    pub fn types(&self) -> impl Iterator<Item = &NodeTypeDef> {
        self.types.values()
    }

    /// Returns true if `name` is a concrete node type (not deprecated).
    pub fn is_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns true if `name` is an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Returns the canonical replacement if `name` is deprecated.
    pub fn replacement_for(&self, name: &str) -> Option<&str> {
        self.deprecated.get(name).map(String::as_str)
    }

    /// Maps a deprecated name onto its replacement; other names are
    /// returned unchanged.
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.replacement_for(name).unwrap_or(name)
    }

    /// Iterates over `(deprecated, replacement)` pairs.
    pub fn deprecations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.deprecated.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up a concrete type without resolving deprecated names.
    pub fn get(&self, name: &str) -> Option<&NodeTypeDef> {
        self.types.get(name)
    }

    /// Looks up a concrete type, resolving deprecated names.
    pub fn type_def(&self, name: &str) -> Result<&NodeTypeDef, SchemaError> {
        self.types
            .get(self.canonical_name(name))
            .ok_or_else(|| SchemaError::unknown_type(name))
    }

    pub fn fields_of(&self, name: &str) -> Result<&IndexMap<String, FieldSpec>, SchemaError> {
        Ok(&self.type_def(name)?.fields)
    }

    pub fn builder_order_of(&self, name: &str) -> Result<&[String], SchemaError> {
        Ok(&self.type_def(name)?.builder)
    }

    pub fn visitor_keys_of(&self, name: &str) -> Result<&[String], SchemaError> {
        Ok(&self.type_def(name)?.visitor)
    }

    pub fn aliases_of(&self, name: &str) -> Result<&[String], SchemaError> {
        Ok(&self.type_def(name)?.aliases)
    }

    /// Returns a field definition, or `None` if the type or field is unknown.
    pub fn field(&self, type_name: &str, key: &str) -> Option<&FieldSpec> {
        self.type_def(type_name).ok()?.get_field(key)
    }

    /// Returns the concrete types belonging to an alias.
    pub fn resolve_alias_members(&self, alias: &str) -> Result<&IndexSet<String>, SchemaError> {
        self.aliases
            .get(alias)
            .ok_or_else(|| SchemaError::unknown_type(alias))
    }

    /// Returns true if a node tagged `node_type` satisfies `target`, a
    /// concrete type, alias or deprecated name.
    ///
    /// Deprecated names on either side are mapped to their replacement
    /// before comparing.
    pub fn matches(&self, node_type: &str, target: &str) -> Result<bool, SchemaError> {
        let node_type = self.canonical_name(node_type);
        let target = self.canonical_name(target);

        if self.types.contains_key(target) {
            Ok(node_type == target)
        } else if let Some(members) = self.aliases.get(target) {
            Ok(members.contains(node_type))
        } else {
            Err(SchemaError::unknown_type(target))
        }
    }

    /// Like [`Registry::matches`], treating an unknown target as no match.
    pub fn is_type_of(&self, node_type: &str, target: &str) -> bool {
        self.matches(node_type, target).unwrap_or(false)
    }

    /// Every concrete type, alias and deprecated name, in that order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types
            .keys()
            .chain(self.aliases.keys())
            .chain(self.deprecated.keys())
            .map(String::as_str)
    }
}

/// Registered types descend through their visitor keys. Unknown types
/// fall back to every field.
impl ChildKeys for Registry {
    fn child_keys(&self, node_type: &str) -> Option<&[String]> {
        self.visitor_keys_of(node_type).ok()
    }
}

/// Collects definitions and checks them for consistency.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: IndexMap<String, NodeTypeDef>,
    deprecated: IndexMap<String, String>,
}

impl RegistryBuilder {
    /// Registers a node type. Each name may be defined only once.
    pub fn define_type(&mut self, def: NodeTypeDef) -> Result<&mut Self, SchemaError> {
        if self.types.contains_key(&def.name) {
            return Err(SchemaError::invalid_definition(&def.name, "type is defined more than once"));
        }
        self.types.insert(def.name.clone(), def);
        Ok(self)
    }

    /// Registers `old` as a deprecated name for the type `new`.
    pub fn deprecate(&mut self, old: impl Into<String>, new: impl Into<String>) -> &mut Self {
        self.deprecated.insert(old.into(), new.into());
        self
    }

    /// Checks every definition and freezes the registry.
    pub fn build(self) -> Result<Registry, SchemaError> {
        let mut aliases: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for def in self.types.values() {
            for alias in &def.aliases {
                aliases
                    .entry(alias.clone())
                    .or_default()
                    .insert(def.name.clone());
            }
        }

        let registry = Registry {
            types: self.types,
            aliases,
            deprecated: self.deprecated,
        };
        registry.check()?;

        debug!(
            types = registry.types.len(),
            aliases = registry.aliases.len(),
            deprecated = registry.deprecated.len(),
            "Node type registry built"
        );

        Ok(registry)
    }
}

impl Registry {
    fn check(&self) -> Result<(), SchemaError> {
        for alias in self.aliases.keys() {
            if self.types.contains_key(alias) {
                return Err(SchemaError::invalid_definition(
                    alias,
                    "name is used both as a type and as an alias",
                ));
            }
        }

        for (old, new) in &self.deprecated {
            if self.types.contains_key(old) || self.aliases.contains_key(old) {
                return Err(SchemaError::invalid_definition(
                    old,
                    "deprecated name is still defined",
                ));
            }
            if !self.types.contains_key(new) {
                return Err(SchemaError::invalid_definition(
                    old,
                    format!("deprecated name points at unknown type {new}"),
                ));
            }
        }

        for def in self.types.values() {
            for key in def.builder.iter().chain(&def.visitor) {
                if !def.fields.contains_key(key) {
                    return Err(SchemaError::invalid_definition(
                        &def.name,
                        format!("{key} is listed as builder or visitor key but is not a field"),
                    ));
                }
            }

            for field in def.fields.values() {
                let Some(validator) = &field.validate else {
                    continue;
                };
                let mut references = Vec::new();
                validator.type_references(&mut references);
                if let Some(unknown) = references.into_iter().find(|name| {
                    !self.types.contains_key(*name)
                        && !self.aliases.contains_key(*name)
                        && !self.deprecated.contains_key(*name)
                }) {
                    return Err(SchemaError::invalid_definition(
                        &def.name,
                        format!("field {} refers to unknown type {unknown}", field.name),
                    ));
                }
            }
        }

        Ok(())
    }
}
