//! Flow type annotation helpers.

use std::collections::VecDeque;

use arbor_ast::{Node, Value};
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{AstError, Types};

impl Types<'_> {
    /// Builds a union of `types` after removing duplicates. A single
    /// remaining type is returned as is.
    pub fn create_union_type_annotation(&self, types: Vec<Node>) -> Result<Node, AstError> {
        let mut flattened = self.remove_type_duplicates(types);
        if flattened.len() == 1
            && let Some(only) = flattened.pop()
        {
            return Ok(only);
        }
        self.build("UnionTypeAnnotation", [flattened])
    }

    /// Flattens nested unions and drops repeated types.
    ///
    /// `any` absorbs everything. Base annotations such as `string` are
    /// kept once per kind, and generic annotations once per name with
    /// their type parameters merged. Other types come first, then base
    /// annotations, then generics.
    pub fn remove_type_duplicates(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut generics: IndexMap<String, Node> = IndexMap::new();
        let mut bases: IndexMap<String, Node> = IndexMap::new();
        let mut types: Vec<Node> = Vec::new();
        let mut queue: VecDeque<Node> = nodes.into();

        while let Some(node) = queue.pop_front() {
            if types.contains(&node) {
                continue;
            }

            if self.is_a(&node, "AnyTypeAnnotation") {
                return vec![node];
            }

            if self.is_a(&node, "FlowBaseAnnotation") {
                bases.insert(node.node_type.clone(), node);
                continue;
            }

            if self.is_a(&node, "UnionTypeAnnotation") {
                queue.extend(child_nodes(&node, "types"));
                continue;
            }

            if self.is_a(&node, "GenericTypeAnnotation")
                && let Some(name) = generic_name(&node)
            {
                match generics.entry(name) {
                    Entry::Vacant(entry) => {
                        entry.insert(node);
                    }
                    Entry::Occupied(mut entry) => self.merge_type_parameters(entry.get_mut(), &node),
                }
                continue;
            }

            types.push(node);
        }

        types.extend(bases.into_values());
        types.extend(generics.into_values());
        types
    }

    /// Maps a `typeof` result onto the matching annotation.
    pub fn create_type_annotation_based_on_typeof(&self, type_of: &str) -> Result<Node, AstError> {
        let generic = |name: &str| -> Result<Node, AstError> {
            let id = self.build("Identifier", [name])?;
            self.build("GenericTypeAnnotation", [id])
        };

        match type_of {
            "string" => self.build("StringTypeAnnotation", Vec::<Value>::new()),
            "number" => self.build("NumberTypeAnnotation", Vec::<Value>::new()),
            "undefined" => self.build("VoidTypeAnnotation", Vec::<Value>::new()),
            "boolean" => self.build("BooleanTypeAnnotation", Vec::<Value>::new()),
            "function" => generic("Function"),
            "object" => generic("Object"),
            "symbol" => generic("Symbol"),
            other => Err(AstError::conversion(format!("Invalid typeof value {other}"))),
        }
    }

    /// Merges the type parameters of a repeated generic into the first
    /// occurrence. A first occurrence without parameters is left alone.
    fn merge_type_parameters(&self, existing: &mut Node, repeated: &Node) {
        let Some(incoming) = repeated.get_node("typeParameters") else {
            return;
        };
        let Some(existing) = existing.get_node_mut("typeParameters") else {
            return;
        };

        let mut params = child_nodes(existing, "params");
        params.extend(child_nodes(incoming, "params"));
        let merged = self.remove_type_duplicates(params);
        existing.set("params", merged);
    }
}

fn generic_name(node: &Node) -> Option<String> {
    node.get_node("id")
        .and_then(|id| id.get_str("name"))
        .map(str::to_string)
}

fn child_nodes(node: &Node, key: &str) -> Vec<Node> {
    node.get_list(key)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_node)
        .cloned()
        .collect()
}
