//! Conversions between statement, expression and block shapes, and from
//! host values to literal nodes.

use arbor_ast::{Node, Value, is_valid_identifier};

use crate::{AstError, HostValue, Types};

/// A variable declaration hoisted out of converted code.
#[derive(Debug, Clone, PartialEq)]
pub struct HoistedDeclaration {
    /// Declaration keyword, always `var` for hoisted bindings.
    pub kind: String,
    pub id: Node,
}

/// The scope a conversion hoists declarations into.
pub trait Scope {
    /// Returns a fresh expression evaluating to `undefined`.
    fn build_undefined_node(&mut self) -> Node;

    /// Registers a declaration hoisted to the top of the scope.
    fn push(&mut self, declaration: HoistedDeclaration);
}

impl Types<'_> {
    /// Returns the key of a property or member as it compares at runtime:
    /// a non-computed identifier key becomes a string literal.
    ///
    /// `key` defaults to the node's `key` field, then its `property` field.
    pub fn to_computed_key(&self, node: &Node, key: Option<&Node>) -> Result<Option<Node>, AstError> {
        let Some(key) = key
            .or_else(|| node.get_node("key"))
            .or_else(|| node.get_node("property"))
        else {
            return Ok(None);
        };

        if !node.flag("computed")
            && self.is_a(key, "Identifier")
            && let Some(name) = key.get_str("name")
        {
            return self.build("StringLiteral", [name]).map(Some);
        }
        Ok(Some(key.clone()))
    }

    /// Folds a list of statements into one expression.
    ///
    /// `var` declarations become assignments and their bindings are pushed
    /// to `scope`. Returns `None`, pushing nothing, when `nodes` is empty
    /// or holds a statement with no expression form.
    pub fn to_sequence_expression(
        &self,
        nodes: &[Node],
        scope: &mut impl Scope,
    ) -> Result<Option<Node>, AstError> {
        if nodes.is_empty() {
            return Ok(None);
        }

        let nodes: Vec<&Node> = nodes.iter().collect();
        let mut declarations = Vec::new();
        let Some(result) = self.gather_sequence_expressions(&nodes, scope, &mut declarations)?
        else {
            return Ok(None);
        };

        for declaration in declarations {
            scope.push(declaration);
        }
        Ok(Some(result))
    }

    fn gather_sequence_expressions(
        &self,
        nodes: &[&Node],
        scope: &mut impl Scope,
        declarations: &mut Vec<HoistedDeclaration>,
    ) -> Result<Option<Node>, AstError> {
        let mut exprs: Vec<Node> = Vec::new();
        let mut ensure_last_undefined = true;

        for &node in nodes {
            ensure_last_undefined = false;

            if self.is_a(node, "Expression") {
                exprs.push(node.clone());
            } else if self.is_a(node, "ExpressionStatement") {
                let Some(expression) = node.get_node("expression") else {
                    return Ok(None);
                };
                exprs.push(expression.clone());
            } else if self.is_a(node, "VariableDeclaration") {
                let kind = node.get_str("kind").unwrap_or_default();
                if kind != "var" {
                    return Ok(None);
                }

                for declarator in node.get_list("declarations").unwrap_or_default() {
                    let Some(declarator) = declarator.as_node() else {
                        continue;
                    };
                    for id in self.get_binding_identifiers(declarator).into_values() {
                        declarations.push(HoistedDeclaration {
                            kind: kind.to_string(),
                            id: id.clone(),
                        });
                    }

                    if let (Some(id), Some(init)) =
                        (declarator.get_node("id"), declarator.get_node("init"))
                    {
                        exprs.push(self.build(
                            "AssignmentExpression",
                            [Value::from("="), id.clone().into(), init.clone().into()],
                        )?);
                    }
                }

                ensure_last_undefined = true;
            } else if self.is_a(node, "IfStatement") {
                let Some(consequent) =
                    self.gather_branch(node.get_node("consequent"), scope, declarations)?
                else {
                    return Ok(None);
                };
                let Some(alternate) =
                    self.gather_branch(node.get_node("alternate"), scope, declarations)?
                else {
                    return Ok(None);
                };
                let test = node.get("test").cloned().unwrap_or(Value::Null);

                exprs.push(self.build(
                    "ConditionalExpression",
                    [test, consequent.into(), alternate.into()],
                )?);
            } else if self.is_a(node, "BlockStatement") {
                let body: Vec<&Node> = node
                    .get_list("body")
                    .unwrap_or_default()
                    .iter()
                    .filter_map(Value::as_node)
                    .collect();
                let Some(body) = self.gather_sequence_expressions(&body, scope, declarations)?
                else {
                    return Ok(None);
                };
                exprs.push(body);
            } else if self.is_a(node, "EmptyStatement") {
                ensure_last_undefined = true;
            } else {
                return Ok(None);
            }
        }

        if ensure_last_undefined {
            exprs.push(scope.build_undefined_node());
        }

        if exprs.len() == 1 {
            Ok(exprs.pop())
        } else {
            self.build("SequenceExpression", [exprs]).map(Some)
        }
    }

    /// Converts one branch of an `if`, standing in `undefined` for a
    /// missing branch.
    fn gather_branch(
        &self,
        branch: Option<&Node>,
        scope: &mut impl Scope,
        declarations: &mut Vec<HoistedDeclaration>,
    ) -> Result<Option<Node>, AstError> {
        match branch {
            Some(branch) => self.gather_sequence_expressions(&[branch], scope, declarations),
            None => Ok(Some(scope.build_undefined_node())),
        }
    }

    /// Turns `node` into a statement.
    ///
    /// Statements pass through. Named class and function expressions become
    /// declarations, and assignments are wrapped in an expression statement.
    pub fn to_statement(&self, mut node: Node) -> Result<Node, AstError> {
        if self.is_a(&node, "Statement") {
            return Ok(node);
        }

        let declaration_type = if self.is_a(&node, "Class") {
            "ClassDeclaration"
        } else if self.is_a(&node, "Function") {
            "FunctionDeclaration"
        } else if self.is_a(&node, "AssignmentExpression") {
            return self.build("ExpressionStatement", [node]);
        } else {
            return Err(cannot_turn(&node, "a statement"));
        };

        if node.is_unset("id") {
            return Err(cannot_turn(&node, "a statement"));
        }
        node.node_type = declaration_type.to_string();
        Ok(node)
    }

    /// Like [`Types::to_statement`], returning `None` when the node has
    /// no statement form.
    pub fn try_to_statement(&self, node: Node) -> Option<Node> {
        self.to_statement(node).ok()
    }

    /// Turns `node` into an expression.
    ///
    /// Expression statements are unwrapped and expressions pass through
    /// unchanged, so arrow functions keep their concise bodies. Class and
    /// function declarations become expressions.
    pub fn to_expression(&self, mut node: Node) -> Result<Node, AstError> {
        if self.is_a(&node, "ExpressionStatement")
            && let Some(Value::Node(inner)) = node.remove("expression")
        {
            node = *inner;
        }

        if self.is_a(&node, "Expression") {
            return Ok(node);
        }

        if self.is_a(&node, "Class") {
            node.node_type = "ClassExpression".to_string();
        } else if self.is_a(&node, "Function") {
            node.node_type = "FunctionExpression".to_string();
        }

        if !self.is_a(&node, "Expression") {
            return Err(cannot_turn(&node, "an expression"));
        }
        Ok(node)
    }

    /// Wraps `value` in a block statement.
    ///
    /// Blocks pass through and an empty statement becomes an empty block.
    /// A lone non-statement becomes a `return` when `parent` is a function,
    /// otherwise an expression statement.
    pub fn to_block(&self, value: Value, parent: Option<&Node>) -> Result<Node, AstError> {
        let statements = match value {
            Value::Node(node) if self.is_a(&node, "BlockStatement") => return Ok(*node),
            Value::Node(node) if self.is_a(&node, "EmptyStatement") => Vec::new(),
            Value::List(items) => items,
            Value::Node(node) if self.is_a(&node, "Statement") => vec![Value::Node(node)],
            other => {
                let wrapper = if self.is_a_opt(parent, "Function") {
                    "ReturnStatement"
                } else {
                    "ExpressionStatement"
                };
                vec![self.build(wrapper, [other])?.into()]
            }
        };
        self.build("BlockStatement", [statements])
    }

    /// Replaces field `key` of `node` (default `body`) with a block made
    /// from its current value.
    pub fn ensure_block(&self, node: &mut Node, key: Option<&str>) -> Result<(), AstError> {
        let key = key.unwrap_or("body");
        let current = node.get(key).cloned().unwrap_or(Value::Null);
        let block = self.to_block(current, Some(&*node))?;
        node.set(key, block);
        Ok(())
    }

    /// Builds the literal node that evaluates to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor_core::{HostValue, Types};
    /// use serde_json::json;
    ///
    /// let t = Types::default();
    /// let node = t.value_to_node(&HostValue::from(json!([1, "two", null])))?;
    ///
    /// assert_eq!(node.node_type, "ArrayExpression");
    /// assert_eq!(node.get_list("elements").map(<[_]>::len), Some(3));
    /// # Ok::<(), arbor_core::AstError>(())
    /// ```
    pub fn value_to_node(&self, value: &HostValue) -> Result<Node, AstError> {
        match value {
            HostValue::Undefined => self.build("Identifier", ["undefined"]),
            HostValue::Bool(b) => self.build("BooleanLiteral", [*b]),
            HostValue::Null => self.build("NullLiteral", Vec::<Value>::new()),
            HostValue::String(s) => self.build("StringLiteral", [s.as_str()]),
            HostValue::Number(n) => self.build("NumericLiteral", [*n]),
            HostValue::RegExp { pattern, flags } => {
                self.build("RegExpLiteral", [pattern.as_str(), flags.as_str()])
            }
            HostValue::Array(items) => {
                let elements = items
                    .iter()
                    .map(|item| self.value_to_node(item))
                    .collect::<Result<Vec<_>, _>>()?;
                self.build("ArrayExpression", [elements])
            }
            HostValue::Object(entries) => {
                let mut properties = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    let key = if is_valid_identifier(key) {
                        self.build("Identifier", [key.as_str()])?
                    } else {
                        self.build("StringLiteral", [key.as_str()])?
                    };
                    properties.push(self.build("ObjectProperty", [key, self.value_to_node(value)?])?);
                }
                self.build("ObjectExpression", [properties])
            }
            HostValue::Opaque(description) => Err(AstError::conversion(format!(
                "don't know how to turn {description} into a node"
            ))),
        }
    }
}

fn cannot_turn(node: &Node, target: &str) -> AstError {
    AstError::conversion(format!("cannot turn {} to {target}", node.node_type))
}
