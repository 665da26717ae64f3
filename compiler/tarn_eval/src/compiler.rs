//! Single-pass translation from parse tree to node graph.
//!
//! Dispatch is an exhaustive match over [`Tag`]. Spellings outside the
//! grammar are rejected unless the caller opts into [`UnknownTagPolicy::Ignore`].
//!
//! `call(fun=name)` is resolved against the global environment while
//! compiling, not when the call runs. The driver compiles one top-level form
//! at a time, so that lookup sees everything installed by earlier forms.

use std::rc::Rc;

use tarn_ir::{Name, ParseNode, Tag};
use tracing::trace;

use crate::errors::{malformed_tree, missing_attribute, unknown_tag, wrong_child_count};
use crate::node::{Block, CompiledFunction, Node};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalError, Value};

/// What to do with a tag the grammar does not know.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Fail with `MalformedTree`.
    #[default]
    Reject,
    /// Compile the node to an absent constant, ignoring its children.
    Ignore,
}

/// Compiles parse trees against a snapshot of the global environment.
pub struct Compiler<'g> {
    globals: &'g Environment,
    unknown_tags: UnknownTagPolicy,
}

impl<'g> Compiler<'g> {
    pub fn new(globals: &'g Environment) -> Self {
        Compiler {
            globals,
            unknown_tags: UnknownTagPolicy::default(),
        }
    }

    #[must_use]
    pub fn unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// Compile one tree into a node.
    pub fn compile(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        ensure_sufficient_stack(|| self.compile_node(tree))
    }

    fn compile_node(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        let Some(tag) = tree.kind() else {
            return match self.unknown_tags {
                UnknownTagPolicy::Reject => Err(unknown_tag(&tree.tag)),
                UnknownTagPolicy::Ignore => Ok(Node::Const(Value::None)),
            };
        };

        match tag {
            Tag::Begin => {
                let children = self.compile_all(&tree.children)?;
                Ok(Node::Block(Block::new(children)?))
            }
            Tag::Var => Ok(Node::Var(required_name(tree, tag, "name")?)),
            Tag::Def => Ok(Node::Define(required_name(tree, tag, "name")?)),
            Tag::Label => Ok(Node::Label(required_name(tree, tag, "name")?)),
            Tag::Goto => Ok(Node::Goto(required_name(tree, tag, "label")?)),
            Tag::Set => {
                let name = required_name(tree, tag, "name")?;
                let expr = self.compile(single_child(tree, tag)?)?;
                Ok(Node::Assign {
                    name,
                    expr: Box::new(expr),
                })
            }
            Tag::Number => {
                let raw = required_attr(tree, tag, "value")?;
                let number = raw.trim().parse::<f64>().map_err(|_| {
                    malformed_tree(format!("<number> value `{raw}` is not a decimal number"))
                })?;
                Ok(Node::Const(Value::Number(number)))
            }
            Tag::String => {
                let text = required_attr(tree, tag, "value")?;
                Ok(Node::Const(Value::string(text)))
            }
            Tag::If => self.compile_if(tree),
            Tag::Function => self.compile_function(tree),
            Tag::Call => self.compile_call(tree),
        }
    }

    fn compile_all(&self, trees: &[ParseNode]) -> Result<Vec<Node>, EvalError> {
        trees.iter().map(|tree| self.compile(tree)).collect()
    }

    fn compile_if(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        match tree.children.as_slice() {
            [cond, then_branch] => Ok(Node::Conditional {
                cond: Box::new(self.compile(cond)?),
                then_branch: Box::new(self.compile(then_branch)?),
                else_branch: None,
            }),
            [cond, then_branch, else_branch] => Ok(Node::Conditional {
                cond: Box::new(self.compile(cond)?),
                then_branch: Box::new(self.compile(then_branch)?),
                else_branch: Some(Box::new(self.compile(else_branch)?)),
            }),
            other => Err(wrong_child_count(Tag::If, "2 or 3", other.len())),
        }
    }

    fn compile_function(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        let name = required_name(tree, Tag::Function, "name")?;
        // A missing `args` attribute declares no parameters.
        let params = tree
            .attr("args")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|param| !param.is_empty())
            .map(Name::from)
            .collect();
        let body = self.compile(single_child(tree, Tag::Function)?)?;
        Ok(Node::FunctionDef(Rc::new(CompiledFunction::new(
            name, params, body,
        ))))
    }

    fn compile_call(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        if let Some(fun) = tree.attr("fun") {
            // Not-yet-defined targets compile to the absent value and fail
            // as not callable only if the call actually runs.
            let target = self.globals.lookup(fun).unwrap_or_default();
            trace!(
                function = fun,
                resolved = !target.is_none(),
                "call target bound at compile time"
            );
            return Ok(Node::Call {
                callee: Box::new(Node::Const(target)),
                args: self.compile_all(&tree.children)?,
            });
        }

        let Some((callee, args)) = tree.children.split_first() else {
            return Err(wrong_child_count(Tag::Call, "at least 1", 0));
        };
        Ok(Node::Call {
            callee: Box::new(self.compile(callee)?),
            args: self.compile_all(args)?,
        })
    }
}

fn required_attr<'t>(tree: &'t ParseNode, tag: Tag, attr: &str) -> Result<&'t str, EvalError> {
    tree.attr(attr).ok_or_else(|| missing_attribute(tag, attr))
}

fn required_name(tree: &ParseNode, tag: Tag, attr: &str) -> Result<Name, EvalError> {
    required_attr(tree, tag, attr).map(Name::from)
}

fn single_child(tree: &ParseNode, tag: Tag) -> Result<&ParseNode, EvalError> {
    match tree.children.as_slice() {
        [child] => Ok(child),
        other => Err(wrong_child_count(tag, "exactly 1", other.len())),
    }
}
