//! The executable node graph ("compiled code").
//!
//! The compiler builds this graph once from a parse tree; it is immutable
//! afterwards and can be run any number of times against different
//! environments. Execution lives in [`crate::exec`].

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tarn_ir::Name;

use crate::errors::duplicate_label;
use crate::{EvalError, Value};

/// Result of running a node: either a value, or a goto still looking for its
/// label.
///
/// Jumps travel outward as ordinary return values until a block that declares
/// the label picks them up. They never use the error channel.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Value(Value),
    Jump(Name),
}

impl Flow {
    /// The absent value, as a flow.
    #[inline]
    pub fn none() -> Self {
        Flow::Value(Value::None)
    }
}

/// One executable node.
#[derive(Debug)]
pub enum Node {
    /// A literal or a call target resolved at compile time.
    Const(Value),
    /// Read a binding (through its cell, if any).
    Var(Name),
    /// Bind a fresh, empty reference cell.
    Define(Name),
    /// Store into an existing reference cell.
    Assign { name: Name, expr: Box<Node> },
    /// Jump target; a no-op when run.
    Label(Name),
    /// Produce a pending jump.
    Goto(Name),
    /// Sequential statements with local labels.
    Block(Block),
    Conditional {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    Call { callee: Box<Node>, args: Vec<Node> },
    /// A top-level function definition. The driver installs it; running it
    /// anywhere else does nothing.
    FunctionDef(Rc<CompiledFunction>),
}

/// A sequence of statements and the positions of the labels among them.
#[derive(Debug)]
pub struct Block {
    pub(crate) children: Vec<Node>,
    pub(crate) labels: FxHashMap<Name, usize>,
}

impl Block {
    /// Build a block, indexing its labels. A label may appear only once per
    /// block.
    pub fn new(children: Vec<Node>) -> Result<Self, EvalError> {
        let mut labels = FxHashMap::default();
        for (position, child) in children.iter().enumerate() {
            if let Node::Label(name) = child {
                if labels.insert(name.clone(), position).is_some() {
                    return Err(duplicate_label(name));
                }
            }
        }
        Ok(Block { children, labels })
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Position of `label` among the children, if this block declares it.
    #[inline]
    pub fn label_position(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }
}

/// A user-defined function: formal parameters and a body.
///
/// Functions do not capture the environment they were defined in; each call
/// runs the body in a clone of the caller's environment.
#[derive(Debug)]
pub struct CompiledFunction {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Node,
}

impl CompiledFunction {
    pub fn new(name: Name, params: Vec<Name>, body: Node) -> Self {
        CompiledFunction { name, params, body }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
