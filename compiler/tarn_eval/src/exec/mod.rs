//! Node execution: `run(environment) -> Value | pending jump`.
//!
//! - Expression positions (conditions, arguments, callees, assigned values)
//!   pass a pending jump straight outward without finishing the node.
//! - Blocks are the only place jumps are resolved (see `block`).
//! - A jump the callee's body leaves unresolved returns to the caller's
//!   blocks, which run in the caller's environment (see `call`).

mod block;
mod call;

pub use call::call_value;

use tracing::trace;

use crate::errors::{invalid_assignment, unbound_variable};
use crate::node::{Flow, Node};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalError};

/// Unwrap a value-producing flow, or return the pending jump from the
/// enclosing function.
macro_rules! value_or_jump {
    ($flow:expr) => {
        match $flow {
            Flow::Value(value) => value,
            jump @ Flow::Jump(_) => return Ok(jump),
        }
    };
}
pub(crate) use value_or_jump;

impl Node {
    /// Execute this node against `env`.
    pub fn run(&self, env: &mut Environment) -> Result<Flow, EvalError> {
        ensure_sufficient_stack(|| self.run_inner(env))
    }

    fn run_inner(&self, env: &mut Environment) -> Result<Flow, EvalError> {
        match self {
            Node::Const(value) => Ok(Flow::Value(value.clone())),
            Node::Var(name) => env.get(name).map(Flow::Value),
            Node::Define(name) => {
                env.define_cell(name.clone());
                Ok(Flow::none())
            }
            Node::Assign { name, expr } => {
                // Resolve the target before evaluating the value: the cell
                // that receives the store is the one bound when `set` began.
                let cell = match env.slot(name) {
                    None => return Err(unbound_variable(name)),
                    Some(slot) => slot
                        .as_cell()
                        .cloned()
                        .ok_or_else(|| invalid_assignment(name))?,
                };
                let value = value_or_jump!(expr.run(env)?);
                cell.set(value.clone());
                Ok(Flow::Value(value))
            }
            Node::Label(_) | Node::FunctionDef(_) => Ok(Flow::none()),
            Node::Goto(label) => {
                trace!(%label, "goto");
                Ok(Flow::Jump(label.clone()))
            }
            Node::Block(block) => block.run(env),
            Node::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = value_or_jump!(cond.run(env)?);
                if cond.is_truthy() {
                    then_branch.run(env)
                } else if let Some(else_branch) = else_branch {
                    else_branch.run(env)
                } else {
                    Ok(Flow::none())
                }
            }
            Node::Call { callee, args } => call::eval_call(callee, args, env),
        }
    }
}
