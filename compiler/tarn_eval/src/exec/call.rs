//! The call protocol shared by natives and user-defined functions.

use crate::errors::{arity_mismatch, not_callable};
use crate::exec::value_or_jump;
use crate::node::{CompiledFunction, Flow, Node};
use crate::{Environment, EvalError, Value};

/// Evaluate a call node: callee first, then every argument left to right in
/// the caller's environment, then dispatch.
pub(super) fn eval_call(
    callee: &Node,
    args: &[Node],
    env: &mut Environment,
) -> Result<Flow, EvalError> {
    let func = value_or_jump!(callee.run(env)?);
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(value_or_jump!(arg.run(env)?));
    }
    call_value(&func, values, env)
}

/// Call a function value with already-evaluated arguments.
///
/// `caller` is the environment the callee's environment is cloned from. A
/// goto the body does not resolve comes back as `Flow::Jump` for the
/// caller's blocks to pick up.
pub fn call_value(
    func: &Value,
    args: Vec<Value>,
    caller: &Environment,
) -> Result<Flow, EvalError> {
    match func {
        Value::Native(native) => native.call(&args).map(Flow::Value),
        Value::Function(func) => call_function(func, args, caller),
        other => Err(not_callable(other.type_name())),
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(function = %func.name, arity = func.arity())
)]
fn call_function(
    func: &CompiledFunction,
    args: Vec<Value>,
    caller: &Environment,
) -> Result<Flow, EvalError> {
    if args.len() != func.arity() {
        return Err(arity_mismatch(&func.name, func.arity(), args.len()));
    }

    let mut env = caller.clone();
    for (param, arg) in func.params.iter().zip(args) {
        env.define_value(param.clone(), arg);
    }

    func.body
        .run(&mut env)
        .map_err(|err| err.with_note(format!("in call to `{}`", func.name)))
}
