//! Host-provided functions registered before any program form runs.
//!
//! The prelude covers output (`print`), equality (`eq`) and arithmetic on
//! numbers (`plus`, `minus`, `mul`, `less`). Each native checks its own
//! argument count and operand kinds.

use std::sync::Arc;

use crate::errors::{arity_mismatch, type_mismatch};
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, NativeFunction, Value};

/// The prelude natives, with `print` writing to `print_handler`.
pub fn prelude(print_handler: &SharedPrintHandler) -> Vec<NativeFunction> {
    let handler = Arc::clone(print_handler);
    vec![
        NativeFunction::new("print", move |args| {
            let [value] = expect_args::<1>("print", args)?;
            handler.println(&value.to_string());
            Ok(Value::None)
        }),
        NativeFunction::new("eq", |args| {
            let [a, b] = expect_args::<2>("eq", args)?;
            Ok(Value::Bool(a == b))
        }),
        NativeFunction::new("plus", |args| {
            let [a, b] = numbers::<2>("plus", args)?;
            Ok(Value::Number(a + b))
        }),
        NativeFunction::new("minus", |args| {
            let [a, b] = numbers::<2>("minus", args)?;
            Ok(Value::Number(a - b))
        }),
        NativeFunction::new("mul", |args| {
            let [a, b] = numbers::<2>("mul", args)?;
            Ok(Value::Number(a * b))
        }),
        NativeFunction::new("less", |args| {
            let [a, b] = numbers::<2>("less", args)?;
            Ok(Value::Bool(a < b))
        }),
    ]
}

/// Bind every prelude native as a plain global.
pub fn register_prelude(globals: &mut Environment, print_handler: &SharedPrintHandler) {
    for native in prelude(print_handler) {
        globals.define_value(native.name().clone(), Value::Native(native));
    }
}

fn expect_args<'a, const N: usize>(
    name: &str,
    args: &'a [Value],
) -> Result<&'a [Value; N], EvalError> {
    <&[Value; N]>::try_from(args).map_err(|_| arity_mismatch(name, N, args.len()))
}

fn numbers<const N: usize>(name: &str, args: &[Value]) -> Result<[f64; N], EvalError> {
    let args = expect_args::<N>(name, args)?;
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .as_number()
            .ok_or_else(|| type_mismatch("number", arg.type_name()))?;
    }
    Ok(out)
}
