//! Runtime values.
//!
//! Values are cheap to clone: text and user-defined functions sit behind
//! `Rc`, natives behind an `Rc` closure. Function values are first-class and
//! can be stored in any binding.

use std::fmt;
use std::rc::Rc;

use tarn_ir::Name;

use crate::node::CompiledFunction;
use crate::EvalResult;

/// Host function signature: already-evaluated arguments in, one value out.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult;

/// A host-provided function.
#[derive(Clone)]
pub struct NativeFunction {
    name: Name,
    func: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new(name: impl Into<Name>, func: impl Fn(&[Value]) -> EvalResult + 'static) -> Self {
        NativeFunction {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Invoke the host function.
    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }

    /// Identity comparison: two handles to the same registration.
    pub fn ptr_eq(&self, other: &NativeFunction) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native {}>", self.name)
    }
}

/// Runtime value in the Tarn interpreter.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value: result of statements, empty cells, missing else.
    #[default]
    None,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Native(NativeFunction),
    Function(Rc<CompiledFunction>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn function(func: CompiledFunction) -> Self {
        Value::Function(Rc::new(func))
    }

    /// Condition semantics: only absent and `false` are false.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::None | Value::Bool(false))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Native(_) => "native function",
            Value::Function(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// Rendering used by the `print` native.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Native(n) => write!(f, "<native {}>", n.name()),
            Value::Function(func) => write!(f, "<function {}>", func.name),
        }
    }
}
