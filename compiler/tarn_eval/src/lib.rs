//! Tarn Eval - Tree-walking evaluator for the Tarn interpreter.
//!
//! A parse tree is compiled once into an immutable node graph, which is then
//! run against a mutable name-binding environment.
//!
//! # Architecture
//!
//! - `Environment`: name → slot, where a slot is a plain value or a shared
//!   `ReferenceCell`; cloned (shallowly) for every call
//! - `Compiler`: exhaustive dispatch over `tarn_ir::Tag`
//! - `Node` / `Flow`: the node graph and its `value | pending jump` result
//! - `Interpreter`: the top-level driver and global environment
//! - `natives`: the host prelude
//!
//! Evaluation is single-threaded and strictly recursive.

mod compiler;
mod environment;
pub mod errors;
mod exec;
mod interpreter;
pub mod natives;
pub mod node;
mod print_handler;
mod stack;
mod value;

pub use compiler::{Compiler, UnknownTagPolicy};
pub use environment::{Environment, ReferenceCell, Slot};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::call_value;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use node::{Block, CompiledFunction, Flow, Node};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{NativeFn, NativeFunction, Value};

#[cfg(test)]
mod tests;
