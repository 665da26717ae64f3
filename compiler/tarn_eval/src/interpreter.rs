//! The top-level driver.
//!
//! An `Interpreter` owns the single global environment for a run. Programs
//! are executed form by form: each top-level form is compiled against the
//! current globals and then either installed (function definitions) or run
//! (everything else). The value of the last form that ran is the program's
//! result.

mod builder;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use tarn_ir::ParseNode;
use tracing::debug;

use crate::compiler::{Compiler, UnknownTagPolicy};
use crate::errors::{unbound_variable, unresolved_goto};
use crate::exec::call_value;
use crate::node::{Flow, Node};
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, EvalResult, NativeFunction, Value};

/// Tree-walking interpreter for Tarn programs.
pub struct Interpreter {
    globals: Environment,
    print_handler: SharedPrintHandler,
    unknown_tags: UnknownTagPolicy,
}

impl Interpreter {
    /// An interpreter with the prelude installed and output on stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The global environment.
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Mutable access to the globals, for hosts seeding values before a run.
    pub fn globals_mut(&mut self) -> &mut Environment {
        &mut self.globals
    }

    /// Register a native as a plain global binding.
    pub fn register_native(&mut self, native: NativeFunction) {
        self.globals
            .define_value(native.name().clone(), Value::Native(native));
    }

    /// Compile one tree against the current globals.
    pub fn compile(&self, tree: &ParseNode) -> Result<Node, EvalError> {
        Compiler::new(&self.globals)
            .unknown_tags(self.unknown_tags)
            .compile(tree)
    }

    /// Handle one compiled top-level form.
    ///
    /// Function definitions are installed into the globals and produce no
    /// value (`Ok(None)`). Any other node runs against the globals; a goto
    /// that no block picked up is an error here.
    pub fn run_form(&mut self, node: &Node) -> Result<Option<Value>, EvalError> {
        match node {
            Node::FunctionDef(func) => {
                debug!(function = %func.name, arity = func.arity(), "installing function");
                self.globals
                    .define_value(func.name.clone(), Value::Function(Rc::clone(func)));
                Ok(None)
            }
            node => match node.run(&mut self.globals)? {
                Flow::Value(value) => Ok(Some(value)),
                Flow::Jump(label) => Err(unresolved_goto(&label)),
            },
        }
    }

    /// Run a whole program: the children of `root` are the top-level forms.
    ///
    /// Returns the value of the last form that is not a function definition,
    /// or the absent value if there is none.
    #[tracing::instrument(level = "debug", skip_all, fields(forms = root.children.len()))]
    pub fn run_program(&mut self, root: &ParseNode) -> EvalResult {
        let mut result = Value::None;
        for (index, form) in root.children.iter().enumerate() {
            let outcome = self
                .compile(form)
                .and_then(|node| self.run_form(&node))
                .map_err(|err| err.with_note(format!("in top-level form {index} <{}>", form.tag)))?;
            if let Some(value) = outcome {
                debug!(index, value = %value, "top-level form finished");
                result = value;
            }
        }
        Ok(result)
    }

    /// Call a global function by name with already-evaluated arguments.
    ///
    /// There is no block around a host call, so a goto leaving the function
    /// is unresolved.
    pub fn call(&self, name: &str, args: Vec<Value>) -> EvalResult {
        let func = self
            .globals
            .lookup(name)
            .ok_or_else(|| unbound_variable(name))?;
        match call_value(&func, args, &self.globals)? {
            Flow::Value(value) => Ok(value),
            Flow::Jump(label) => Err(unresolved_goto(&label)),
        }
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
