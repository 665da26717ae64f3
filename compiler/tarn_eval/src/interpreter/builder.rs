//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::compiler::UnknownTagPolicy;
use crate::natives::register_prelude;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, NativeFunction, Value};

/// Builder for `Interpreter` instances.
///
/// Defaults: output to stdout, prelude natives installed, unknown tags
/// rejected.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    unknown_tags: UnknownTagPolicy,
    prelude: bool,
    natives: Vec<NativeFunction>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            unknown_tags: UnknownTagPolicy::default(),
            prelude: true,
            natives: Vec::new(),
        }
    }

    /// Set where the `print` native writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Choose how the compiler treats tags outside the grammar.
    #[must_use]
    pub fn unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// Whether to install the prelude natives (`print`, `eq`, `plus`, ...).
    #[must_use]
    pub fn prelude(mut self, enabled: bool) -> Self {
        self.prelude = enabled;
        self
    }

    /// Register an extra native. Later registrations shadow earlier ones and
    /// the prelude.
    #[must_use]
    pub fn native(mut self, native: NativeFunction) -> Self {
        self.natives.push(native);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let mut globals = Environment::new();
        if self.prelude {
            register_prelude(&mut globals, &print_handler);
        }
        for native in self.natives {
            globals.define_value(native.name().clone(), Value::Native(native));
        }
        Interpreter {
            globals,
            print_handler,
            unknown_tags: self.unknown_tags,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
