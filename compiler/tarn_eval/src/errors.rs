//! Error types and constructors for compilation and evaluation.
//!
//! Every failure is fatal to the run: errors propagate unhandled to the
//! top-level driver. `EvalErrorKind` carries the structured category so
//! callers and tests can match on it instead of parsing messages; the factory
//! functions below are the intended way to build errors.

use std::fmt;

use tarn_ir::Tag;

use crate::Value;

/// Result of compiling or evaluating something that yields a value.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A read (or assignment) named a binding that does not exist.
    UnboundVariable { name: String },
    /// `set` targeted a binding that is not a reference cell.
    InvalidAssignment { name: String },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// The callee of a call is not a function value.
    NotCallable { type_name: &'static str },
    /// The parse tree violates the grammar, or a goto found no target.
    MalformedTree { reason: String },
    /// A native received an operand of the wrong kind.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::InvalidAssignment { name } => {
                write!(f, "cannot assign to `{name}`: not a reference variable")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::NotCallable { type_name } => {
                write!(f, "value of type {type_name} is not callable")
            }
            Self::MalformedTree { reason } => write!(f, "malformed tree: {reason}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
        }
    }
}

/// An evaluation failure: a category plus context notes gathered while the
/// error travelled outward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Outermost context last, e.g. `["in call to `f`", "in top-level form 3"]`.
    pub notes: Vec<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Variable and assignment errors

pub fn unbound_variable(name: &str) -> EvalError {
    EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    }
    .into()
}

pub fn invalid_assignment(name: &str) -> EvalError {
    EvalErrorKind::InvalidAssignment {
        name: name.to_string(),
    }
    .into()
}

// Call errors

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
    .into()
}

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalErrorKind::NotCallable { type_name }.into()
}

pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalErrorKind::TypeMismatch { expected, got }.into()
}

// Tree shape errors

pub fn malformed_tree(reason: impl Into<String>) -> EvalError {
    EvalErrorKind::MalformedTree {
        reason: reason.into(),
    }
    .into()
}

pub fn missing_attribute(tag: Tag, attr: &str) -> EvalError {
    malformed_tree(format!("<{tag}> requires attribute `{attr}`"))
}

pub fn wrong_child_count(tag: Tag, expected: &str, got: usize) -> EvalError {
    malformed_tree(format!("<{tag}> expects {expected} children, got {got}"))
}

pub fn unknown_tag(tag: &str) -> EvalError {
    malformed_tree(format!("unknown tag <{tag}>"))
}

pub fn duplicate_label(label: &str) -> EvalError {
    malformed_tree(format!("label `{label}` declared twice in one block"))
}

pub fn unresolved_goto(label: &str) -> EvalError {
    malformed_tree(format!("goto `{label}` has no matching label in any enclosing block"))
}
