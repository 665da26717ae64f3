//! Name-binding environments and reference cells.
//!
//! An environment maps names to slots. A slot is either a plain value or a
//! [`ReferenceCell`]: a separately allocated box created by `def` and
//! mutated by `set`. Cloning an environment copies the slots, and with them
//! the cell handles, so a callee that writes through an inherited cell is
//! writing the caller's cell. Rebinding a name in the clone replaces the slot
//! and leaves the original environment alone.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tarn_ir::Name;

use crate::errors::unbound_variable;
use crate::{EvalResult, Value};

/// A shared, mutable box holding one value.
///
/// Clones are handles to the same box. Only the single-threaded evaluator
/// touches cells, so `Rc<RefCell<_>>` is enough; borrows never outlive a
/// `get` or `set` call.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct ReferenceCell(Rc<RefCell<Value>>);

impl ReferenceCell {
    /// A fresh cell holding the absent value.
    #[inline]
    pub fn new() -> Self {
        ReferenceCell::default()
    }

    #[inline]
    pub fn with_value(value: Value) -> Self {
        ReferenceCell(Rc::new(RefCell::new(value)))
    }

    /// Read the current contents.
    #[inline]
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Replace the contents.
    #[inline]
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    /// Whether both handles refer to the same box.
    #[inline]
    pub fn ptr_eq(&self, other: &ReferenceCell) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ReferenceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReferenceCell").field(&*self.0.borrow()).finish()
    }
}

/// What a name is bound to.
#[derive(Clone, Debug)]
pub enum Slot {
    /// An ordinary binding (parameters, globals, natives).
    Value(Value),
    /// A reference variable created by `def`.
    Cell(ReferenceCell),
}

impl Slot {
    /// The slot's value, reading through a cell if there is one.
    #[inline]
    pub fn value(&self) -> Value {
        match self {
            Slot::Value(value) => value.clone(),
            Slot::Cell(cell) => cell.get(),
        }
    }

    #[inline]
    pub fn as_cell(&self) -> Option<&ReferenceCell> {
        match self {
            Slot::Cell(cell) => Some(cell),
            Slot::Value(_) => None,
        }
    }
}

/// Mapping from names to binding slots.
///
/// `Clone` is the shallow clone used at every call: the callee receives the
/// caller's slots with reference cells shared by identity.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Slot>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Insert or overwrite a binding. Overwriting replaces the slot
    /// wholesale, breaking any sharing the old slot had.
    #[inline]
    pub fn add(&mut self, name: Name, slot: Slot) {
        self.bindings.insert(name, slot);
    }

    /// Bind `name` to a plain value.
    #[inline]
    pub fn define_value(&mut self, name: Name, value: Value) {
        self.add(name, Slot::Value(value));
    }

    /// Bind `name` to a fresh, empty reference cell and return a handle to it.
    pub fn define_cell(&mut self, name: Name) -> ReferenceCell {
        let cell = ReferenceCell::new();
        self.add(name, Slot::Cell(cell.clone()));
        cell
    }

    /// The raw slot for `name`, used to resolve assignment targets.
    #[inline]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.bindings.get(name)
    }

    /// The value bound to `name`, or `None` when unbound.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.slot(name).map(Slot::value)
    }

    /// The value bound to `name`; reading an unbound name is an error.
    pub fn get(&self, name: &str) -> EvalResult {
        self.lookup(name).ok_or_else(|| unbound_variable(name))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
