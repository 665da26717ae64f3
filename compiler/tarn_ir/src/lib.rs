//! Tarn IR - Parse-tree input types for the Tarn interpreter.
//!
//! This crate contains the data handed to the evaluator by an external reader:
//! - `ParseNode`: an immutable labeled tree (tag, attributes, children)
//! - `Tag`: the closed grammar of tags the compiler understands
//! - `Name`: a cheaply clonable identifier used for bindings and labels
//!
//! The reader itself (XML, JSON, a hand-written parser) lives outside this
//! workspace. `ParseNode` derives serde traits so any serde format can carry it.

mod name;
mod tag;
mod tree;

pub use name::Name;
pub use tag::Tag;
pub use tree::ParseNode;
