//! Stack guard for the recursive compiler and evaluator.
//!
//! `Compiler::compile` and `Node::run` call themselves once per tree level,
//! and a user function that recurses adds a few `run` frames per call. Both
//! route through [`ensure_sufficient_stack`] so a program that recurses tens
//! of thousands of times does not overflow the host thread.

/// Headroom below which a fresh segment is allocated.
#[cfg(not(target_arch = "wasm32"))]
const MIN_HEADROOM: usize = 128 * 1024;

/// Size of each segment `stacker` allocates.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f` on a stack with at least `MIN_HEADROOM` bytes free.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_HEADROOM, SEGMENT_SIZE, f)
}

/// `stacker` does not support wasm; the runtime owns the stack there.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
