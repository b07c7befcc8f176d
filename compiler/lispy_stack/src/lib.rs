//! Stack growth for deep recursion.
//!
//! The parser and evaluator both recurse once per level of parenthesis
//! nesting. A line such as `+ 1 (+ 1 (+ 1 ...))` nested a few hundred
//! thousand levels deep would overflow a fixed thread stack, so every
//! recursive step goes through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when less
//! than [`RED_ZONE`] bytes remain. On WASM the closure is called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
