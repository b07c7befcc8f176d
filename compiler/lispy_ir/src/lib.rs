//! Lispy IR - shared front-end data structures.
//!
//! This crate contains the types every other Lispy crate agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Grammar rules and the owned parse tree the parser builds
//!
//! # Ownership
//!
//! A [`ParseNode`] owns its children outright. One tree is built per input
//! line, walked once by the evaluator, and released by dropping the root.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;
mod tree;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use tree::{Dialect, ParseNode, Rule};
