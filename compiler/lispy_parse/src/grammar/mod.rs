//! Grammar rules, one submodule per dialect.

mod arithmetic;
mod sexpr;

use lispy_ir::TokenKind;

/// Tokens that can fill an operator slot.
pub(crate) const OPERATORS: [TokenKind; 4] = [
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
];
