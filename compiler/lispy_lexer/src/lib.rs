//! Lexer for Lispy using logos.
//!
//! Produces a [`TokenList`] that always ends in `Eof`. Lexing never fails:
//! characters outside the language become `Error` tokens and the parser
//! reports them with the rest of its syntax errors.

use logos::Logos;
use lispy_ir::{Span, Token, TokenKind, TokenList};


/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // Unsigned. A `-` is always its own token; the parser decides whether
    // it is an operator or the sign of the literal it touches.
    #[regex(r"[0-9]+")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Symbol,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Number => TokenKind::Number,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Symbol => TokenKind::Symbol,
        }
    }
}

/// Lex source code into a [`TokenList`].
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => raw.kind(),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}
