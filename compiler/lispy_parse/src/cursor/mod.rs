//! Token cursor for navigating the token stream.

use lispy_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

#[cfg(test)]
mod tests;

/// Cursor over a lexed line.
///
/// Invariant: the token list ends in `Eof` and the cursor never moves past
/// it, so [`Cursor::current`] is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    source: &'a str,
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        let eof = Token::new(
            TokenKind::Eof,
            Span::from_range(source.len()..source.len()),
        );
        Cursor {
            tokens: tokens.as_slice(),
            source,
            pos: 0,
            eof,
        }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current token.
    ///
    /// A hand-built list without a trailing `Eof` still reads as ending
    /// in one.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Source text of the current token.
    pub fn current_text(&self) -> &'a str {
        self.current().text(self.source)
    }

    /// The token after the current one, or `Eof` past the end.
    #[inline]
    pub fn peek_next_token(&self) -> Token {
        if self.current().kind == TokenKind::Eof {
            return self.eof;
        }
        self.tokens.get(self.pos + 1).copied().unwrap_or(self.eof)
    }

    /// Whether the next token starts where the current one ends.
    #[inline]
    pub fn is_next_adjacent(&self) -> bool {
        let next = self.peek_next_token();
        next.kind != TokenKind::Eof && next.span.start == self.current_span().end
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it. Stays put at `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// The source this cursor reads from.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
