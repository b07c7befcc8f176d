//! The s-expression grammar.
//!
//! ```text
//! symbol     := '+' | '-' | '*' | '/' | /[a-zA-Z_][a-zA-Z0-9_]*/
//! sexpr      := '(' expression* ')'
//! expression := number | symbol | sexpr
//! lispy      := ^ expression* $
//! ```
//!
//! A number is tried before a symbol, so `-5` is a literal and `- 5` is a
//! symbol followed by one.

use lispy_ir::{ParseNode, Rule, TokenKind};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Parser, SyntaxError};

// Operator tokens are reported under "symbol".
const LINE_ITEM: [TokenKind; 4] = [
    TokenKind::Number,
    TokenKind::Symbol,
    TokenKind::LParen,
    TokenKind::Eof,
];
const LIST_ITEM: [TokenKind; 4] = [
    TokenKind::Number,
    TokenKind::Symbol,
    TokenKind::LParen,
    TokenKind::RParen,
];

impl Parser<'_> {
    pub(crate) fn parse_sexpr_line(&mut self) -> Result<ParseNode, SyntaxError> {
        trace!(rule = "lispy", "enter");
        let mut children = Vec::new();
        while !self.cursor.is_at_end() {
            children.push(self.parse_item(&LINE_ITEM)?);
        }
        Ok(ParseNode::branch(Rule::Lispy, children, self.line_span()))
    }

    fn parse_item(&mut self, expected: &[TokenKind]) -> Result<ParseNode, SyntaxError> {
        if self.at_number() {
            return Ok(self.number());
        }
        match self.cursor.current_kind() {
            kind if kind == TokenKind::Symbol || kind.is_operator() => {
                Ok(self.leaf(Rule::Symbol))
            }
            TokenKind::LParen => ensure_sufficient_stack(|| self.parse_list()),
            _ => Err(self.error(expected)),
        }
    }

    /// `'(' expression* ')'`
    fn parse_list(&mut self) -> Result<ParseNode, SyntaxError> {
        trace!(
            rule = "sexpr",
            pos = self.cursor.position(),
            depth = self.open_delims.len(),
            "enter"
        );
        let open = self.open_paren();
        let start = open.span;
        let mut children = vec![open];
        while !self.cursor.check(TokenKind::RParen) {
            children.push(self.parse_item(&LIST_ITEM)?);
        }
        let close = self.close_paren();
        let span = start.merge(close.span);
        children.push(close);
        Ok(ParseNode::branch(Rule::SExpr, children, span))
    }
}
