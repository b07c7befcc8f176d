//! The arithmetic grammar.
//!
//! ```text
//! expression := number | '(' operator expression+ ')'
//! lispy      := ^ operator expression+ $
//! ```
//!
//! The top level is a bare application, so a line wrapped in parentheses
//! does not match. A `-` in operator position is always the operator, so
//! `-1 2` subtracts; in expression position a `-` touching digits is the
//! sign of a literal.

use lispy_ir::{ParseNode, Rule, TokenKind};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use super::OPERATORS;
use crate::{Parser, SyntaxError};

const EXPRESSION_START: [TokenKind; 2] = [TokenKind::Number, TokenKind::LParen];
const LINE_CONTINUATION: [TokenKind; 3] = [TokenKind::Number, TokenKind::LParen, TokenKind::Eof];
const LIST_CONTINUATION: [TokenKind; 3] =
    [TokenKind::Number, TokenKind::LParen, TokenKind::RParen];

impl Parser<'_> {
    pub(crate) fn parse_arithmetic_line(&mut self) -> Result<ParseNode, SyntaxError> {
        trace!(rule = "lispy", "enter");
        let mut children = vec![self.parse_operator()?, self.parse_expression()?];
        while !self.cursor.is_at_end() {
            if !self.at_expression_start() {
                return Err(self.error(&LINE_CONTINUATION));
            }
            children.push(self.parse_expression()?);
        }
        Ok(ParseNode::branch(Rule::Lispy, children, self.line_span()))
    }

    fn parse_operator(&mut self) -> Result<ParseNode, SyntaxError> {
        if self.cursor.current_kind().is_operator() {
            Ok(self.leaf(Rule::Operator))
        } else {
            Err(self.error(&OPERATORS))
        }
    }

    fn at_expression_start(&self) -> bool {
        self.at_number() || self.cursor.check(TokenKind::LParen)
    }

    fn parse_expression(&mut self) -> Result<ParseNode, SyntaxError> {
        if self.at_number() {
            return Ok(self.number());
        }
        if self.cursor.check(TokenKind::LParen) {
            return ensure_sufficient_stack(|| self.parse_application());
        }
        Err(self.error(&EXPRESSION_START))
    }

    /// `'(' operator expression+ ')'`
    fn parse_application(&mut self) -> Result<ParseNode, SyntaxError> {
        trace!(
            rule = "expression",
            pos = self.cursor.position(),
            depth = self.open_delims.len(),
            "enter"
        );
        let open = self.open_paren();
        let start = open.span;
        let mut children = vec![open, self.parse_operator()?, self.parse_expression()?];
        while !self.cursor.check(TokenKind::RParen) {
            if !self.at_expression_start() {
                return Err(self.error(&LIST_CONTINUATION));
            }
            children.push(self.parse_expression()?);
        }
        let close = self.close_paren();
        let span = start.merge(close.span);
        children.push(close);
        Ok(ParseNode::branch(Rule::Expression, children, span))
    }
}
