//! Recursive descent parser for Lispy.
//!
//! Produces an owned [`ParseNode`] tree for one line of input, using the
//! grammar selected by [`Dialect`]. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{join_expected, Found, SyntaxError};

use lispy_diagnostic::ErrorCode;
use lispy_ir::{Dialect, ParseNode, Rule, Span, TokenKind, TokenList};
use lispy_lexer::lex;
use tracing::debug;


/// Parse one line of source with the given grammar.
pub fn parse(source: &str, dialect: Dialect) -> Result<ParseNode, SyntaxError> {
    let tokens = lex(source);
    parse_tokens(&tokens, source, dialect)
}

/// Parse an already lexed line.
pub fn parse_tokens(
    tokens: &TokenList,
    source: &str,
    dialect: Dialect,
) -> Result<ParseNode, SyntaxError> {
    debug!(%dialect, tokens = tokens.len(), "parse line");
    let mut parser = Parser::new(tokens, source, dialect);
    let result = match dialect {
        Dialect::Arithmetic => parser.parse_arithmetic_line(),
        Dialect::SExpression => parser.parse_sexpr_line(),
    };
    if let Err(err) = &result {
        debug!(code = %err.code, span = %err.span, "syntax error");
    }
    result
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
    /// Spans of `(` tokens not yet closed, innermost last.
    open_delims: Vec<Span>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    fn new(tokens: &'a TokenList, source: &'a str, dialect: Dialect) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            dialect,
            open_delims: Vec::new(),
        }
    }

    /// Span of the whole line, used for the root node.
    fn line_span(&self) -> Span {
        Span::from_range(0..self.cursor.source().len())
    }

    /// Consume the current token as a leaf of the given rule.
    fn leaf(&mut self, rule: Rule) -> ParseNode {
        let text = self.cursor.current_text();
        let token = self.cursor.advance();
        ParseNode::leaf(rule, text, token.span)
    }

    /// At a number literal: digits, or a `-` written directly against them.
    fn at_number(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::Number => true,
            TokenKind::Minus => {
                self.cursor.is_next_adjacent()
                    && self.cursor.peek_next_token().kind == TokenKind::Number
            }
            _ => false,
        }
    }

    /// Consume a number literal, joining a leading `-` to its digits.
    fn number(&mut self) -> ParseNode {
        if !self.cursor.check(TokenKind::Minus) {
            return self.leaf(Rule::Number);
        }
        let sign = self.cursor.advance();
        let digits = self.cursor.advance();
        let span = sign.span.merge(digits.span);
        let text = self.cursor.source().get(span.to_range()).unwrap_or_default();
        ParseNode::leaf(Rule::Number, text, span)
    }

    /// Consume `(` and remember it until the matching `)`.
    fn open_paren(&mut self) -> ParseNode {
        let node = self.leaf(Rule::Delimiter);
        self.open_delims.push(node.span);
        node
    }

    fn close_paren(&mut self) -> ParseNode {
        self.open_delims.pop();
        self.leaf(Rule::Delimiter)
    }

    /// Build an error at the current token.
    #[cold]
    fn error(&self, expected: &[TokenKind]) -> SyntaxError {
        let token = self.cursor.current();
        let open_delimiter = self.open_delims.last().copied();
        let code = match token.kind {
            TokenKind::Error => ErrorCode::E0001,
            TokenKind::Eof if open_delimiter.is_some() => ErrorCode::E1003,
            TokenKind::Eof => ErrorCode::E1002,
            _ if expected.contains(&TokenKind::Eof) => ErrorCode::E1004,
            _ => ErrorCode::E1001,
        };
        SyntaxError {
            code,
            span: token.span,
            expected: expected.to_vec(),
            found: Found {
                kind: token.kind,
                text: self.cursor.current_text().to_string(),
            },
            open_delimiter,
            dialect: self.dialect,
        }
    }
}
