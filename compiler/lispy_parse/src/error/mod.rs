//! Syntax errors.
//!
//! A [`SyntaxError`] is a plain value: the parser stops at the first one and
//! hands it back. [`SyntaxError::to_diagnostic`] turns it into a
//! [`Diagnostic`] with labels and fix suggestions for the terminal emitter.

use std::fmt;

use lispy_diagnostic::{Diagnostic, ErrorCode};
use lispy_ir::{Dialect, Span, TokenKind};

use crate::grammar::OPERATORS;


/// The token the parser stopped at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found {
    pub kind: TokenKind,
    /// Source text of the token. Empty at end of input.
    pub text: String,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            f.write_str("end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

/// A syntax error for one line of input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected {} at {}", join_expected(.expected), .found)]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub span: Span,
    /// What would have been accepted, deduplicated, in grammar order.
    pub expected: Vec<TokenKind>,
    pub found: Found,
    /// Innermost `(` still open when the error was hit.
    pub open_delimiter: Option<Span>,
    pub dialect: Dialect,
}

/// Join expected items as `a`, `a or b`, `a, b or c`.
pub fn join_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.display_name().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|k| k.display_name()).collect();
            format!("{} or {}", head.join(", "), last.display_name())
        }
    }
}

impl SyntaxError {
    fn expects_operator(&self) -> bool {
        self.expected == OPERATORS
    }

    /// Whole line wrapped in parentheses, which the arithmetic grammar rejects.
    fn is_parenthesized_line(&self) -> bool {
        self.dialect == Dialect::Arithmetic
            && self.open_delimiter.is_none()
            && self.found.kind == TokenKind::LParen
            && self.expects_operator()
    }

    fn label_text(&self) -> String {
        match self.code {
            ErrorCode::E0001 => "not part of the language".to_string(),
            ErrorCode::E1002 | ErrorCode::E1003 => "input ends here".to_string(),
            ErrorCode::E1004 => format!("unexpected {}", self.found),
            _ if self.expects_operator() => "expected an operator".to_string(),
            _ => format!("expected {}", join_expected(&self.expected)),
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.to_string())
            .with_label(self.span, self.label_text());

        if self.code == ErrorCode::E1003 {
            if let Some(open) = self.open_delimiter {
                diag = diag.with_secondary_label(open, "unclosed '(' opened here");
            }
        }

        if self.is_parenthesized_line() {
            diag = diag
                .with_note("the arithmetic grammar does not accept a parenthesized whole line")
                .with_suggestion("drop the outer parentheses, or run with `--dialect=sexpr`");
        } else if self.expects_operator() && self.found.kind == TokenKind::Number {
            diag = diag.with_suggestion("write the operator first: `+ 1 2`");
        } else if self.code == ErrorCode::E1002 && self.expects_operator() {
            diag = diag.with_note("every line is an operator followed by its operands");
        }

        diag
    }
}
