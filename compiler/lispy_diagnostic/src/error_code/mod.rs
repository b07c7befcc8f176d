//! Error codes for every diagnostic Lispy can produce.
//!
//! The first digit names the phase, mirroring the order a line travels
//! through the interpreter.

use std::fmt;
use std::str::FromStr;


/// Error codes.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in input
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Unexpected trailing input
    E1004,

    // Evaluation Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Invalid operator
    E6002,
    /// Integer overflow
    E6003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// One-line summary.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "unexpected trailing input",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::E6002 => "invalid operator",
            ErrorCode::E6003 => "integer overflow",
        }
    }

    /// Longer explanation with an example, printed by `lispy explain`.
    pub fn explanation(self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "The input contains a character that is not part of the language.\n\
                 Only digits, `+ - * /`, parentheses and whitespace are accepted\n\
                 (plus identifiers in the s-expression dialect).\n\n\
                 Example:\n    lispy> + 1 %\n"
            }
            ErrorCode::E1001 => {
                "The parser found a token where the grammar does not allow one.\n\
                 In the arithmetic dialect a line must start with an operator,\n\
                 followed by one or more expressions.\n\n\
                 Example:\n    lispy> 1 + 2\n\n\
                 Write it in prefix form instead:\n    lispy> + 1 2\n"
            }
            ErrorCode::E1002 => {
                "The line ended where more input was required. An operator must be\n\
                 followed by at least one expression, a number or a parenthesized\n\
                 application, and an empty line has no operator at all.\n\n\
                 Example:\n    lispy> +\n"
            }
            ErrorCode::E1003 => {
                "A `(` was opened but the line ended before the matching `)`.\n\n\
                 Example:\n    lispy> + 1 (* 2 3\n"
            }
            ErrorCode::E1004 => {
                "The line contains more input after a complete expression.\n\
                 In the arithmetic dialect a stray `)` is the usual cause.\n\n\
                 Example:\n    lispy> + 1 2)\n"
            }
            ErrorCode::E6001 => {
                "The right operand of `/` evaluated to zero. The result is the\n\
                 value `Error: Division By Zero!` and evaluation stops there.\n\n\
                 Example:\n    lispy> / 10 0\n"
            }
            ErrorCode::E6002 => {
                "The operator position holds something other than `+ - * /`.\n\
                 In the s-expression dialect this happens for any other symbol.\n\n\
                 Example:\n    lispy> (max 1 2)\n"
            }
            ErrorCode::E6003 => {
                "A number literal, or the result of an operation, does not fit in\n\
                 a signed 64-bit integer.\n\n\
                 Example:\n    lispy> + 9223372036854775808 1\n"
            }
        }
    }

    /// Whether this code is reported by the parser front end.
    pub fn is_syntax_error(self) -> bool {
        !matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts `E1001` and `e1001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
