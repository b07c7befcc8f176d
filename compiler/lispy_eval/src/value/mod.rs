//! Runtime values.

use std::fmt;

use lispy_diagnostic::ErrorCode;

#[cfg(test)]
mod tests;

/// Why an evaluation failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EvalErrorKind {
    DivisionByZero,
    UnknownOperator,
    Overflow,
}

impl EvalErrorKind {
    /// The message printed after `Error: `.
    pub fn message(self) -> &'static str {
        match self {
            EvalErrorKind::DivisionByZero => "Division By Zero!",
            EvalErrorKind::UnknownOperator => "Invalid Operator!",
            EvalErrorKind::Overflow => "Integer Overflow!",
        }
    }

    pub fn error_code(self) -> ErrorCode {
        match self {
            EvalErrorKind::DivisionByZero => ErrorCode::E6001,
            EvalErrorKind::UnknownOperator => ErrorCode::E6002,
            EvalErrorKind::Overflow => ErrorCode::E6003,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of evaluating an expression: a number or an error.
///
/// Errors are ordinary values. They flow through operator application
/// unchanged and are printed like any other result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Number(i64),
    Error(EvalErrorKind),
}

impl Value {
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<EvalErrorKind> for Value {
    fn from(kind: EvalErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(kind) => write!(f, "Error: {kind}"),
        }
    }
}
