//! Binary operator application.
//!
//! All arithmetic is checked: a result outside `i64` becomes
//! `Error(Overflow)` instead of wrapping.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::{EvalErrorKind, Value};


/// The four arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Apply to two numbers.
    pub fn apply(self, x: i64, y: i64) -> Value {
        match self {
            Operator::Add => checked_arith(x.checked_add(y)),
            Operator::Sub => checked_arith(x.checked_sub(y)),
            Operator::Mul => checked_arith(x.checked_mul(y)),
            // Truncates toward zero. `i64::MIN / -1` is the one overflow.
            Operator::Div => checked_div(y == 0, || x.checked_div(y)),
        }
    }
}

impl FromStr for Operator {
    type Err = EvalErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(EvalErrorKind::UnknownOperator),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[inline]
fn checked_arith(result: Option<i64>) -> Value {
    result.map_or(EvalErrorKind::Overflow.into(), Value::Number)
}

/// Division with the zero guard checked before dividing.
#[inline]
fn checked_div<F>(is_zero: bool, op: F) -> Value
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        EvalErrorKind::DivisionByZero.into()
    } else {
        checked_arith(op())
    }
}

/// Combine two values with the operator named by `op`.
///
/// An error operand wins over everything else, the left one first. Only
/// then is `op` looked up, so `foo` with a failing operand still reports
/// the operand's error.
pub fn apply_operator(x: Value, op: &str, y: Value) -> Value {
    let (a, b) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(a), Value::Number(b)) => (a, b),
    };
    let result = match op.parse::<Operator>() {
        Ok(operator) => operator.apply(a, b),
        Err(kind) => kind.into(),
    };
    trace!(op, lhs = a, rhs = b, %result, "apply");
    result
}
