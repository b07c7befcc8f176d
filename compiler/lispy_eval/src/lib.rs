//! Tree-walking evaluator for Lispy.
//!
//! [`evaluate`] walks a [`ParseNode`] produced by `lispy_parse` and folds
//! each application left to right. Evaluation never fails: problems are
//! returned as [`Value::Error`], and the first error reached is the result.

mod operators;
mod value;

pub use operators::{apply_operator, Operator};
pub use value::{EvalErrorKind, Value};

use lispy_ir::{ParseNode, Rule};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

#[cfg(test)]
mod tests;

/// Evaluate a parse tree.
pub fn evaluate(node: &ParseNode) -> Value {
    match node.rule {
        Rule::Number => eval_number(&node.contents),
        Rule::Lispy | Rule::Expression | Rule::SExpr => {
            ensure_sufficient_stack(|| eval_application(node))
        }
        // A symbol on its own names nothing the evaluator knows.
        Rule::Operator | Rule::Symbol | Rule::Delimiter => EvalErrorKind::UnknownOperator.into(),
    }
}

fn eval_number(text: &str) -> Value {
    // Number leaves are always `-?[0-9]+`, so any failure is a range error.
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => EvalErrorKind::Overflow.into(),
    }
}

/// `op a1 a2 ... an` folds `op` over the operands. A single bare operand
/// evaluates to itself.
fn eval_application(node: &ParseNode) -> Value {
    let mut items = node.items();
    let Some(head) = items.next() else {
        return EvalErrorKind::UnknownOperator.into();
    };

    if !head.rule.is_operator_like() {
        return match items.next() {
            None => evaluate(head),
            Some(_) => EvalErrorKind::UnknownOperator.into(),
        };
    }

    let op = head.contents.as_str();
    trace!(rule = %node.rule, op, span = %node.span, "application");
    let Some(first) = items.next() else {
        return EvalErrorKind::UnknownOperator.into();
    };

    let mut acc = evaluate(first);
    for operand in items {
        if acc.is_error() {
            break;
        }
        acc = apply_operator(acc, op, evaluate(operand));
    }

    // With one operand the fold never looks at `op`.
    if !acc.is_error() && op.parse::<Operator>().is_err() {
        return EvalErrorKind::UnknownOperator.into();
    }
    acc
}
