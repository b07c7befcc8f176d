#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lispy_ir::{Dialect, Span};
use lispy_parse::parse;
use pretty_assertions::assert_eq;

use super::*;

fn eval(source: &str) -> Value {
    evaluate(&parse(source, Dialect::Arithmetic).unwrap())
}

fn eval_sexpr(source: &str) -> Value {
    evaluate(&parse(source, Dialect::SExpression).unwrap())
}

fn printed(source: &str) -> String {
    eval(source).to_string()
}

#[test]
fn folds_left() {
    assert_eq!(eval("+ 1 2 3"), Value::Number(6));
    assert_eq!(eval("- 10 3 2"), Value::Number(5));
    assert_eq!(eval("/ 100 5 2"), Value::Number(10));
}

#[test]
fn nested() {
    assert_eq!(eval("* 2 (+ 1 2) 4"), Value::Number(24));
    assert_eq!(eval("- (* 10 10) (+ 1 1 1)"), Value::Number(97));
}

#[test]
fn single_operand_is_identity() {
    assert_eq!(eval("+ 1"), Value::Number(1));
    assert_eq!(eval("- 5"), Value::Number(5));
}

#[test]
fn negative_literals() {
    assert_eq!(eval("+ -5 3"), Value::Number(-2));
    assert_eq!(eval("--3"), Value::Number(-3));
    assert_eq!(eval("- -10 -4"), Value::Number(-6));
}

#[test]
fn leading_minus_is_the_operator() {
    assert_eq!(eval("-1 2"), Value::Number(-1));
    assert_eq!(eval("-5"), Value::Number(5));
    assert_eq!(eval("* 2 (-10 3)"), Value::Number(14));
    assert_eq!(eval("+ 1 (-2 3)"), Value::Number(0));
}

#[test]
fn printed_results() {
    assert_eq!(printed("+ 1 2 3"), "6");
    assert_eq!(printed("/ 10 0"), "Error: Division By Zero!");
    assert_eq!(
        printed("+ 99999999999999999999 1"),
        "Error: Integer Overflow!"
    );
}

#[test]
fn literal_out_of_range() {
    assert_eq!(
        eval("+ 9223372036854775808"),
        Value::Error(EvalErrorKind::Overflow)
    );
    assert_eq!(eval("+ -9223372036854775808"), Value::Number(i64::MIN));
}

#[test]
fn first_error_wins() {
    assert_eq!(
        eval("+ (/ 1 0) 9223372036854775808"),
        Value::Error(EvalErrorKind::DivisionByZero)
    );
    assert_eq!(
        eval("+ 1 (* 9223372036854775807 2) (/ 1 0)"),
        Value::Error(EvalErrorKind::Overflow)
    );
}

#[test]
fn sexpr_dialect() {
    assert_eq!(eval_sexpr("(+ 1 2)"), Value::Number(3));
    assert_eq!(eval_sexpr("+ 1 (* 2 3)"), Value::Number(7));
    assert_eq!(eval_sexpr("(5)"), Value::Number(5));
    assert_eq!(eval_sexpr("5"), Value::Number(5));
    assert_eq!(eval_sexpr("((+ 1 2))"), Value::Number(3));
}

#[test]
fn sexpr_unknown_forms() {
    let unknown = Value::Error(EvalErrorKind::UnknownOperator);
    assert_eq!(eval_sexpr("foo"), unknown);
    assert_eq!(eval_sexpr("(foo 1 2)"), unknown);
    assert_eq!(eval_sexpr("(foo 1)"), unknown);
    assert_eq!(eval_sexpr("()"), unknown);
    assert_eq!(eval_sexpr(""), unknown);
    assert_eq!(eval_sexpr("(+)"), unknown);
    assert_eq!(eval_sexpr("1 2"), unknown);
    // Operand errors still come first.
    assert_eq!(
        eval_sexpr("(foo (/ 1 0) 2)"),
        Value::Error(EvalErrorKind::DivisionByZero)
    );
}

#[test]
fn bare_leaves() {
    let number = ParseNode::leaf(Rule::Number, "12", Span::new(0, 2));
    assert_eq!(evaluate(&number), Value::Number(12));
    let op = ParseNode::leaf(Rule::Operator, "+", Span::new(0, 1));
    assert_eq!(evaluate(&op), Value::Error(EvalErrorKind::UnknownOperator));
}

#[test]
fn deep_nesting() {
    let depth = 50_000;
    let mut source = String::from("+ 1 ");
    for _ in 0..depth {
        source.push_str("(+ 1 ");
    }
    source.push('0');
    for _ in 0..depth {
        source.push(')');
    }
    assert_eq!(eval(&source), Value::Number(depth + 1));
}
