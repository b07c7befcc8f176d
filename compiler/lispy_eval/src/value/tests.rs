use pretty_assertions::assert_eq;

use super::*;

#[test]
fn numbers_print_in_decimal() {
    assert_eq!(Value::Number(42).to_string(), "42");
    assert_eq!(Value::Number(-7).to_string(), "-7");
    assert_eq!(Value::Number(i64::MIN).to_string(), "-9223372036854775808");
}

#[test]
fn errors_print_with_prefix() {
    assert_eq!(
        Value::Error(EvalErrorKind::DivisionByZero).to_string(),
        "Error: Division By Zero!"
    );
    assert_eq!(
        Value::Error(EvalErrorKind::UnknownOperator).to_string(),
        "Error: Invalid Operator!"
    );
    assert_eq!(
        Value::Error(EvalErrorKind::Overflow).to_string(),
        "Error: Integer Overflow!"
    );
}

#[test]
fn error_codes_are_runtime_phase() {
    for kind in [
        EvalErrorKind::DivisionByZero,
        EvalErrorKind::UnknownOperator,
        EvalErrorKind::Overflow,
    ] {
        assert!(kind.error_code().as_str().starts_with("E6"));
        assert!(!kind.error_code().is_syntax_error());
    }
}

#[test]
fn error_kinds_convert_to_values() {
    assert!(!Value::Number(3).is_error());
    let err = Value::from(EvalErrorKind::Overflow);
    assert!(err.is_error());
    assert_eq!(err, Value::Error(EvalErrorKind::Overflow));
}
