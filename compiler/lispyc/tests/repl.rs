//! End-to-end REPL sessions driven through a scripted reader.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use lispy_diagnostic::emitter::{ColorMode, TerminalEmitter};
use lispy_ir::Dialect;
use lispyc::{run_repl, ScriptedReader, BANNER, PROMPT};
use pretty_assertions::assert_eq;

struct Session {
    stdout: String,
    stderr: String,
    reader: ScriptedReader,
}

fn session(dialect: Dialect, lines: &[&str]) -> Session {
    let mut reader = ScriptedReader::new(lines.iter().copied());
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_file_path("<stdin>");
    run_repl(&mut reader, &mut out, &mut emitter, dialect).unwrap();
    Session {
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(emitter.into_inner()).unwrap(),
        reader,
    }
}

fn results(session: &Session) -> Vec<&str> {
    session
        .stdout
        .strip_prefix(&format!("{BANNER}\n"))
        .unwrap()
        .lines()
        .collect()
}

#[test]
fn tutorial_session() {
    let s = session(
        Dialect::Arithmetic,
        &["+ 1 2 3", "* 2 (+ 1 2) 4", "/ 10 0", "+ 1"],
    );
    assert_eq!(
        results(&s),
        vec!["6", "24", "Error: Division By Zero!", "1"]
    );
    assert!(s.stderr.is_empty());
}

#[test]
fn syntax_error_does_not_end_the_loop() {
    let s = session(Dialect::Arithmetic, &["1 + 2", "- 10 4"]);
    assert_eq!(results(&s), vec!["6"]);
    let expected = "\
error[E1001]: expected '+', '-', '*' or '/' at '1'
 --> <stdin>:1:1
  |
1 | 1 + 2
  | ^ expected an operator
  |
  = help: write the operator first: `+ 1 2`
";
    assert_eq!(s.stderr, expected);
}

#[test]
fn every_line_goes_to_history() {
    let s = session(Dialect::Arithmetic, &["+ 1 2", "oops", ""]);
    assert_eq!(s.reader.history(), ["+ 1 2", "oops", ""]);
    // One prompt per line plus the one answered by end of input.
    assert_eq!(s.reader.prompts().len(), 4);
    assert!(s.reader.prompts().iter().all(|p| p == PROMPT));
}

#[test]
fn blank_line_is_reported() {
    let s = session(Dialect::Arithmetic, &[""]);
    assert!(results(&s).is_empty());
    assert!(s.stderr.starts_with("error[E1002]"), "{}", s.stderr);
}

#[test]
fn parenthesized_line_needs_sexpr_dialect() {
    let arithmetic = session(Dialect::Arithmetic, &["(+ 1 2)"]);
    assert!(results(&arithmetic).is_empty());
    assert!(arithmetic.stderr.contains("--dialect=sexpr"), "{}", arithmetic.stderr);

    let sexpr = session(Dialect::SExpression, &["(+ 1 2)", "(max 1 2)", "(5)"]);
    assert_eq!(results(&sexpr), vec!["3", "Error: Invalid Operator!", "5"]);
    assert!(sexpr.stderr.is_empty());
}

#[test]
fn overflow_is_a_value() {
    let s = session(
        Dialect::Arithmetic,
        &["+ 9223372036854775807 1", "+ 99999999999999999999", "/ -9223372036854775808 -1"],
    );
    assert_eq!(
        results(&s),
        vec![
            "Error: Integer Overflow!",
            "Error: Integer Overflow!",
            "Error: Integer Overflow!",
        ]
    );
}

#[test]
fn empty_session_prints_only_banner() {
    let s = session(Dialect::Arithmetic, &[]);
    assert_eq!(s.stdout, "Lispy Version 0.0.0.0.1\nPress C-c to Exit\n\n");
}
