#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lispy_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn operator_expected() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("expected '+', '-', '*' or '/' at '1'")
        .with_label(Span::new(0, 1), "expected an operator")
        .with_suggestion("write the operator first: `+ 1 2`")
}

#[test]
fn snippet_with_source() {
    let emitter = plain().with_source("1 + 2").with_file_path("<stdin>");
    let text = render(emitter, &operator_expected());
    let expected = "\
error[E1001]: expected '+', '-', '*' or '/' at '1'
 --> <stdin>:1:1
  |
1 | 1 + 2
  | ^ expected an operator
  |
  = help: write the operator first: `+ 1 2`
";
    assert_eq!(text, expected);
}

#[test]
fn colored_locator_keeps_file_path() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false)
        .with_source("1 + 2")
        .with_file_path("session.lispy");
    let text = render(emitter, &operator_expected());
    let arrow = format!("{}-->{} session.lispy:1:1\n", colors::SECONDARY, colors::RESET);
    assert!(text.contains(&arrow), "{text:?}");
}

#[test]
fn underline_spans_multiple_columns() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("integer overflow")
        .with_label(Span::new(2, 7), "too large");
    let text = render(plain().with_source("+ 99999 1"), &diag);
    assert!(text.contains("  |   ^^^^^ too large\n"), "{text}");
    assert!(text.contains(" --> <input>:1:3\n"), "{text}");
}

#[test]
fn end_of_input_gets_single_caret() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unclosed delimiter")
        .with_label(Span::new(6, 6), "expected ')'")
        .with_secondary_label(Span::new(2, 3), "unclosed '(' opened here");
    let text = render(plain().with_source("+ (* 2"), &diag);
    let expected = "\
error[E1003]: unclosed delimiter
 --> <input>:1:7
  |
1 | + (* 2
  |       ^ expected ')'
1 | + (* 2
  |   - unclosed '(' opened here
";
    assert_eq!(text, expected);
}

#[test]
fn falls_back_to_raw_spans_without_source() {
    let text = render(plain(), &operator_expected());
    assert!(text.contains("  --> 0..1: expected an operator"), "{text}");
    assert!(text.contains("= help:"), "{text}");
}

#[test]
fn notes_render_before_help() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression")
        .with_note("an operator needs at least one operand")
        .with_suggestion("add a number");
    let text = render(plain(), &diag);
    let note = text.find("= note:").unwrap();
    let help = text.find("= help:").unwrap();
    assert!(note < help);
}

#[test]
fn colors_only_when_enabled() {
    let colored = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    assert!(render(colored, &operator_expected()).contains("\x1b["));

    let auto_no_tty = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, false);
    assert!(!render(auto_no_tty, &operator_expected()).contains("\x1b["));
}

#[test]
fn emit_all_writes_each() {
    let mut emitter = plain();
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E0001).with_message("first"),
        Diagnostic::error(ErrorCode::E1004).with_message("second"),
    ]);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("error[E0001]: first"));
    assert!(text.contains("error[E1004]: second"));
}

#[test]
fn set_source_replaces_previous_line() {
    let mut emitter = plain().with_source("first line");
    emitter.set_source("+ 1 )");
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("unexpected ')'")
        .with_label(Span::new(4, 5), "unexpected");
    let text = render(emitter, &diag);
    assert!(text.contains("1 | + 1 )"), "{text}");
    assert!(!text.contains("first line"), "{text}");
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert_eq!(ColorMode::from_name("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_name("sometimes"), None);
}
