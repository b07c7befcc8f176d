//! The `eval` command: evaluate one expression.

use std::io::{self, Write};

use lispy_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lispy_ir::Dialect;

use crate::repl::eval_line;

/// Evaluate `source` and print the result.
///
/// Evaluation errors are results and print like numbers. Only a syntax
/// error makes the command fail.
pub fn eval_expr<O: Write, E: Write>(
    source: &str,
    dialect: Dialect,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> io::Result<bool> {
    match eval_line(source, dialect) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Err(err) => {
            emitter.set_source(source);
            emitter.emit(&err.to_diagnostic());
            emitter.flush();
            Ok(false)
        }
    }
}
