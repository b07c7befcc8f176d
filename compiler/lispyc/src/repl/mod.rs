//! The read-eval-print loop.
//!
//! Each line is read into an owned `String`, parsed, evaluated and printed.
//! The token list and tree live only for that iteration. Syntax errors are
//! rendered on the error writer and the loop carries on.

use std::io::{self, Write};

use lispy_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lispy_eval::{evaluate, Value};
use lispy_ir::Dialect;
use lispy_parse::{parse, SyntaxError};
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::line_reader::LineReader;


pub const BANNER: &str = "Lispy Version 0.0.0.0.1\nPress C-c to Exit\n";
pub const PROMPT: &str = "lispy> ";

/// A failure that ends the REPL.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Readline(#[from] ReadlineError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Parse and evaluate one line.
pub fn eval_line(source: &str, dialect: Dialect) -> Result<Value, SyntaxError> {
    let tree = parse(source, dialect)?;
    Ok(evaluate(&tree))
}

/// Run the loop until the reader reports end of input.
pub fn run_repl<R, O, E>(
    reader: &mut R,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
    dialect: Dialect,
) -> Result<(), ReplError>
where
    R: LineReader,
    O: Write,
    E: Write,
{
    writeln!(out, "{BANNER}")?;
    out.flush()?;

    while let Some(line) = reader.read_line(PROMPT)? {
        reader.record_history(&line)?;
        debug!(line = %line, "read");

        match eval_line(&line, dialect) {
            Ok(value) => {
                if let Value::Error(kind) = value {
                    debug!(code = %kind.error_code(), "evaluation error");
                }
                writeln!(out, "{value}")?;
                out.flush()?;
            }
            Err(err) => {
                debug!(code = %err.code, "syntax error");
                emitter.set_source(line.as_str());
                emitter.emit(&err.to_diagnostic());
                emitter.flush();
            }
        }
    }

    debug!("end of input");
    Ok(())
}
