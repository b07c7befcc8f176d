//! Command handlers for the `lispy` binary.
//!
//! Handlers write to the writers they are given and return whether the
//! command succeeded. `main` maps that to the exit status.

use std::io::{self, IsTerminal, Write};

use lispy_diagnostic::emitter::TerminalEmitter;

use crate::config::Options;
use crate::line_reader::EditorReader;
use crate::repl::{run_repl, ReplError};

mod debug;
mod eval;
mod explain;


pub use debug::{lex_expr, parse_expr};
pub use eval::eval_expr;
pub use explain::explain_error;

pub const USAGE: &str = "\
Usage: lispy [command] [options]

Commands:
  repl                 Start the interactive REPL (default)
  eval <expr>          Evaluate one expression and print the result
  parse <expr>         Print the parse tree of an expression
  lex <expr>           Print the token stream of an expression
  explain <code>       Explain an error code (e.g., E1001)
  help                 Show this help message

Options:
  --dialect=<name>     Grammar: arithmetic (default), sexpr
  --color=<mode>       Diagnostics color: auto (default), always, never

Examples:
  lispy
  lispy --dialect=sexpr
  lispy eval \"* 2 (+ 1 2) 4\"
  lispy parse \"+ 1 (* 2 3)\"
  lispy explain E1003
";

/// Diagnostics emitter on stderr for the given options.
pub fn stderr_emitter(options: &Options) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(options.color, io::stderr().is_terminal())
}

/// Run the interactive REPL on the terminal.
pub fn run_interactive(options: &Options) -> Result<(), ReplError> {
    let mut reader = EditorReader::new()?;
    let mut emitter = stderr_emitter(options).with_file_path("<stdin>");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_repl(&mut reader, &mut out, &mut emitter, options.dialect)
}

/// Print usage to `out`.
pub fn print_usage<O: Write>(out: &mut O) -> io::Result<()> {
    out.write_all(USAGE.as_bytes())
}
