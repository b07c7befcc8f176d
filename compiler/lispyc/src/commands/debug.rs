//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::{self, Write};

use lispy_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lispy_ir::Dialect;
use lispy_lexer::lex;
use lispy_parse::parse_tokens;
use tracing::debug;

/// Parse `source` and print the tree, one node per line.
pub fn parse_expr<O: Write, E: Write>(
    source: &str,
    dialect: Dialect,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> io::Result<bool> {
    let tokens = lex(source);
    match parse_tokens(&tokens, source, dialect) {
        Ok(tree) => {
            debug!(nodes = tree.node_count(), "parsed");
            write!(out, "{tree}")?;
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

/// Lex `source` and print the token stream.
pub fn lex_expr<O: Write>(source: &str, out: &mut O) -> io::Result<bool> {
    for token in &lex(source) {
        writeln!(out, "{:?} @ {}", token.kind, token.span)?;
    }
    Ok(true)
}
