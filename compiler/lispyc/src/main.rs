//! Lispy CLI

use std::io;
use std::process::ExitCode;

use lispyc::commands::{
    eval_expr, explain_error, lex_expr, parse_expr, print_usage, run_interactive, stderr_emitter,
    USAGE,
};
use lispyc::tracing_setup::init_tracing;
use lispyc::{Command, Config};

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let options = config.options;

    let result = match &config.command {
        Command::Repl => match run_interactive(&options) {
            Ok(()) => Ok(true),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        Command::Eval(source) => eval_expr(
            source,
            options.dialect,
            &mut io::stdout().lock(),
            &mut stderr_emitter(&options),
        ),
        Command::Parse(source) => parse_expr(
            source,
            options.dialect,
            &mut io::stdout().lock(),
            &mut stderr_emitter(&options),
        ),
        Command::Lex(source) => lex_expr(source, &mut io::stdout().lock()),
        Command::Explain(code) => {
            explain_error(code, &mut io::stdout().lock(), &mut io::stderr())
        }
        Command::Help => print_usage(&mut io::stdout().lock()).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
