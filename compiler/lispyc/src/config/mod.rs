//! Command-line configuration.
//!
//! Arguments are parsed by hand: a subcommand, then positional arguments
//! and `--name=value` options in any order. Positional arguments of
//! `eval`, `parse` and `lex` are joined with spaces, so both
//! `lispy eval "+ 1 2"` and `lispy eval + 1 2` work.

use lispy_diagnostic::emitter::ColorMode;
use lispy_ir::Dialect;


/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Eval(String),
    Parse(String),
    Lex(String),
    Explain(String),
    Help,
}

/// Options shared by every command.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub dialect: Dialect,
    pub color: ColorMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub options: Options,
}

/// A malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `--{option}` (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl Config {
    /// Read the process arguments and environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        // https://no-color.org: set and non-empty disables color.
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        parse_args(std::env::args().skip(1), no_color)
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I, no_color: bool) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();

    let name = match args.peek() {
        Some(first) if first == "--help" || !first.starts_with("--") => args.next(),
        _ => None,
    };

    let mut options = Options::default();
    let mut positional = Vec::new();
    for arg in args {
        if let Some(option) = arg.strip_prefix("--") {
            apply_option(&mut options, option)?;
        } else {
            positional.push(arg);
        }
    }
    if no_color {
        options.color = ColorMode::Never;
    }

    let command = match name.as_deref() {
        None | Some("repl") => {
            no_extra_arguments(&positional)?;
            Command::Repl
        }
        Some("eval") => Command::Eval(expression("eval", &positional)?),
        Some("parse") => Command::Parse(expression("parse", &positional)?),
        Some("lex") => Command::Lex(expression("lex", &positional)?),
        Some("explain") => match positional.as_slice() {
            [] => {
                return Err(ConfigError::MissingArgument {
                    command: "explain",
                    what: "an error code",
                })
            }
            [code] => Command::Explain(code.clone()),
            [_, extra, ..] => return Err(ConfigError::UnexpectedArgument(extra.clone())),
        },
        Some("help" | "-h" | "--help") => Command::Help,
        Some(other) => return Err(ConfigError::UnknownCommand(other.to_string())),
    };

    Ok(Config { command, options })
}

fn apply_option(options: &mut Options, option: &str) -> Result<(), ConfigError> {
    let (key, value) = option.split_once('=').unwrap_or((option, ""));
    match key {
        "dialect" => {
            options.dialect = Dialect::from_name(value).ok_or_else(|| ConfigError::InvalidValue {
                option: "dialect",
                value: value.to_string(),
                expected: "arithmetic or sexpr",
            })?;
        }
        "color" => {
            options.color = ColorMode::from_name(value).ok_or_else(|| ConfigError::InvalidValue {
                option: "color",
                value: value.to_string(),
                expected: "auto, always or never",
            })?;
        }
        _ => return Err(ConfigError::UnknownOption(format!("--{option}"))),
    }
    Ok(())
}

fn expression(command: &'static str, positional: &[String]) -> Result<String, ConfigError> {
    if positional.is_empty() {
        return Err(ConfigError::MissingArgument {
            command,
            what: "an expression",
        });
    }
    Ok(positional.join(" "))
}

fn no_extra_arguments(positional: &[String]) -> Result<(), ConfigError> {
    match positional.first() {
        Some(extra) => Err(ConfigError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}
