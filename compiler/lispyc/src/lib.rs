//! The Lispy REPL and command-line driver.
//!
//! The binary in `main.rs` is a thin shell over this library so the loop,
//! the commands and the argument parser can be driven from tests.

pub mod commands;
pub mod config;
pub mod line_reader;
pub mod repl;
pub mod tracing_setup;

pub use config::{parse_args, Command, Config, ConfigError, Options};
pub use line_reader::{EditorReader, LineReader, ScriptedReader};
pub use repl::{eval_line, run_repl, ReplError, BANNER, PROMPT};
