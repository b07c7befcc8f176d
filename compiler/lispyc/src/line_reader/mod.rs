//! Sources of input lines for the REPL.

use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::repl::ReplError;

#[cfg(test)]
mod tests;

/// Where the REPL gets its lines from.
pub trait LineReader {
    /// Show `prompt` and read one line without its newline.
    ///
    /// Returns `Ok(None)` at end of input, which includes Ctrl-D and Ctrl-C.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError>;

    /// Remember a line so it can be recalled later.
    fn record_history(&mut self, line: &str) -> Result<(), ReplError>;
}

/// Interactive terminal input with line editing and in-memory history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ReplError> {
        Ok(EditorReader {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn record_history(&mut self, line: &str) -> Result<(), ReplError> {
        self.editor.add_history_entry(line)?;
        Ok(())
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    history: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedReader {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Lines recorded so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Every prompt shown, including the one answered by end of input.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReplError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn record_history(&mut self, line: &str) -> Result<(), ReplError> {
        self.history.push(line.to_string());
        Ok(())
    }
}
