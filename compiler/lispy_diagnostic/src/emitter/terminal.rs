//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With source attached, labels are drawn under the offending line:
//!
//! ```text
//! error[E1001]: expected '+', '-', '*' or '/' at '1'
//!  --> <stdin>:1:1
//!   |
//! 1 | 1 + 2
//!   | ^ expected an operator
//!   |
//!   = help: write the operator first: `+ 1 2`
//! ```
//!
//! Without source, each label falls back to its raw span.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::{ColorMode, DiagnosticEmitter};

#[cfg(test)]
mod tests;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with an explicit color mode.
    ///
    /// `is_tty` decides colors for [`ColorMode::Auto`] only.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text labels point into.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Name shown in the ` --> name:line:col` locator.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Swap the source text in place. The REPL reuses one emitter per line.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label_text(&mut self, label: &Label, text: &str) {
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(text, color);
    }

    /// Render labels as underlined source snippets.
    fn emit_snippets(&mut self, diagnostic: &Diagnostic, source: &str) {
        let table = LineOffsetTable::build(source);
        let positions: Vec<(usize, usize)> = diagnostic
            .labels
            .iter()
            .map(|l| table.offset_to_line_col(source, l.span.start))
            .collect();
        let gutter = positions
            .iter()
            .map(|&(line, _)| line.to_string().len())
            .max()
            .unwrap_or(1);
        let pad = " ".repeat(gutter);

        if let Some(&(line, col)) = diagnostic
            .labels
            .iter()
            .position(|l| l.is_primary)
            .and_then(|i| positions.get(i))
        {
            let _ = write!(self.writer, "{pad}");
            self.write_colored("-->", colors::SECONDARY);
            let path = self.file_path.as_deref().unwrap_or("<input>");
            let _ = writeln!(self.writer, " {path}:{line}:{col}");
        }

        let bar = format!("{pad} |");
        self.write_colored(&bar, colors::SECONDARY);
        let _ = writeln!(self.writer);

        for (label, &(line, col)) in diagnostic.labels.iter().zip(&positions) {
            let text = table.line_text(source, line);
            let line_no = format!("{line:>gutter$} |");
            self.write_colored(&line_no, colors::SECONDARY);
            let _ = writeln!(self.writer, " {text}");

            let line_chars = text.chars().count();
            let span_chars = source
                .get(label.span.to_range())
                .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
            let width = span_chars.min(line_chars.saturating_sub(col - 1)).max(1);
            let marker = if label.is_primary { "^" } else { "-" };

            self.write_colored(&bar, colors::SECONDARY);
            let _ = write!(self.writer, " {}", " ".repeat(col - 1));
            let underline = format!("{} {}", marker.repeat(width), label.message);
            self.write_label_text(label, underline.trim_end());
            let _ = writeln!(self.writer);
        }

        if !diagnostic.notes.is_empty() || !diagnostic.suggestions.is_empty() {
            self.write_colored(&bar, colors::SECONDARY);
            let _ = writeln!(self.writer);
        }
    }

    /// Render labels as raw spans when no source is attached.
    fn emit_span_labels(&mut self, diagnostic: &Diagnostic) {
        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_label_text(label, &label.message);
            let _ = writeln!(self.writer);
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if !diagnostic.labels.is_empty() {
            match self.source.take() {
                Some(source) => {
                    self.emit_snippets(diagnostic, &source);
                    self.source = Some(source);
                }
                None => self.emit_span_labels(diagnostic),
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
