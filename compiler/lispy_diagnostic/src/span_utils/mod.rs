//! Line and column lookup for spans.
//!
//! REPL input is normally a single line, but `eval` and `parse` accept any
//! string, so the table handles embedded newlines too.

use lispy_ir::Span;


/// Pre-computed line start offsets for one source string.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build the table in one pass over `source`.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// 0-based index of the line containing `offset`.
    fn line_index(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// 1-based (line, column). Columns count characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (usize, usize) {
        let offset = (offset as usize).min(source.len());
        let idx = self.line_index(offset);
        let start = self.offsets.get(idx).copied().unwrap_or(0);
        let col = source.get(start..offset).map_or(0, |s| s.chars().count());
        (idx + 1, col + 1)
    }

    /// Text of the 1-based `line`, without its trailing newline.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = line.checked_sub(1).and_then(|i| self.offsets.get(i)) else {
            return "";
        };
        let end = self.offsets.get(line).map_or(source.len(), |&next| next - 1);
        source
            .get(start..end)
            .map_or("", |s| s.strip_suffix('\r').unwrap_or(s))
    }
}

/// 1-based (line, column) of the start of `span`.
///
/// Convenience for one-off lookups; build a [`LineOffsetTable`] when
/// resolving several spans against the same source.
pub fn span_to_line_col(source: &str, span: Span) -> (usize, usize) {
    LineOffsetTable::build(source).offset_to_line_col(source, span.start)
}
