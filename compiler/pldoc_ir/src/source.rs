//! Per-file line table.
//!
//! A [`SourceFile`] records the offset of every line start as the scanner
//! passes newlines. Offsets are resolved to 1-based line/column pairs on
//! demand; columns count bytes, not graphemes.

use std::fmt;

/// A resolved source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// File name, as given when the file was opened.
    pub filename: String,
    /// Byte offset, starting at 0.
    pub offset: u32,
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column, starting at 1.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {}; Line: {}; Position: {}",
            self.filename, self.line, self.column
        )
    }
}

/// Line-start table for one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    /// Offsets of the first byte of each line; the first entry is always 0.
    lines: Vec<u32>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            lines: vec![0],
        }
    }

    /// The file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a line start.
    ///
    /// Only offsets strictly past the last recorded line start are kept, so
    /// re-reporting a newline is a no-op.
    pub fn add_line(&mut self, offset: u32) {
        if self.lines.last().is_some_and(|&last| last < offset) {
            self.lines.push(offset);
        }
    }

    /// 1-based line containing `pos`: the greatest line start `<= pos`.
    pub fn line(&self, pos: u32) -> usize {
        // lines[0] == 0 <= pos, so the partition point is at least 1.
        self.lines.partition_point(|&start| start <= pos).max(1)
    }

    /// Resolve `pos` to a full [`Position`].
    pub fn position(&self, pos: u32) -> Position {
        let line = self.line(pos);
        let line_start = self.lines[line - 1];
        Position {
            filename: self.name.clone(),
            offset: pos,
            line,
            column: (pos - line_start) as usize + 1,
        }
    }
}

#[cfg(test)]
mod tests;
