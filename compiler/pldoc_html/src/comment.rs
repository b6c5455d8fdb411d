//! Doc text to HTML.
//!
//! Doc text is split into blocks. Lines at the base indent (the indent of
//! the first non-blank line) form paragraphs, separated by blank lines. A
//! line indented deeper than the base opens a preformatted block that runs
//! until the next non-blank line back at the base indent. Inside the block
//! the indent of its first line is trimmed, so nested indentation survives.

use pldoc_ir::CommentGroup;

use crate::emitter::{Emitter, StringEmitter};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Block {
    Para,
    Pre { trim: usize },
}

/// Format a declaration's doc comment. Missing docs render as nothing.
pub fn format_doc(doc: Option<&CommentGroup>) -> String {
    doc.map(|group| format_comment(&group.text()))
        .unwrap_or_default()
}

/// Format doc text as `<p>` and `<pre>` blocks, one per line of output.
pub fn format_comment(text: &str) -> String {
    let base = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .map_or(0, indent_of);

    let mut out = BlockWriter::default();
    let mut block = Block::Para;
    for line in text.lines() {
        if line.trim().is_empty() {
            match block {
                Block::Para => out.flush(block),
                Block::Pre { .. } => out.lines.push(""),
            }
            continue;
        }

        let indent = indent_of(line);
        if indent > base {
            if block == Block::Para {
                out.flush(block);
                block = Block::Pre { trim: indent };
            }
        } else if let Block::Pre { .. } = block {
            out.flush(block);
            block = Block::Para;
        }

        out.lines.push(match block {
            Block::Para => line.trim(),
            Block::Pre { trim } => trim_spaces(line, trim),
        });
    }
    out.flush(block);
    out.emitter.output()
}

#[derive(Default)]
struct BlockWriter<'a> {
    emitter: StringEmitter,
    lines: Vec<&'a str>,
}

impl BlockWriter<'_> {
    /// Emit the buffered lines as one block.
    fn flush(&mut self, block: Block) {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            return;
        }

        if !self.emitter.is_empty() {
            self.emitter.emit_newline();
        }
        let tag = match block {
            Block::Para => "p",
            Block::Pre { .. } => "pre",
        };
        self.emitter.open(tag, &[]);
        for (i, line) in self.lines.drain(..).enumerate() {
            if i > 0 {
                self.emitter.emit_newline();
            }
            self.emitter.emit_text(line);
        }
        self.emitter.close(tag);
    }
}

/// Number of leading spaces.
fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Remove up to `n` leading spaces.
fn trim_spaces(line: &str, n: usize) -> &str {
    let cut = indent_of(line).min(n);
    &line[cut..]
}

#[cfg(test)]
mod tests;
