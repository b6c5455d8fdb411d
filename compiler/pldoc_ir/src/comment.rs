//! Comments and comment groups.
//!
//! Comments never reach the parser as ordinary tokens. The parser collects
//! adjacent comments into a [`CommentGroup`] and attaches the group to the
//! declaration it documents. [`CommentGroup::text`] produces the canonical
//! doc text the renderer shows.

use std::fmt;

use super::{Span, Spanned};

/// A source comment, markers included.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Comment {
    /// Raw text including `--` or `/*` and `*/`.
    pub text: String,
    /// Offset of the first dash or slash.
    pub start: u32,
}

impl Comment {
    #[inline]
    pub fn new(text: impl Into<String>, start: u32) -> Self {
        Comment {
            text: text.into(),
            start,
        }
    }

    /// Comment text with its markers removed.
    ///
    /// Line comments also lose one leading space.
    fn body(&self) -> &str {
        let text = self.text.as_str();
        if let Some(rest) = text.strip_prefix("--") {
            rest.strip_prefix(' ').unwrap_or(rest)
        } else if let Some(rest) = text.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            text
        }
    }
}

impl Spanned for Comment {
    fn span(&self) -> Span {
        Span::with_len(self.start, self.text.len())
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.text, self.start)
    }
}

/// A non-empty run of adjacent comments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

impl CommentGroup {
    /// Create a group. Returns `None` for an empty list.
    pub fn new(list: Vec<Comment>) -> Option<Self> {
        if list.is_empty() {
            None
        } else {
            Some(CommentGroup { list })
        }
    }

    /// The canonical doc text of the group.
    ///
    /// Markers and the first space of line comments are removed, trailing
    /// whitespace is trimmed on every line, leading blank lines are dropped
    /// and interior runs of blank lines collapse to one. A non-empty result
    /// always ends with a newline.
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(10);
        for comment in &self.list {
            for line in comment.body().split('\n') {
                let line = line.trim_end_matches([' ', '\t', '\n', '\r']);
                let prev_blank = lines.last().map_or(true, |l| l.is_empty());
                if !line.is_empty() || !prev_blank {
                    lines.push(line);
                }
            }
        }

        let mut out = String::new();
        for line in &lines {
            out.push_str(line);
            out.push('\n');
        }
        // A trailing blank line only contributes its terminator.
        if lines.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }
}

impl Spanned for CommentGroup {
    fn span(&self) -> Span {
        match (self.list.first(), self.list.last()) {
            (Some(first), Some(last)) => Span::new(first.start, last.end()),
            _ => Span::DUMMY,
        }
    }
}
