//! Output Emitter
//!
//! Abstraction for HTML output. Markup goes through [`Emitter::emit`]
//! untouched; text goes through [`Emitter::emit_text`] and is escaped.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"`, and `'` for use in HTML text or attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Trait for emitting HTML.
///
/// The page writer talks to an emitter. Only [`emit`](Emitter::emit) and
/// [`emit_newline`](Emitter::emit_newline) are required; the tag helpers
/// are built on top of them.
pub trait Emitter {
    /// Emit raw markup.
    fn emit(&mut self, html: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit text, escaped.
    fn emit_text(&mut self, text: &str) {
        self.emit(&escape(text));
    }

    /// Emit an opening tag. Attribute values are escaped.
    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.emit("<");
        self.emit(tag);
        for (name, value) in attrs {
            self.emit(" ");
            self.emit(name);
            self.emit("=\"");
            self.emit_text(value);
            self.emit("\"");
        }
        self.emit(">");
    }

    /// Emit a closing tag.
    fn close(&mut self, tag: &str) {
        self.emit("</");
        self.emit(tag);
        self.emit(">");
    }

    /// Emit `<tag attrs>text</tag>` with `text` escaped.
    fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.open(tag, attrs);
        self.emit_text(text);
        self.close(tag);
    }
}

/// String-based emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Ensure the output ends with a single newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, html: &str) {
        self.buffer.push_str(html);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }
}
