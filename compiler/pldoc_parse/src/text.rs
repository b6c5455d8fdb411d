//! Reassembling type and default-value text from tokens.
//!
//! Types and default values are kept as text, not parsed. A word token
//! (identifier, number, string, keyword) is separated by a single space
//! from a preceding word or closing `)`; everything else is glued on
//! directly. So `varchar2 ( 20 ) not null` reads back as
//! `varchar2(20) not null` and `t % rowtype` as `t%rowtype`. String
//! literals get their quotes back.

use pldoc_ir::{Ident, Span, TokenKind};

#[derive(Default, Debug)]
pub(crate) struct TypeText {
    text: String,
    start: Option<u32>,
    end: u32,
    /// The last token was a word or `)`, so a following word needs a space.
    space_before_word: bool,
}

impl TypeText {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one token read from `span`.
    pub(crate) fn push(&mut self, kind: TokenKind, lit: &str, span: Span) {
        let word = kind.is_word();
        if word && self.space_before_word {
            self.text.push(' ');
        }
        if kind == TokenKind::String {
            self.text.push('\'');
            self.text.push_str(lit);
            self.text.push('\'');
        } else {
            self.text.push_str(lit);
        }
        self.space_before_word = word || kind == TokenKind::RParen;
        self.extend(span);
    }

    /// Append already assembled text, such as a parenthesized group.
    pub(crate) fn push_group(&mut self, group: &str, span: Span) {
        self.text.push_str(group);
        self.space_before_word = group.ends_with(')');
        self.extend(span);
    }

    fn extend(&mut self, span: Span) {
        self.start.get_or_insert(span.start);
        self.end = span.end;
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }

    /// The text as an identifier; `fallback` is the start offset when
    /// nothing was pushed.
    pub(crate) fn into_ident(self, fallback: u32) -> Ident {
        let start = self.start.unwrap_or(fallback);
        Ident::spanning(self.text, Span::new(start, self.end.max(start)))
    }

    /// `None` when nothing was pushed.
    pub(crate) fn into_option(self) -> Option<Ident> {
        let start = self.start?;
        Some(Ident::spanning(self.text, Span::new(start, self.end.max(start))))
    }
}
