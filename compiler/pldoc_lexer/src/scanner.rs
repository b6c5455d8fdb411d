//! The scanner: source text to tokens.

use std::borrow::Cow;
use std::fmt;

use pldoc_ir::token::lookup_keyword;
use pldoc_ir::{SourceFile, TokenKind};

use crate::cursor::Cursor;
use crate::{LexError, LexErrorKind};

/// A scanned token.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    /// Offset of the token's first byte.
    pub pos: u32,
    /// Offset just past the token's source text, closing quote included.
    pub end: u32,
    pub kind: TokenKind,
    /// Lexeme. Owned only when the scanner had to rewrite it
    /// (lowercasing, carriage-return stripping), so its length need not
    /// match `end - pos`.
    pub lit: Cow<'a, str>,
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}..{}", self.kind, self.lit, self.pos, self.end)
    }
}

/// Scanner over one source file.
///
/// Owns the file's line table; call [`into_file`](Scanner::into_file) once
/// scanning is done to keep it.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    file: SourceFile,
}

impl<'a> Scanner<'a> {
    /// Validate `src` and position the scanner at its start.
    pub fn new(name: &str, src: &'a [u8]) -> Result<Self, LexError> {
        if u32::try_from(src.len()).is_err() {
            return Err(LexError::new(LexErrorKind::TooLarge, 0));
        }
        let text = std::str::from_utf8(src).map_err(|e| {
            let pos = u32::try_from(e.valid_up_to()).unwrap_or(u32::MAX);
            LexError::new(LexErrorKind::InvalidUtf8, pos)
        })?;
        Ok(Scanner {
            cursor: Cursor::new(text),
            file: SourceFile::new(name),
        })
    }

    /// The line table built so far.
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    pub fn into_file(self) -> SourceFile {
        self.file
    }

    /// Source text between two offsets.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Scan the next token. Returns [`TokenKind::Eof`] forever once the
    /// input is exhausted.
    pub fn scan(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let Some(ch) = self.cursor.current_char() else {
            return Ok(self.token(start, TokenKind::Eof, ""));
        };

        if is_ident_start(ch) {
            return Ok(self.identifier(start));
        }
        if ch.is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            let lit = self.cursor.slice_from(start);
            return Ok(self.token(start, TokenKind::Number, lit));
        }

        let next = self.cursor.peek();
        let (kind, len) = match ch {
            '\'' => return Ok(self.string(start)),
            '-' if next == b'-' => return Ok(self.line_comment(start)),
            '/' if next == b'*' => return self.block_comment(start),
            '|' if next == b'|' => (TokenKind::Concat, 2),
            '|' => return Err(LexError::new(LexErrorKind::LonePipe, start)),
            '*' if next == b'*' => (TokenKind::Exp, 2),
            '<' if next == b'>' => (TokenKind::Neq, 2),
            '<' if next == b'=' => (TokenKind::Leq, 2),
            '>' if next == b'=' => (TokenKind::Geq, 2),
            '!' if next == b'=' => (TokenKind::Neq, 2),
            ':' if next == b'=' => (TokenKind::Assign, 2),
            '.' if next == b'.' => (TokenKind::Range, 2),
            '+' => (TokenKind::Add, 1),
            '-' => (TokenKind::Sub, 1),
            '*' => (TokenKind::Mul, 1),
            '/' => (TokenKind::Div, 1),
            '%' => (TokenKind::Rem, 1),
            '=' => (TokenKind::Eql, 1),
            '<' => (TokenKind::Lss, 1),
            '>' => (TokenKind::Grt, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            '[' => (TokenKind::LBrack, 1),
            ']' => (TokenKind::RBrack, 1),
            ',' => (TokenKind::Comma, 1),
            '.' => (TokenKind::Dot, 1),
            ';' => (TokenKind::Semicolon, 1),
            ':' => (TokenKind::Colon, 1),
            '"' => (TokenKind::DQuote, 1),
            '$' => (TokenKind::Dollar, 1),
            _ => {
                self.cursor.advance_char();
                let lit = self.cursor.slice_from(start);
                return Ok(self.token(start, TokenKind::Illegal, lit));
            }
        };
        self.cursor.advance_n(len);
        Ok(self.token(start, kind, self.cursor.slice_from(start)))
    }

    /// A token from `start` to the cursor.
    fn token(&self, start: u32, kind: TokenKind, lit: impl Into<Cow<'a, str>>) -> Token<'a> {
        Token {
            pos: start,
            end: self.cursor.pos(),
            kind,
            lit: lit.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' => self.cursor.advance(),
                b'\n' => {
                    self.cursor.advance();
                    self.file.add_line(self.cursor.pos());
                }
                _ => return,
            }
        }
    }

    fn mark_lines(&mut self, start: u32) {
        for line in self.cursor.line_starts(start, self.cursor.pos()) {
            self.file.add_line(line);
        }
    }

    fn identifier(&mut self, start: u32) -> Token<'a> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let lit = if text.chars().any(char::is_uppercase) {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        let kind = lookup_keyword(&lit).unwrap_or(TokenKind::Ident);
        self.token(start, kind, lit)
    }

    /// `'...'` with `''` escapes. The lexeme is the interior text; an
    /// unterminated literal runs to end of input.
    fn string(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance();
        let body = self.cursor.pos();
        let terminated = self.cursor.eat_string_body();
        let lit = self.cursor.slice_from(body);
        self.mark_lines(body);
        if terminated {
            self.cursor.advance();
        }
        self.token(start, TokenKind::String, lit)
    }

    /// `--` up to, not including, the end of the line.
    fn line_comment(&mut self, start: u32) -> Token<'a> {
        self.cursor.eat_until_newline_or_eof();
        let text = self.cursor.slice_from(start);
        self.token(start, TokenKind::Comment, strip_cr(text, false))
    }

    fn block_comment(&mut self, start: u32) -> Result<Token<'a>, LexError> {
        self.cursor.advance_n(2);
        let terminated = self.cursor.eat_block_comment_rest();
        self.mark_lines(start);
        if !terminated {
            return Err(LexError::new(LexErrorKind::UnterminatedComment, start));
        }
        let text = self.cursor.slice_from(start);
        Ok(self.token(start, TokenKind::Comment, strip_cr(text, true)))
    }
}

fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_ident_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Remove carriage returns from comment text.
///
/// In a block comment, a `\r` sitting between `*` and `/` is kept so that
/// stripping cannot manufacture an early `*/`.
fn strip_cr(text: &str, block: bool) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        let keep = ch != '\r'
            || (block
                && out.len() > "/*".len()
                && out.ends_with('*')
                && bytes.get(i + 1) == Some(&b'/'));
        if keep {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests;
