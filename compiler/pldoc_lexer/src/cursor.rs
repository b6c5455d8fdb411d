//! Byte cursor over validated UTF-8 source.
//!
//! The cursor advances byte-by-byte through ASCII and char-by-char through
//! everything else. Reading past the end yields `0x00`; use
//! [`current_char()`](Cursor::current_char) to tell EOF from an interior NUL.
//!
//! Offsets are `u32`. The scanner refuses buffers that do not fit.

/// Cursor over a source string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// # Contract
    ///
    /// `src.len()` must fit in `u32`.
    pub(crate) fn new(src: &'a str) -> Self {
        debug_assert!(u32::try_from(src.len()).is_ok());
        Cursor { src, pos: 0 }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one, `0x00` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.src.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Char at the current position.
    #[inline]
    pub(crate) fn current_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Current offset.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked against u32 at scanner construction"
    )]
    pub(crate) fn pos(&self) -> u32 {
        self.pos as u32
    }

    /// Advance one byte. Only valid on an ASCII byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.current().is_ascii());
        self.pos += 1;
    }

    /// Advance `n` ASCII bytes.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past the current char, whatever its width.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    /// Source text between two offsets.
    #[inline]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.src[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        &self.src[start as usize..self.pos]
    }

    /// Advance while `pred` holds for the current char.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.current_char() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Advance past the next `*/`.
    ///
    /// Returns `false` (cursor at EOF) when there is none.
    pub(crate) fn eat_block_comment_rest(&mut self) -> bool {
        let remaining = &self.src.as_bytes()[self.pos..];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                self.pos += offset + 2;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    /// Advance to the closing quote of a string literal, treating `''` as
    /// an escaped quote. The closing quote is not consumed.
    ///
    /// Returns `false` (cursor at EOF) for an unterminated literal.
    pub(crate) fn eat_string_body(&mut self) -> bool {
        loop {
            let remaining = &self.src.as_bytes()[self.pos..];
            let Some(offset) = memchr::memchr(b'\'', remaining) else {
                self.pos = self.src.len();
                return false;
            };
            self.pos += offset;
            if self.peek() == b'\'' {
                self.pos += 2;
            } else {
                return true;
            }
        }
    }

    /// Offsets of the line starts that follow each `\n` in `start..end`.
    pub(crate) fn line_starts(&self, start: u32, end: u32) -> impl Iterator<Item = u32> + 'a {
        let bytes = &self.src.as_bytes()[start as usize..end as usize];
        memchr::memchr_iter(b'\n', bytes).map(move |i| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "offsets lie within a u32-sized source"
            )]
            let i = i as u32;
            start + i + 1
        })
    }
}

#[cfg(test)]
mod tests;
