//! Parser for PL/SQL package specifications.
//!
//! A single-token-lookahead parser over the [`pldoc_lexer`] scanner. It
//! understands package specifications at the declaration level only:
//! variables, constants, exceptions, subtypes, cursors, user-defined
//! types, and function/procedure signatures. Types and default values are
//! kept as text.
//!
//! Parsing is tolerant. Package bodies, pragmas, conditional-compilation
//! directives, and declarations it does not recognize are skipped without
//! producing nodes. Structural mismatches where a specific token is
//! required are fatal and abort the file with a [`ParseError`].
//!
//! Doc comments are attached while advancing; see [`Parser::next`].

mod comments;
mod error;
mod grammar;
mod text;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use std::borrow::Cow;

use pldoc_ir::{CommentGroup, File, Ident, Span, TokenKind};
use pldoc_lexer::{LexError, Scanner};
use tracing::trace;

/// Parse one source file.
///
/// `filename` names the file in the result and in error messages and must
/// not be empty.
pub fn parse(filename: &str, src: &[u8]) -> Result<File, ParseError> {
    if filename.is_empty() {
        return Err(ParseError::new("", 0, ParseErrorKind::EmptyFileName));
    }
    Parser::new(filename, src)?.parse_file()
}

/// Parser state.
///
/// Holds the current non-comment token and the two comment slots filled
/// by the last advance.
pub struct Parser<'a> {
    scanner: Scanner<'a>,

    /// Whether `pos` refers to a real token yet.
    started: bool,
    pos: u32,
    /// Offset just past the current token in the source.
    end: u32,
    kind: TokenKind,
    lit: Cow<'a, str>,

    lead_comment: Option<CommentGroup>,
    line_comment: Option<CommentGroup>,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned on the first non-comment token.
    pub fn new(filename: &str, src: &'a [u8]) -> Result<Self, ParseError> {
        let scanner = Scanner::new(filename, src).map_err(|e| {
            let line = 1 + src[..e.pos as usize]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            ParseError::new(filename, line, e.kind.into())
        })?;
        let mut parser = Parser {
            scanner,
            started: false,
            pos: 0,
            end: 0,
            kind: TokenKind::Eof,
            lit: Cow::Borrowed(""),
            lead_comment: None,
            line_comment: None,
        };
        parser.next()?;
        Ok(parser)
    }

    /// Read the next raw token, comments included.
    fn next0(&mut self) -> Result<(), ParseError> {
        let token = self.scanner.scan().map_err(|e| self.lex_error(e))?;
        trace!(
            pos = token.pos,
            kind = %token.kind,
            lit = %token.lit,
            at = %self.scanner.file().position(token.pos),
            "token"
        );
        self.pos = token.pos;
        self.end = token.end;
        self.kind = token.kind;
        self.lit = token.lit;
        Ok(())
    }

    fn lex_error(&self, err: LexError) -> ParseError {
        let file = self.scanner.file();
        ParseError::new(file.name(), file.line(err.pos), err.kind.into())
    }

    /// Build an error at the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.filename(), self.line(self.pos), kind)
    }

    fn filename(&self) -> &str {
        self.scanner.file().name()
    }

    #[inline]
    fn line(&self, pos: u32) -> usize {
        self.scanner.file().line(pos)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Source range of the current token.
    #[inline]
    fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }

    /// Fail unless the current token is `kind`.
    fn test(&self, kind: TokenKind) -> Result<(), ParseError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedToken {
                expected: kind,
                found: self.kind,
            }))
        }
    }

    /// Require `kind`, step over it, and return its offset.
    fn expect(&mut self, kind: TokenKind) -> Result<u32, ParseError> {
        self.test(kind)?;
        let pos = self.pos;
        self.next()?;
        Ok(pos)
    }

    /// Advance until the current token is `kind` or EOF.
    fn scan_to(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        while self.kind != kind && self.kind != TokenKind::Eof {
            self.next()?;
        }
        Ok(())
    }

    /// The current token as an identifier. It must be an identifier.
    fn gen_ident(&self) -> Result<Ident, ParseError> {
        self.test(TokenKind::Ident)?;
        Ok(Ident::spanning(self.lit.as_ref(), self.span()))
    }

    /// Advance and take the identifier there.
    fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        self.next()?;
        self.gen_ident()
    }

    /// Source text between two offsets.
    fn source_slice(&self, start: u32, end: u32) -> &'a str {
        self.scanner.slice(start, end.max(start))
    }
}
