//! Parse errors.
//!
//! Every parse error is fatal for its file. The rendered message always
//! has the shape `File: <name>; line: <n>; <what>`, with `<n>` the line of
//! the token (or byte) the parser was looking at.

use pldoc_ir::TokenKind;
use pldoc_lexer::LexErrorKind;
use thiserror::Error;

/// A fatal, positioned parse error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("File: {file}; line: {line}; {kind}")]
pub struct ParseError {
    pub file: String,
    /// 1-based line, or 0 when there is no source to point into.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(file: impl Into<String>, line: usize, kind: ParseErrorKind) -> Self {
        ParseError {
            file: file.into(),
            line,
            kind,
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    #[error("Expected token {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// `end <name>` does not repeat the package's name.
    #[error("Incorrect package name! Expecting {expected}")]
    PackageNameMismatch { expected: String },
    #[error("Empty file provided")]
    EmptyFileName,
    #[error(transparent)]
    Lex(#[from] LexErrorKind),
}
