//! Scanner errors.
//!
//! Every variant is fatal for the file being scanned. The parser wraps
//! these into its own positioned error.

use thiserror::Error;

/// A fatal scanner error at a byte offset.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Offset of the offending byte or construct.
    pub pos: u32,
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, pos: u32) -> Self {
        LexError { kind, pos }
    }
}

/// What went wrong.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A `/*` without a matching `*/`.
    #[error("comment not terminated")]
    UnterminatedComment,
    /// The buffer is not valid UTF-8.
    #[error("illegal UTF-8 encoding")]
    InvalidUtf8,
    /// `|` not followed by a second `|`.
    #[error("Expecting another one |")]
    LonePipe,
    /// The buffer does not fit 32-bit offsets.
    #[error("file too large")]
    TooLarge,
}

#[cfg(test)]
mod tests;
