//! Token kinds and the keyword table.
//!
//! The scanner produces a [`TokenKind`] plus the literal lexeme for every
//! token. Keywords are recognized after lowercasing, so the language's case
//! insensitivity is handled entirely by [`lookup_keyword`].

mod keywords;
mod kind;

pub use keywords::lookup_keyword;
pub use kind::TokenKind;
