//! Scanner for PL/SQL package specifications.
//!
//! Turns source bytes into a stream of [`Token`]s: kind, source range, and
//! lexeme. The scanner commits one token per call and never
//! backtracks. Newlines are reported to the file's [`SourceFile`] line table
//! as they are passed, including newlines inside comments and strings.
//!
//! # Lexemes
//!
//! - identifiers and keywords are lowercased
//! - string literals drop their surrounding quotes (doubled quotes are kept)
//! - comments keep their markers; carriage returns are stripped
//!
//! # Errors
//!
//! Invalid UTF-8 (checked before scanning starts), an unterminated block
//! comment, and a lone `|` are fatal. Any other character outside the
//! operator table becomes an [`TokenKind::Illegal`] token.

mod cursor;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{Scanner, Token};

use pldoc_ir::{SourceFile, TokenKind};

/// Scan a whole buffer, comments included.
///
/// Returns every token up to (not including) end of input, together with
/// the completed line table.
pub fn tokenize<'a>(
    name: &str,
    src: &'a [u8],
) -> Result<(Vec<Token<'a>>, SourceFile), LexError> {
    let mut scanner = Scanner::new(name, src)?;
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan()?;
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push(token);
    }
    Ok((tokens, scanner.into_file()))
}
