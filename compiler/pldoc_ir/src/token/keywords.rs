//! Reserved word lookup.
//!
//! Length-bucketed: the identifier's length is the first-pass filter
//! (keywords range from 2 to 13 bytes), then the text is matched against
//! the keywords of that length. The input must already be lowercased.

use super::TokenKind;

/// Look up a reserved word.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=13).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "by" => Some(TokenKind::By),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "of" => Some(TokenKind::Of),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "end" => Some(TokenKind::End),
            "not" => Some(TokenKind::Not),
            "out" => Some(TokenKind::Out),
            "ref" => Some(TokenKind::Ref),
            _ => None,
        },
        4 => match text {
            "body" => Some(TokenKind::Body),
            "else" => Some(TokenKind::Else),
            "like" => Some(TokenKind::Like),
            "null" => Some(TokenKind::Null),
            "type" => Some(TokenKind::Type),
            _ => None,
        },
        5 => match text {
            "begin" => Some(TokenKind::Begin),
            "elsif" => Some(TokenKind::Elsif),
            "index" => Some(TokenKind::Index),
            "table" => Some(TokenKind::Table),
            _ => None,
        },
        6 => match text {
            "create" => Some(TokenKind::Create),
            "cursor" => Some(TokenKind::Cursor),
            "pragma" => Some(TokenKind::Pragma),
            "record" => Some(TokenKind::Record),
            "return" => Some(TokenKind::Return),
            "varray" => Some(TokenKind::Varray),
            _ => None,
        },
        7 => match text {
            "between" => Some(TokenKind::Between),
            "default" => Some(TokenKind::Default),
            "package" => Some(TokenKind::Package),
            "rowtype" => Some(TokenKind::Rowtype),
            "subtype" => Some(TokenKind::Subtype),
            _ => None,
        },
        8 => match text {
            "constant" => Some(TokenKind::Constant),
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        9 => match text {
            "exception" => Some(TokenKind::Exception),
            "pipelined" => Some(TokenKind::Pipelined),
            "procedure" => Some(TokenKind::Procedure),
            _ => None,
        },
        12 => match text {
            "result_cache" => Some(TokenKind::ResultCache),
            _ => None,
        },
        13 => match text {
            "deterministic" => Some(TokenKind::Deterministic),
            _ => None,
        },
        _ => None,
    }
}
