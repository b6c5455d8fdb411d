//! Token kinds for PL/SQL package specifications.

use std::fmt;

/// Token kinds.
///
/// The set is closed: end of input, comments, the three literal classes,
/// the operator table, and the reserved words the parser cares about.
/// Everything else the scanner does not understand becomes [`Illegal`].
///
/// [`Illegal`]: TokenKind::Illegal
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,
    Comment,

    /// Identifier (lowercased)
    Ident,
    /// Run of decimal digits
    Number,
    /// String literal, quotes excluded
    String,
    /// A character outside the scanner's table
    Illegal,

    Add,       // +
    Sub,       // -
    Mul,       // *
    Div,       // /
    Rem,       // %
    Concat,    // ||
    Exp,       // **
    Eql,       // =
    Neq,       // <> !=
    Grt,       // >
    Lss,       // <
    Geq,       // >=
    Leq,       // <=
    Assign,    // :=
    Range,     // ..
    LParen,    // (
    LBrack,    // [
    RParen,    // )
    RBrack,    // ]
    Comma,     // ,
    Dot,       // .
    Semicolon, // ;
    Colon,     // :
    DQuote,    // "
    Dollar,    // $

    Like,
    Between,
    And,
    Or,
    Not,
    As,
    Is,
    Default,
    Begin,
    End,
    If,
    Else,
    Elsif,
    Null,
    Record,
    Procedure,
    Function,
    Type,
    Return,
    Rowtype,
    Package,
    In,
    Out,
    Pipelined,
    Deterministic,
    ResultCache,
    Pragma,
    Exception,
    Constant,
    Cursor,
    Table,
    Varray,
    Of,
    Create,
    Index,
    By,
    Ref,
    Body,
    Subtype,
}

impl TokenKind {
    /// The exact lexeme for operators and keywords.
    pub const fn keyword_str(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Eof
            | TokenKind::Comment
            | TokenKind::Ident
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Illegal => return None,

            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Rem => "%",
            TokenKind::Concat => "||",
            TokenKind::Exp => "**",
            TokenKind::Eql => "=",
            TokenKind::Neq => "<>",
            TokenKind::Grt => ">",
            TokenKind::Lss => "<",
            TokenKind::Geq => ">=",
            TokenKind::Leq => "<=",
            TokenKind::Assign => ":=",
            TokenKind::Range => "..",
            TokenKind::LParen => "(",
            TokenKind::LBrack => "[",
            TokenKind::RParen => ")",
            TokenKind::RBrack => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::DQuote => "\"",
            TokenKind::Dollar => "$",

            TokenKind::Like => "like",
            TokenKind::Between => "between",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::As => "as",
            TokenKind::Is => "is",
            TokenKind::Default => "default",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elsif => "elsif",
            TokenKind::Null => "null",
            TokenKind::Record => "record",
            TokenKind::Procedure => "procedure",
            TokenKind::Function => "function",
            TokenKind::Type => "type",
            TokenKind::Return => "return",
            TokenKind::Rowtype => "rowtype",
            TokenKind::Package => "package",
            TokenKind::In => "in",
            TokenKind::Out => "out",
            TokenKind::Pipelined => "pipelined",
            TokenKind::Deterministic => "deterministic",
            TokenKind::ResultCache => "result_cache",
            TokenKind::Pragma => "pragma",
            TokenKind::Exception => "exception",
            TokenKind::Constant => "constant",
            TokenKind::Cursor => "cursor",
            TokenKind::Table => "table",
            TokenKind::Varray => "varray",
            TokenKind::Of => "of",
            TokenKind::Create => "create",
            TokenKind::Index => "index",
            TokenKind::By => "by",
            TokenKind::Ref => "ref",
            TokenKind::Body => "body",
            TokenKind::Subtype => "subtype",
        })
    }

    /// Whether this is a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Like as u8)
    }

    /// Whether the token reads as a word when text is reassembled:
    /// identifiers, numbers, strings, and keywords.
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Number | TokenKind::String
        ) || self.is_keyword()
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "COMMENT",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Illegal => "ILLEGAL",
            other => other.keyword_str().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

crate::static_assert_size!(TokenKind, 1);
