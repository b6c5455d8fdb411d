#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds_and_lits(src: &str) -> Vec<(TokenKind, String)> {
    let (tokens, _) = tokenize("test.pks", src.as_bytes()).unwrap();
    tokens
        .into_iter()
        .map(|t| (t.kind, t.lit.into_owned()))
        .collect()
}

fn kinds(src: &str) -> Vec<TokenKind> {
    kinds_and_lits(src).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn identifiers_are_lowercased_and_keywords_resolved() {
    assert_eq!(
        kinds_and_lits("CREATE Package My_Pck"),
        vec![
            (TokenKind::Create, "create".to_string()),
            (TokenKind::Package, "package".to_string()),
            (TokenKind::Ident, "my_pck".to_string()),
        ]
    );
}

#[test]
fn unicode_letters_form_identifiers() {
    assert_eq!(
        kinds_and_lits("Größe"),
        vec![(TokenKind::Ident, "größe".to_string())]
    );
}

#[test]
fn numbers_do_not_include_fraction() {
    assert_eq!(
        kinds_and_lits("3.14"),
        vec![
            (TokenKind::Number, "3".to_string()),
            (TokenKind::Dot, ".".to_string()),
            (TokenKind::Number, "14".to_string()),
        ]
    );
}

#[test]
fn strings_drop_quotes() {
    assert_eq!(
        kinds_and_lits("'Hello, World' x"),
        vec![
            (TokenKind::String, "Hello, World".to_string()),
            (TokenKind::Ident, "x".to_string()),
        ]
    );
}

#[test]
fn strings_keep_doubled_quotes() {
    assert_eq!(
        kinds_and_lits("'it''s'"),
        vec![(TokenKind::String, "it''s".to_string())]
    );
}

#[test]
fn unterminated_string_runs_to_eof() {
    assert_eq!(
        kinds_and_lits("x := 'abc"),
        vec![
            (TokenKind::Ident, "x".to_string()),
            (TokenKind::Assign, ":=".to_string()),
            (TokenKind::String, "abc".to_string()),
        ]
    );
}

#[test]
fn operator_table() {
    assert_eq!(
        kinds("+ - * / % || ** = <> != > < >= <= := .. ( ) [ ] , . ; : \" $"),
        vec![
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::Rem,
            TokenKind::Concat,
            TokenKind::Exp,
            TokenKind::Eql,
            TokenKind::Neq,
            TokenKind::Neq,
            TokenKind::Grt,
            TokenKind::Lss,
            TokenKind::Geq,
            TokenKind::Leq,
            TokenKind::Assign,
            TokenKind::Range,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrack,
            TokenKind::RBrack,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::DQuote,
            TokenKind::Dollar,
        ]
    );
}

#[test]
fn unknown_characters_are_illegal_tokens() {
    assert_eq!(
        kinds_and_lits("a # ! €"),
        vec![
            (TokenKind::Ident, "a".to_string()),
            (TokenKind::Illegal, "#".to_string()),
            (TokenKind::Illegal, "!".to_string()),
            (TokenKind::Illegal, "€".to_string()),
        ]
    );
}

#[test]
fn comments_keep_markers() {
    assert_eq!(
        kinds_and_lits("-- line\n/* block\n*/ x"),
        vec![
            (TokenKind::Comment, "-- line".to_string()),
            (TokenKind::Comment, "/* block\n*/".to_string()),
            (TokenKind::Ident, "x".to_string()),
        ]
    );
}

#[test]
fn carriage_returns_are_stripped_from_comments() {
    assert_eq!(
        kinds_and_lits("-- crlf\r\n/* a\r\nb */"),
        vec![
            (TokenKind::Comment, "-- crlf".to_string()),
            (TokenKind::Comment, "/* a\nb */".to_string()),
        ]
    );
}

#[test]
fn cr_between_star_and_slash_is_kept() {
    assert_eq!(strip_cr("/* a *\r/ */", true), "/* a *\r/ */");
    assert_eq!(strip_cr("/*\r\r*/", true), "/**/");
    assert_eq!(strip_cr("-- x *\r/", false), "-- x */");
}

#[test]
fn positions_are_byte_offsets() {
    let (tokens, _) = tokenize("t", "ab  'c' ;".as_bytes()).unwrap();
    let positions: Vec<u32> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(positions, vec![0, 4, 8]);
}

#[test]
fn token_ends_follow_the_source_not_the_lexeme() {
    // `İ` is two bytes but lowercases to three.
    let src = "İd 'it''s' /*\r\n*/ x";
    let (tokens, _) = tokenize("t", src.as_bytes()).unwrap();
    let ends: Vec<(u32, u32)> = tokens.iter().map(|t| (t.pos, t.end)).collect();
    assert_eq!(ends, vec![(0, 3), (4, 11), (12, 18), (19, 20)]);
    assert_eq!(tokens[0].lit, "i\u{307}d");
    assert_eq!(tokens[1].lit, "it''s");
    assert_eq!(tokens[2].lit, "/*\n*/");
    assert_eq!(tokens[3].end as usize, src.len());
}

#[test]
fn lines_registered_everywhere() {
    let src = "a\n/* x\ny */ 'p\nq'\n-- c\nz";
    let (tokens, file) = tokenize("t", src.as_bytes()).unwrap();
    let last = tokens.last().unwrap();
    assert_eq!(last.lit, "z");
    assert_eq!(file.line(last.pos), 6);
    assert_eq!(file.line(tokens[1].pos), 2);
    assert_eq!(file.line(tokens[2].pos), 3);
}

#[test]
fn eof_is_sticky() {
    let mut scanner = Scanner::new("t", b"x").unwrap();
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Ident);
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Eof);
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Eof);
}

#[test]
fn unterminated_comment_is_fatal() {
    let err = tokenize("t", b"x /* never").unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::UnterminatedComment, 2));
}

#[test]
fn lone_pipe_is_fatal() {
    let err = tokenize("t", b"a | b").unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::LonePipe, 2));
}

#[test]
fn invalid_utf8_is_fatal() {
    let err = Scanner::new("t", b"ab\xffcd").err().unwrap();
    assert_eq!(err, LexError::new(LexErrorKind::InvalidUtf8, 2));
}

proptest! {
    #[test]
    fn identifier_lexemes_are_lowercase(src in "[A-Za-z_][A-Za-z0-9_]{0,12}( [A-Za-z_][A-Za-z0-9_]{0,12}){0,5}") {
        let (tokens, _) = tokenize("t", src.as_bytes()).unwrap();
        prop_assert!(!tokens.is_empty());
        for token in tokens {
            prop_assert_eq!(token.lit.to_lowercase(), token.lit.as_ref());
        }
    }

    #[test]
    fn scanning_never_panics(src in "\\PC{0,64}") {
        let _ = tokenize("t", src.as_bytes());
    }
}
