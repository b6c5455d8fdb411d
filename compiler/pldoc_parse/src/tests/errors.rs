#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse, ParseErrorKind};
use pldoc_ir::TokenKind;
use pldoc_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

fn parse_err(src: &[u8]) -> crate::ParseError {
    parse("testfile", src).expect_err("source should not parse")
}

#[test]
fn test_package_name_mismatch() {
    let err = parse_err(b"create or replace package pck is\nv number;\nend other;\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::PackageNameMismatch {
            expected: "pck".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "File: testfile; line: 3; Incorrect package name! Expecting pck"
    );
}

#[test]
fn test_type_requires_is() {
    let err = parse_err(b"create package p is type t as table of number; end p;");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Is,
            found: TokenKind::As,
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn test_function_requires_return() {
    let err = parse_err(b"create package p is\nfunction f;\nend p;");
    assert_eq!(
        err.to_string(),
        "File: testfile; line: 2; Expected token return, got ;"
    );
}

#[test]
fn test_parameter_type_must_be_a_word() {
    let err = parse_err(b"create package p is\nprocedure x(a 1);\nend p;");
    assert_eq!(
        err.to_string(),
        "File: testfile; line: 2; Expected token IDENT, got NUMBER"
    );
}

#[test]
fn test_ref_requires_cursor() {
    let err = parse_err(b"create package p is type t is ref c; end p;");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Cursor,
            found: TokenKind::Ident,
        }
    );
}

#[test]
fn test_unterminated_comment() {
    let err = parse_err(b"create package p is\n\n/* never closed\nend p;");
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::UnterminatedComment));
    assert_eq!(
        err.to_string(),
        "File: testfile; line: 3; comment not terminated"
    );
}

#[test]
fn test_lone_pipe() {
    let err = parse_err(b"create package p is\nc constant varchar2(2) := 'a' | 'b';\nend p;");
    assert_eq!(
        err.to_string(),
        "File: testfile; line: 2; Expecting another one |"
    );
}

#[test]
fn test_invalid_utf8() {
    let err = parse_err(b"create\npackage \xff is end;");
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::InvalidUtf8));
    assert_eq!(err.line, 2);
}

#[test]
fn test_empty_file_name() {
    let err = parse("", b"create package p is end p;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyFileName);
    assert_eq!(err.to_string(), "File: ; line: 0; Empty file provided");
}

#[test]
fn test_errors_inside_bodies_are_not_reported() {
    // Bodies are skipped token by token, so a bad declaration there is never parsed.
    let src = b"create package body p is\nfunction f;\nend p;\ncreate package q is end q;";
    let file = parse("testfile", src).unwrap();
    assert_eq!(file.packages.len(), 1);
    assert_eq!(file.packages[0].name.as_str(), "q");
}
