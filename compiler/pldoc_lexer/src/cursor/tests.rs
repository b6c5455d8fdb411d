use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reads_past_end_as_nul() {
    let mut c = Cursor::new("a");
    assert_eq!(c.current(), b'a');
    assert_eq!(c.peek(), 0);
    c.advance();
    assert!(c.current_char().is_none());
    assert_eq!(c.current(), 0);
    assert_eq!(c.current_char(), None);
}

#[test]
fn eat_while_handles_multibyte_chars() {
    let mut c = Cursor::new("çé_1 x");
    c.eat_while(|ch| ch.is_alphanumeric() || ch == '_');
    assert_eq!(c.slice_from(0), "çé_1");
    assert_eq!(c.current(), b' ');
}

#[test]
fn newline_search_stops_before_newline() {
    let mut c = Cursor::new("-- abc\nnext");
    c.eat_until_newline_or_eof();
    assert_eq!(c.pos(), 6);
    let mut c = Cursor::new("-- abc");
    c.eat_until_newline_or_eof();
    assert!(c.current_char().is_none());
}

#[test]
fn block_comment_end() {
    let mut c = Cursor::new("/* a */ b");
    c.advance_n(2);
    assert!(c.eat_block_comment_rest());
    assert_eq!(c.slice_from(0), "/* a */");

    let mut c = Cursor::new("/*/ never");
    c.advance_n(2);
    assert!(!c.eat_block_comment_rest());
    assert!(c.current_char().is_none());
}

#[test]
fn string_body_skips_doubled_quotes() {
    let mut c = Cursor::new("it''s' rest");
    assert!(c.eat_string_body());
    assert_eq!(c.slice_from(0), "it''s");
    assert_eq!(c.current(), b'\'');

    let mut c = Cursor::new("open ended");
    assert!(!c.eat_string_body());
    assert!(c.current_char().is_none());
}

#[test]
fn line_starts_in_range() {
    let c = Cursor::new("a\nb\n\nc");
    assert_eq!(c.line_starts(0, 6).collect::<Vec<_>>(), vec![2, 4, 5]);
    assert_eq!(c.line_starts(2, 4).collect::<Vec<_>>(), vec![4]);
}
