use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedComment, 4).to_string(),
        "comment not terminated"
    );
    assert_eq!(
        LexErrorKind::InvalidUtf8.to_string(),
        "illegal UTF-8 encoding"
    );
    assert_eq!(LexErrorKind::LonePipe.to_string(), "Expecting another one |");
}
