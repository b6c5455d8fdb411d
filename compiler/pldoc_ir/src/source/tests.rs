use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn file_with_lines(starts: &[u32]) -> SourceFile {
    let mut file = SourceFile::new("test.pks");
    for &s in starts {
        file.add_line(s);
    }
    file
}

#[test]
fn first_line_without_newlines() {
    let file = SourceFile::new("a.pks");
    assert_eq!(file.line(0), 1);
    assert_eq!(file.line(100), 1);
}

#[test]
fn line_lookup_picks_greatest_start() {
    let file = file_with_lines(&[5, 12]);
    assert_eq!(file.line(0), 1);
    assert_eq!(file.line(4), 1);
    assert_eq!(file.line(5), 2);
    assert_eq!(file.line(11), 2);
    assert_eq!(file.line(12), 3);
    assert_eq!(file.line(400), 3);
}

#[test]
fn add_line_is_idempotent() {
    let file = file_with_lines(&[5, 5, 3, 12, 12]);
    assert_eq!(file.line(4), 1);
    assert_eq!(file.line(5), 2);
    assert_eq!(file.line(11), 2);
    assert_eq!(file.line(12), 3);
    assert_eq!(file.line(100), 3);
}

#[test]
fn position_columns_are_one_based_bytes() {
    let file = file_with_lines(&[5]);
    let pos = file.position(7);
    assert_eq!(
        pos,
        Position {
            filename: "test.pks".to_string(),
            offset: 7,
            line: 2,
            column: 3,
        }
    );
    assert_eq!(pos.to_string(), "File: test.pks; Line: 2; Position: 3");
}

proptest! {
    #[test]
    fn line_matches_linear_scan(
        mut starts in proptest::collection::vec(1u32..10_000, 0..50),
        pos in 0u32..12_000,
    ) {
        starts.sort_unstable();
        let file = file_with_lines(&starts);
        starts.dedup();
        let expected = 1 + starts.iter().filter(|&&s| s <= pos).count();
        prop_assert_eq!(file.line(pos), expected);
    }
}
