use super::*;
use pldoc_ir::Comment;
use pretty_assertions::assert_eq;

#[test]
fn single_paragraph() {
    assert_eq!(
        format_comment("Returns the employee name.\n"),
        "<p>Returns the employee name.</p>"
    );
}

#[test]
fn blank_lines_split_paragraphs() {
    assert_eq!(
        format_comment("First.\n\nSecond line one\nsecond line two\n"),
        "<p>First.</p>\n<p>Second line one\nsecond line two</p>"
    );
}

#[test]
fn indented_lines_become_preformatted() {
    let text = "Example:\n  select *\n    from dual;\nThat is all.\n";
    assert_eq!(
        format_comment(text),
        "<p>Example:</p>\n<pre>select *\n  from dual;</pre>\n<p>That is all.</p>"
    );
}

#[test]
fn blank_line_inside_preformatted_block_is_kept() {
    let text = "Usage:\n    a := f(1);\n\n    b := f(2);\n";
    assert_eq!(
        format_comment(text),
        "<p>Usage:</p>\n<pre>a := f(1);\n\nb := f(2);</pre>"
    );
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        format_comment("Use <b> & \"quotes\"\n"),
        "<p>Use &lt;b&gt; &amp; &quot;quotes&quot;</p>"
    );
}

#[test]
fn base_indent_comes_from_first_nonblank_line() {
    let text = "\n   indented start\n   same level\n      deeper\n";
    assert_eq!(
        format_comment(text),
        "<p>indented start\nsame level</p>\n<pre>deeper</pre>"
    );
}

#[test]
fn empty_docs() {
    assert_eq!(format_comment(""), "");
    assert_eq!(format_comment("\n\n"), "");
    assert_eq!(format_doc(None), "");
}

#[test]
fn doc_from_comment_group() {
    let group = CommentGroup::new(vec![
        Comment::new("-- Adds two numbers.", 0),
        Comment::new("--   a + b", 21),
    ]);
    assert_eq!(
        format_doc(group.as_ref()),
        "<p>Adds two numbers.</p>\n<pre>a + b</pre>"
    );
}
