use super::*;
use crate::SourceBuffer;

// === Basic navigation ===

#[test]
fn current_and_peeks() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
    assert_eq!(cursor.peek_at(3), 0);
}

#[test]
fn peek_at_far_past_buffer_is_zero() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek_at(10_000), 0);
}

#[test]
fn advance_moves_position() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    cursor.advance_n(2);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

// === Runs ===

#[test]
fn count_run_counts_fence() {
    let buf = SourceBuffer::new("##\"x");
    let cursor = buf.cursor();
    assert_eq!(cursor.count_run(0, b'#'), 2);
    assert_eq!(cursor.count_run(2, b'#'), 0);
}

#[test]
fn count_run_stops_at_source_end() {
    let buf = SourceBuffer::new("\"\"\"");
    assert_eq!(buf.cursor().count_run(0, b'"'), 3);
}

// === Slicing ===

#[test]
fn slice_returns_text() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 1), "");
    assert_eq!(cursor.slice(0, 100), "abc");
}

#[test]
fn slice_from_start() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert_eq!(cursor.slice_from(0), "ab");
}

// === Characters ===

#[test]
fn utf8_width() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("éx");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), 'é');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current_char(), 'x');
    cursor.advance_char();
    assert_eq!(cursor.current_char(), '\0');
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_skips_spaces_and_tabs_only() {
    let buf = SourceBuffer::new(" \t \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("// note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);

    let buf = SourceBuffer::new("// note");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_literal_delim_finds_each_stop_byte() {
    for (source, expected, pos) in [
        ("abc\"", b'"', 3),
        ("ab\\n", b'\\', 2),
        ("a\nb", b'\n', 1),
        ("a\rb", b'\r', 1),
    ] {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.skip_to_literal_delim(b'"'), expected, "{source:?}");
        assert_eq!(cursor.pos(), pos, "{source:?}");
    }
}

#[test]
fn skip_to_literal_delim_respects_quote_kind() {
    let buf = SourceBuffer::new("a\"b'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'\''), b'\'');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_literal_delim_reaches_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_or_backslash_crosses_newlines() {
    let buf = SourceBuffer::new("a\nb\n\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_or_backslash(b'"'), b'"');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn earliest_of_combinations() {
    assert_eq!(earliest_of(Some(3), Some(1)), Some(1));
    assert_eq!(earliest_of(Some(3), None), Some(3));
    assert_eq!(earliest_of(None, Some(2)), Some(2));
    assert_eq!(earliest_of(None, None), None);
}
