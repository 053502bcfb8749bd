use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Run the content scanner once over `source`, returning the result and
/// where the cursor stopped.
fn scan_once(source: &str, delim: Delimiter) -> (ContentScan, u32) {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let result = scan_content(&mut cursor, delim);
    (result, cursor.pos())
}

const MULTI_STR: Delimiter = Delimiter::new(Quote::Double, true, 0);
const MULTI_BYTES: Delimiter = Delimiter::new(Quote::Single, true, 0);
const RAW_STR: Delimiter = Delimiter::new(Quote::Double, false, 1);
const RAW_BYTES: Delimiter = Delimiter::new(Quote::Single, false, 1);
const MULTI_RAW_STR: Delimiter = Delimiter::new(Quote::Double, true, 1);

// === Delimiter ===

#[test]
fn content_kind_per_delimiter() {
    assert_eq!(Delimiter::new(Quote::Double, false, 0).content_kind(), None);
    assert_eq!(Delimiter::new(Quote::Single, false, 0).content_kind(), None);
    assert_eq!(MULTI_STR.content_kind(), Some(ContentKind::MultilineString));
    assert_eq!(MULTI_BYTES.content_kind(), Some(ContentKind::MultilineBytes));
    assert_eq!(RAW_STR.content_kind(), Some(ContentKind::RawString));
    assert_eq!(RAW_BYTES.content_kind(), Some(ContentKind::RawBytes));
    assert_eq!(
        MULTI_RAW_STR.content_kind(),
        Some(ContentKind::MultilineRawString)
    );
    assert_eq!(
        Delimiter::new(Quote::Single, true, 3).content_kind(),
        Some(ContentKind::MultilineRawBytes)
    );
}

#[test]
fn closer_len_counts_extra_hashes() {
    let buf = SourceBuffer::new("\"##");
    let cursor = buf.cursor();
    assert_eq!(RAW_STR.closer_len(&cursor), Some(3));

    let buf = SourceBuffer::new("\"x");
    assert_eq!(RAW_STR.closer_len(&buf.cursor()), None);
}

#[test]
fn closer_needs_full_fence() {
    let buf = SourceBuffer::new("\"#");
    let two = Delimiter::new(Quote::Double, false, 2);
    assert_eq!(two.closer_len(&buf.cursor()), None);
}

#[test]
fn interpolation_opener_matches_fence() {
    let buf = SourceBuffer::new("\\#(x)");
    assert!(RAW_STR.interpolation_at(&buf.cursor()));
    assert!(!MULTI_STR.interpolation_at(&buf.cursor()));

    let buf = SourceBuffer::new("\\(x)");
    assert!(MULTI_STR.interpolation_at(&buf.cursor()));
    assert!(!RAW_STR.interpolation_at(&buf.cursor()));
}

// === Multiline ===

#[test]
fn multiline_content_crosses_newlines() {
    let source = "\n  line one\n  line \"two\"\n  \"\"\"";
    let (result, pos) = scan_once(source, MULTI_STR);
    let expected = source.len() - 3;
    assert_eq!(result, ContentScan::Content(u32::try_from(expected).unwrap_or(0)));
    assert_eq!(pos as usize, expected);
}

#[test]
fn multiline_stops_at_interpolation() {
    let (result, pos) = scan_once("ab\\(x)\"\"\"", MULTI_STR);
    assert_eq!(result, ContentScan::Content(2));
    assert_eq!(pos, 2);
}

#[test]
fn multiline_escaped_quote_is_content() {
    let source = "a\\\"\"\"b\"\"\"";
    let (result, _) = scan_once(source, MULTI_STR);
    assert_eq!(result, ContentScan::Content(6));
}

#[test]
fn multiline_bytes_ignores_double_quotes() {
    let (result, _) = scan_once("\"\"\"x'''", MULTI_BYTES);
    assert_eq!(result, ContentScan::Content(4));
}

#[test]
fn boundary_at_closer() {
    assert_eq!(scan_once("\"\"\"", MULTI_STR).0, ContentScan::Boundary);
    assert_eq!(scan_once("\"#", RAW_STR).0, ContentScan::Boundary);
}

#[test]
fn boundary_at_eof() {
    assert_eq!(scan_once("", MULTI_STR).0, ContentScan::Boundary);
    assert_eq!(scan_once("", RAW_BYTES).0, ContentScan::Boundary);
}

// === Raw ===

#[test]
fn raw_quote_without_fence_is_content() {
    let (result, _) = scan_once("say \"hi\" now\"#", RAW_STR);
    assert_eq!(result, ContentScan::Content(12));
}

#[test]
fn raw_plain_interpolation_is_content() {
    let (result, _) = scan_once("\\(x)\"#", RAW_STR);
    assert_eq!(result, ContentScan::Content(4));
}

#[test]
fn raw_stops_at_fenced_interpolation() {
    let (result, _) = scan_once("ab\\#(x)\"#", RAW_STR);
    assert_eq!(result, ContentScan::Content(2));
}

#[test]
fn raw_fenced_escape_protects_quote() {
    let (result, _) = scan_once("\\#\"\"#", RAW_STR);
    assert_eq!(result, ContentScan::Content(3));
}

#[test]
fn single_line_raw_stops_at_newline() {
    let (result, pos) = scan_once("abc\ndef\"#", RAW_STR);
    assert_eq!(result, ContentScan::Content(3));
    assert_eq!(pos, 3);
    assert_eq!(scan_once("\n\"#", RAW_STR).0, ContentScan::Boundary);
}

#[test]
fn multiline_raw_needs_fence_to_close() {
    let (result, _) = scan_once("x\"\"\" y\"\"\"#", MULTI_RAW_STR);
    assert_eq!(result, ContentScan::Content(6));
}

#[test]
fn double_fence_literal() {
    let two = Delimiter::new(Quote::Double, false, 2);
    let (result, _) = scan_once("a\"#b\\#(c)\"##", two);
    assert_eq!(result, ContentScan::Content(9));
}
