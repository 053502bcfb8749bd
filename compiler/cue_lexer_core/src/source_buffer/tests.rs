use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.interior_nulls().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("a: 1");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.as_bytes(), b"a: 1");
    assert_eq!(buf.as_sentinel_bytes()[4], 0);
}

#[test]
fn multibyte_source_keeps_byte_length() {
    let source = "naïve: \"\u{1F600}\"";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

// === Padding ===

#[test]
fn buffer_is_padded_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "unpadded buffer for source length {len}",
        );
        assert!(buf.as_sentinel_bytes().len() > len);
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0);
    }
}

// === Encoding ===

#[test]
fn detects_leading_bom() {
    assert!(SourceBuffer::new("\u{FEFF}a: 1").has_bom());
    assert!(!SourceBuffer::new("a: 1").has_bom());
    assert!(!SourceBuffer::new("a: \"\u{FEFF}\"").has_bom());
}

#[test]
fn records_interior_nulls() {
    let buf = SourceBuffer::new("a\0b\0");
    assert_eq!(buf.interior_nulls(), &[1, 3]);
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("x");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'x');
}
