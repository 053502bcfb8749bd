use super::*;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

fn cook(text: &str, bytes: bool) -> (EscapeKind, Vec<LexErrorKind>) {
    let mut errors = Vec::new();
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    let kind = cook_escape(
        text,
        Span::new(0, len),
        bytes,
        LexErrorContext::TopLevel,
        &mut errors,
    );
    (kind, errors.into_iter().map(|e| e.kind).collect())
}

// === Valid escapes ===

#[test]
fn named_char_escapes() {
    for text in [
        r"\a", r"\b", r"\f", r"\n", r"\r", r"\t", r"\v", r"\\", r"\'", r#"\""#,
    ] {
        assert_eq!(cook(text, false), (EscapeKind::Char, vec![]), "{text}");
        assert_eq!(cook(text, true), (EscapeKind::Char, vec![]), "{text}");
    }
}

#[test]
fn unicode_escapes() {
    assert_eq!(cook(r"\u00E9", false), (EscapeKind::Unicode, vec![]));
    assert_eq!(cook(r"\U0001F600", false), (EscapeKind::Unicode, vec![]));
    assert_eq!(cook(r"\#u0041", false), (EscapeKind::Unicode, vec![]));
    assert_eq!(cook(r"\u00E9", true), (EscapeKind::Unicode, vec![]));
}

#[test]
fn byte_escapes_in_bytes() {
    assert_eq!(cook(r"\x41", true), (EscapeKind::Byte, vec![]));
    assert_eq!(cook(r"\x4142", true), (EscapeKind::Byte, vec![]));
    assert_eq!(cook(r"\101", true), (EscapeKind::Byte, vec![]));
    assert_eq!(cook(r"\12", true), (EscapeKind::Byte, vec![]));
    assert_eq!(cook(r"\#x41", true), (EscapeKind::Byte, vec![]));
}

// === Errors ===

#[test]
fn byte_escape_in_string() {
    assert_eq!(
        cook(r"\x41", false),
        (EscapeKind::Byte, vec![LexErrorKind::ByteEscapeInString])
    );
    assert_eq!(
        cook(r"\101", false),
        (EscapeKind::Byte, vec![LexErrorKind::ByteEscapeInString])
    );
}

#[test]
fn unknown_escape_letter() {
    assert_eq!(
        cook(r"\q", false).1,
        vec![LexErrorKind::InvalidEscape { escape_char: 'q' }]
    );
}

#[test]
fn hashed_char_escape_is_unknown() {
    assert_eq!(
        cook(r"\#n", false).1,
        vec![LexErrorKind::InvalidEscape { escape_char: 'n' }]
    );
}

#[test]
fn short_unicode_escape() {
    assert_eq!(
        cook(r"\u12", false).1,
        vec![LexErrorKind::EscapeDigitCount {
            escape: 'u',
            expected: "4 hex digits"
        }]
    );
    assert_eq!(
        cook(r"\U0001F6", false).1,
        vec![LexErrorKind::EscapeDigitCount {
            escape: 'U',
            expected: "8 hex digits"
        }]
    );
}

#[test]
fn short_byte_escapes() {
    assert_eq!(
        cook(r"\x4", true).1,
        vec![LexErrorKind::EscapeDigitCount {
            escape: 'x',
            expected: "at least 2 hex digits"
        }]
    );
    assert_eq!(
        cook(r"\7", true).1,
        vec![LexErrorKind::EscapeDigitCount {
            escape: '7',
            expected: "2 or 3 digits"
        }]
    );
}

#[test]
fn lone_backslash_is_incomplete() {
    assert_eq!(cook("\\", false).1, vec![LexErrorKind::IncompleteEscape]);
    assert_eq!(cook("\\#", true).1, vec![LexErrorKind::IncompleteEscape]);
}

#[test]
fn non_ascii_escape_letter() {
    assert_eq!(
        cook("\\é", false).1,
        vec![LexErrorKind::InvalidEscape { escape_char: 'é' }]
    );
}
