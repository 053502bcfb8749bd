use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unterminated_literal_construction() {
    let span = Span::point(10);
    let err = LexError::unterminated_literal(span, LiteralKind::SimpleString, 4);
    assert_eq!(err.span, span);
    assert_eq!(
        err.kind,
        LexErrorKind::UnterminatedLiteral {
            kind: LiteralKind::SimpleString
        }
    );
    assert_eq!(
        err.context,
        LexErrorContext::InsideLiteral {
            kind: LiteralKind::SimpleString,
            start: 4
        }
    );
    assert_eq!(err.suggestions[0].message, "add closing `\"`");
}

#[test]
fn unterminated_bytes_suggests_single_quote() {
    let err = LexError::unterminated_literal(Span::point(3), LiteralKind::SimpleBytes, 0);
    assert_eq!(err.suggestions[0].message, "add closing `'`");
}

#[test]
fn categories() {
    assert_eq!(
        LexError::unterminated_literal(Span::point(0), LiteralKind::SimpleString, 0).category(),
        ErrorCategory::Lexical
    );
    assert_eq!(
        LexError::unclosed_delimiter(Span::point(0), LiteralKind::RawString, 0).category(),
        ErrorCategory::UnbalancedDelimiter
    );
    assert_eq!(
        LexError::mismatched_fence(Span::new(0, 3), 1, 2).category(),
        ErrorCategory::UnbalancedDelimiter
    );
    assert_eq!(
        LexError::invalid_escape(Span::new(0, 2), 'q').category(),
        ErrorCategory::Lexical
    );
}

#[test]
fn codes() {
    assert_eq!(
        LexError::unterminated_literal(Span::point(0), LiteralKind::SimpleString, 0).code(),
        ErrorCode::E0001
    );
    assert_eq!(
        LexError::invalid_character(Span::new(0, 1), '\u{1}').code(),
        ErrorCode::E0002
    );
    assert_eq!(LexError::leading_zero(Span::new(0, 3)).code(), ErrorCode::E0003);
    assert_eq!(
        LexError::escape_digit_count(Span::new(0, 3), 'u', "4 hex digits").code(),
        ErrorCode::E0004
    );
    assert_eq!(
        LexError::byte_escape_in_string(Span::new(0, 4)).code(),
        ErrorCode::E0005
    );
    assert_eq!(
        LexError::unclosed_delimiter(Span::point(9), LiteralKind::MultilineString, 0).code(),
        ErrorCode::E0006
    );
    assert_eq!(
        LexError::mismatched_fence(Span::new(0, 3), 1, 2).code(),
        ErrorCode::E0007
    );
    assert_eq!(LexError::stray_backslash(Span::new(0, 1)).code(), ErrorCode::E0008);
    assert_eq!(LexError::lone_bang(Span::new(0, 1)).code(), ErrorCode::E0009);
    assert_eq!(
        LexError::malformed_attribute(Span::new(0, 1)).code(),
        ErrorCode::E0010
    );
    assert_eq!(
        LexError::invalid_identifier(Span::new(0, 1)).code(),
        ErrorCode::E0011
    );
    assert_eq!(LexError::nul_byte(Span::new(0, 1)).code(), ErrorCode::E0012);
}

#[test]
fn mismatched_fence_suggests_removing_extra_hashes() {
    // `"###` closing a `#"` literal: two hashes too many.
    let err = LexError::mismatched_fence(Span::new(5, 9), 1, 3);
    assert_eq!(err.suggestions.len(), 1);
    let replacement = err.suggestions[0]
        .replacement
        .as_ref()
        .map(|r| (r.span, r.text.as_str()));
    assert_eq!(replacement, Some((Span::new(7, 9), "")));
}

#[test]
fn lone_bang_suggests_not() {
    let err = LexError::lone_bang(Span::new(2, 3));
    let replacement = err.suggestions[0].replacement.as_ref().map(|r| r.text.as_str());
    assert_eq!(replacement, Some("not "));
}

#[test]
fn number_errors_carry_number_context() {
    for err in [
        LexError::invalid_digit(Span::new(0, 4), '2', 2),
        LexError::missing_digits(Span::new(0, 2), 16),
        LexError::empty_exponent(Span::new(0, 3)),
        LexError::hex_float_without_exponent(Span::new(0, 5)),
        LexError::trailing_underscore(Span::new(0, 2)),
        LexError::consecutive_underscores(Span::new(0, 4)),
    ] {
        assert_eq!(err.context, LexErrorContext::NumberLiteral, "{err:?}");
    }
}

#[test]
fn with_context_fluent_builder() {
    let err = LexError::invalid_escape(Span::new(3, 5), 'q').with_context(
        LexErrorContext::InsideLiteral {
            kind: LiteralKind::SimpleBytes,
            start: 1,
        },
    );
    assert!(matches!(err.context, LexErrorContext::InsideLiteral { start: 1, .. }));
}

#[test]
fn error_hash_compatible() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(LexError::stray_backslash(Span::new(0, 1)));
    set.insert(LexError::stray_backslash(Span::new(0, 1)));
    set.insert(LexError::lone_bang(Span::new(0, 1)));
    assert_eq!(set.len(), 2);
}

// === Diagnostics ===

#[test]
fn diagnostic_has_code_message_and_label() {
    let diag = LexError::invalid_escape(Span::new(3, 5), 'q').to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0004);
    assert_eq!(diag.message, "invalid escape sequence `\\q`");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].span, Span::new(3, 5));
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn diagnostic_includes_context_note() {
    let diag =
        LexError::unclosed_delimiter(Span::point(20), LiteralKind::MultilineRawString, 2)
            .to_diagnostic();
    assert_eq!(diag.message, "unclosed multiline raw string literal");
    assert_eq!(
        diag.notes,
        vec!["while lexing a multiline raw string literal starting at byte 2".to_owned()]
    );
}

#[test]
fn diagnostic_replacement_becomes_substitution() {
    let diag = LexError::mismatched_fence(Span::new(0, 4), 1, 2).to_diagnostic();
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.suggestions[0].substitutions[0].span, Span::new(3, 4));
}

#[test]
fn top_level_context_adds_no_note() {
    let diag = LexError::stray_backslash(Span::new(0, 1)).to_diagnostic();
    assert!(diag.notes.is_empty());
}
