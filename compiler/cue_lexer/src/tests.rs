use super::*;
use cue_ir::{IntBase, LiteralKind};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.kinds().collect()
}

fn flags_of(source: &str) -> Vec<TokenFlags> {
    lex(source).tokens.flags().to_vec()
}

// === Driver ===

#[test]
fn empty_source_is_just_eof() {
    let out = lex("");
    assert_eq!(out.tokens.kinds().collect::<Vec<_>>(), vec![TokenKind::Eof]);
    assert!(!out.has_errors());
}

#[test]
fn trivia_is_not_tokenized() {
    assert_eq!(
        kinds("a  // note\n\tb"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn spans_cover_tokens() {
    let out = lex("ab: 12");
    let spans: Vec<Span> = out.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(2, 3), Span::new(4, 6), Span::point(6)]
    );
}

#[test]
fn comments_are_recorded() {
    let source = "a: 1 // one\n// two\nb: 2";
    let out = lex(source);
    let texts: Vec<&str> = out
        .tokens
        .comments()
        .iter()
        .map(|span| span.slice(source))
        .collect();
    assert_eq!(texts, vec!["// one", "// two"]);
}

// === Flags ===

#[test]
fn adjacency_and_spacing() {
    let flags = flags_of("a.b c");
    // a
    assert!(flags[0].is_line_start());
    assert!(!flags[0].is_adjacent());
    // .
    assert!(flags[1].is_adjacent());
    // b
    assert!(flags[2].is_adjacent());
    // c
    assert!(flags[3].has_space_before());
    assert!(!flags[3].is_adjacent());
}

#[test]
fn newline_and_line_start() {
    let flags = flags_of("a\n  b");
    assert!(flags[1].has_newline_before());
    assert!(flags[1].has_space_before());
    assert!(flags[1].is_line_start());
}

#[test]
fn comment_sets_trivia_flag() {
    let flags = flags_of("a // c\nb");
    assert!(flags[1].has_trivia_before());
    assert!(flags[1].has_newline_before());
}

#[test]
fn error_flag_on_bad_token() {
    let out = lex("a ! b");
    let flags = out.tokens.flags();
    assert!(!flags[0].has_error());
    assert!(flags[1].has_error());
    assert!(!flags[2].has_error());
}

#[test]
fn eof_carries_trailing_newline() {
    let flags = flags_of("a\n");
    assert!(flags[1].has_newline_before());
}

// === Tokens ===

#[test]
fn si_literal_is_one_token() {
    assert_eq!(
        kinds("1Ki"),
        vec![TokenKind::Int(IntBase::Si), TokenKind::Eof]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("package foo"),
        vec![TokenKind::Package, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn interpolated_string() {
    assert_eq!(
        kinds(r#""abc\(x)def""#),
        vec![
            TokenKind::LiteralOpen(LiteralKind::SimpleString),
            TokenKind::LiteralText,
            TokenKind::InterpolationOpen,
            TokenKind::Ident,
            TokenKind::InterpolationClose,
            TokenKind::LiteralText,
            TokenKind::LiteralClose,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multiline_string_is_opaque() {
    assert_eq!(
        kinds("\"\"\"\n  a \\q \"b\"\n  \"\"\""),
        vec![
            TokenKind::LiteralOpen(LiteralKind::MultilineString),
            TokenKind::LiteralText,
            TokenKind::LiteralClose,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn raw_interpolation() {
    assert_eq!(
        kinds(r##"#"a\#(b)c"#"##),
        vec![
            TokenKind::LiteralOpen(LiteralKind::RawString),
            TokenKind::LiteralText,
            TokenKind::InterpolationOpen,
            TokenKind::Ident,
            TokenKind::InterpolationClose,
            TokenKind::LiteralText,
            TokenKind::LiteralClose,
            TokenKind::Eof,
        ]
    );
}

// === Errors ===

#[test]
fn nul_bytes_are_reported() {
    let out = lex("a\0b");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::NulByte);
    assert_eq!(out.errors[0].span, Span::new(1, 2));
    assert_eq!(
        out.tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn nul_inside_literal_is_reported() {
    let out = lex("\"a\0b\"");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::NulByte);
}

#[test]
fn errors_are_sorted_by_position() {
    let out = lex("\\ x \0 !");
    let starts: Vec<u32> = out.errors.iter().map(|e| e.span.start).collect();
    assert_eq!(starts, vec![0, 4, 6]);
}

#[test]
fn unterminated_string_keeps_following_tokens() {
    let out = lex("a: \"oops\nb: 1");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].category(), ErrorCategory::Lexical);
    assert_eq!(
        out.tokens.kinds().collect::<Vec<_>>(),
        vec![
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::LiteralOpen(LiteralKind::SimpleString),
            TokenKind::LiteralText,
            TokenKind::LiteralClose,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Int(IntBase::Decimal),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unclosed_raw_literal_is_unbalanced() {
    let out = lex("#\"abc");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].category(), ErrorCategory::UnbalancedDelimiter);
}

#[test]
fn bom_is_whitespace() {
    let out = lex("\u{FEFF}a");
    assert!(!out.has_errors());
    assert_eq!(
        out.tokens.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Eof]
    );
}

// === Totality ===

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_totality {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_tile_the_source(source in "\\PC{0,64}") {
            let out = lex(&source);
            let mut end = 0;
            for token in out.tokens.iter() {
                prop_assert!(token.span.start >= end);
                prop_assert!(token.span.end <= u32::try_from(source.len()).unwrap_or(u32::MAX));
                end = token.span.end;
            }
            prop_assert_eq!(out.tokens.kinds().last(), Some(TokenKind::Eof));
        }

        #[test]
        fn literals_are_always_closed(source in "[\"'#\\\\()a \n]{0,32}") {
            let out = lex(&source);
            let opens = out.tokens.kinds().filter(|k| matches!(k, TokenKind::LiteralOpen(_))).count();
            let closes = out.tokens.kinds().filter(|k| *k == TokenKind::LiteralClose).count();
            prop_assert_eq!(opens, closes);
        }
    }
}
