use super::*;
use pretty_assertions::assert_eq;

/// Synchronize from the first token of `source`, returning the text of
/// the token the cursor stops at.
fn sync_from_start(source: &str, context: ParseContext) -> (usize, String) {
    let lexed = cue_lexer::lex(source);
    let mut cursor = Cursor::new(&lexed.tokens, source);
    let skipped = synchronize(&mut cursor, context);
    (skipped, cursor.current_text().to_string())
}

// === TokenSet ===

#[test]
fn membership_ignores_payload() {
    let set = TokenSet::single(TokenKind::Int(cue_ir::IntBase::Decimal));
    assert!(set.contains(&TokenKind::Int(cue_ir::IntBase::Hex)));
    assert!(!set.contains(&TokenKind::Float));
}

#[test]
fn union_and_count() {
    let a = TokenSet::new().with(TokenKind::Comma);
    let b = TokenSet::new().with(TokenKind::RBrace);
    let both = a.union(b);
    assert_eq!(both.count(), 2);
    assert!(both.contains(&TokenKind::Comma));
    assert!(both.contains(&TokenKind::RBrace));
    assert!(TokenSet::default().is_empty());
}

#[test]
fn iter_indices_in_order() {
    let set = TokenSet::new()
        .with(TokenKind::RBrace)
        .with(TokenKind::Ident)
        .with(TokenKind::Comma);
    let indices: Vec<u8> = set.iter_indices().collect();
    assert_eq!(
        indices,
        vec![
            TokenKind::Ident.discriminant_index(),
            TokenKind::RBrace.discriminant_index(),
            TokenKind::Comma.discriminant_index(),
        ]
    );
    assert_eq!(set.iter_indices().len(), 3);
}

#[test]
fn format_expected_lists() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::Colon).format_expected(), "`:`");
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Comma)
            .with(TokenKind::RBracket)
            .format_expected(),
        "`]` or `,`"
    );
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Ident)
            .with(TokenKind::Comma)
            .with(TokenKind::RBracket)
            .format_expected(),
        "`identifier`, `]`, or `,`"
    );
}

#[test]
fn expression_starts() {
    assert!(EXPR_START.contains(&TokenKind::Not));
    assert!(EXPR_START.contains(&TokenKind::LiteralOpen(cue_ir::LiteralKind::RawBytes)));
    assert!(!EXPR_START.contains(&TokenKind::RBrace));
    assert!(DECL_START.contains(&TokenKind::Ellipsis));
    assert!(!LABEL_START.contains(&TokenKind::LParen));
}

// === Synchronization ===

#[test]
fn stops_at_comma() {
    assert_eq!(
        sync_from_start("* 1 2, b", ParseContext::STRUCT_BODY),
        (3, ",".to_string())
    );
}

#[test]
fn stops_at_new_line_when_newlines_terminate() {
    assert_eq!(
        sync_from_start("* 1\nb: 2", ParseContext::STRUCT_BODY),
        (2, "b".to_string())
    );
}

#[test]
fn newlines_ignored_inside_brackets() {
    assert_eq!(
        sync_from_start("* 1\nb )", ParseContext::BRACKETED),
        (3, ")".to_string())
    );
}

#[test]
fn nested_regions_are_skipped_whole() {
    assert_eq!(
        sync_from_start("* (a,\nb) [c, d] }", ParseContext::STRUCT_BODY),
        (11, "}".to_string())
    );
}

#[test]
fn literals_are_skipped_whole() {
    let (_, stop) = sync_from_start(r#"* "a,\(b, c)" , x"#, ParseContext::STRUCT_BODY);
    assert_eq!(stop, ",");
}

#[test]
fn stray_closer_skipped_at_top_level() {
    assert_eq!(
        sync_from_start("} ) x, y", ParseContext::FILE),
        (3, ",".to_string())
    );
    assert_eq!(
        sync_from_start("} x", ParseContext::STRUCT_BODY),
        (0, "}".to_string())
    );
}

#[test]
fn stops_at_eof() {
    let (skipped, stop) = sync_from_start("* * *", ParseContext::BRACKETED);
    assert_eq!(skipped, 3);
    assert_eq!(stop, "");
}

#[test]
fn skip_to_closer_balances() {
    let source = "a, [b]], c";
    let lexed = cue_lexer::lex(source);
    let mut cursor = Cursor::new(&lexed.tokens, source);
    assert_eq!(skip_to_closer(&mut cursor), 5);
    assert_eq!(cursor.current_text(), "]");
}
