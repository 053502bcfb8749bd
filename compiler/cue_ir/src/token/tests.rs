use super::*;

#[test]
fn discriminant_indices_are_unique_and_below_128() {
    let mut seen = [false; 128];
    for tag in TokenTag::ALL {
        let index = tag as usize;
        assert!(index < 128, "{tag:?} out of range");
        assert!(!seen[index], "{tag:?} shares an index");
        seen[index] = true;
    }
    assert_eq!(TokenTag::MAX_DISCRIMINANT, 127);
}

#[test]
fn kind_tag_round_trips_through_index() {
    let kinds = [
        TokenKind::Ident,
        TokenKind::Int(IntBase::Hex),
        TokenKind::LiteralOpen(LiteralKind::MultilineRawBytes),
        TokenKind::Escape(EscapeKind::Unicode),
        TokenKind::Not,
        TokenKind::Bottom,
        TokenKind::Ellipsis,
        TokenKind::NotMatch,
        TokenKind::Eof,
    ];
    for kind in kinds {
        let tag = TokenTag::from_index(kind.discriminant_index());
        assert_eq!(tag, Some(kind.tag()));
    }
    assert_eq!(TokenTag::from_index(100), None);
}

#[test]
fn payload_does_not_change_tag() {
    assert_eq!(
        TokenKind::Int(IntBase::Binary).tag(),
        TokenKind::Int(IntBase::Si).tag()
    );
    assert_eq!(
        TokenKind::LiteralOpen(LiteralKind::SimpleString).discriminant_index(),
        TokenKind::LiteralOpen(LiteralKind::RawBytes).discriminant_index()
    );
}

#[test]
fn literal_kind_properties() {
    for bytes in [false, true] {
        for multiline in [false, true] {
            for raw in [false, true] {
                let kind = LiteralKind::from_parts(bytes, multiline, raw);
                assert_eq!(kind.is_bytes(), bytes);
                assert_eq!(kind.is_multiline(), multiline);
                assert_eq!(kind.is_raw(), raw);
            }
        }
    }
}

#[test]
fn friendly_names() {
    assert_eq!(TokenKind::friendly_name_from_index(TokenTag::RBrace as u8), Some("}"));
    assert_eq!(TokenKind::Ident.display_name(), "identifier");
    assert_eq!(TokenKind::Let.keyword_str(), Some("let"));
    assert_eq!(TokenKind::Colon.keyword_str(), None);
    assert_eq!(TokenKind::Match.to_string(), "=~");
}

#[test]
fn flags_accessors() {
    let mut flags = TokenFlags::EMPTY;
    assert!(!flags.has_newline_before());
    flags.set(TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START);
    assert!(flags.has_newline_before());
    assert!(flags.is_line_start());
    assert!(!flags.is_adjacent());
    assert_eq!(TokenFlags::from_bits(flags.bits()), flags);
}

#[test]
fn token_list_keeps_parallel_arrays() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Ident, Span::new(0, 1)));
    list.push_with_flags(
        Token::new(TokenKind::Colon, Span::new(1, 2)),
        TokenFlags::from_bits(TokenFlags::ADJACENT),
    );
    list.push_comment(Span::new(3, 10));
    list.push(Token::new(TokenKind::Eof, Span::point(10)));

    assert_eq!(list.len(), 3);
    assert_eq!(list.tags()[1], TokenTag::Colon as u8);
    assert!(list.flags()[1].is_adjacent());
    assert_eq!(list.comments(), &[Span::new(3, 10)]);
    assert_eq!(list[2].kind, TokenKind::Eof);
    assert_eq!(
        list.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Colon, TokenKind::Eof]
    );
}
