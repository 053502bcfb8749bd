use super::*;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Attribute as u8, 9);

    assert_eq!(RawTag::StringOpen as u8, 16);
    assert_eq!(RawTag::LiteralClose as u8, 28);

    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::DotDotDot as u8, 51);

    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Colon as u8, 87);

    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::LineComment as u8, 114);

    assert_eq!(RawTag::InvalidByte as u8, 240);
    assert_eq!(RawTag::InteriorNull as u8, 248);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Lexemes ===

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(RawTag::Plus.lexeme(), Some("+"));
    assert_eq!(RawTag::AmpAmp.lexeme(), Some("&&"));
    assert_eq!(RawTag::PipePipe.lexeme(), Some("||"));
    assert_eq!(RawTag::EqualTilde.lexeme(), Some("=~"));
    assert_eq!(RawTag::BangTilde.lexeme(), Some("!~"));
    assert_eq!(RawTag::DotDotDot.lexeme(), Some("..."));
    assert_eq!(RawTag::Bottom.lexeme(), Some("_|_"));
}

#[test]
fn variable_tags_have_no_lexeme() {
    for tag in [
        RawTag::Ident,
        RawTag::Int,
        RawTag::Float,
        RawTag::Attribute,
        RawTag::RawStringOpen,
        RawTag::LiteralText,
        RawTag::Escape,
        RawTag::InterpolationOpen,
        RawTag::LiteralClose,
        RawTag::Whitespace,
        RawTag::LineComment,
        RawTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?}");
    }
}

#[test]
fn names_fall_back_to_lexeme() {
    assert_eq!(RawTag::Comma.name(), ",");
    assert_eq!(RawTag::Ident.name(), "identifier");
    assert_eq!(RawTag::Eof.name(), "end of file");
}

// === Categories ===

#[test]
fn trivia_tags() {
    assert!(RawTag::Whitespace.is_trivia());
    assert!(RawTag::Newline.is_trivia());
    assert!(RawTag::LineComment.is_trivia());
    assert!(!RawTag::Comma.is_trivia());
}

#[test]
fn error_tags() {
    assert!(RawTag::InvalidByte.is_error());
    assert!(RawTag::InteriorNull.is_error());
    assert!(RawTag::MismatchedFence.is_error());
    assert!(!RawTag::Eof.is_error());
    assert!(!RawTag::Ident.is_error());
}

#[test]
fn literal_openers() {
    assert!(RawTag::StringOpen.is_literal_open());
    assert!(RawTag::MultilineRawBytesOpen.is_literal_open());
    assert!(!RawTag::LiteralText.is_literal_open());
    assert!(!RawTag::Bottom.is_literal_open());
}
