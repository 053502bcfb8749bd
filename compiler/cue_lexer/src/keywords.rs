//! Keyword resolution for the cooking layer.
//!
//! Only the seven statement keywords are resolved here. Builtins,
//! primitive type names, `null`, `true` and `false` stay identifiers:
//! they are classified by the parser in operand position and are free
//! to be used as labels everywhere else.

use cue_ir::TokenKind;

/// Look up a keyword by text.
///
/// Uses the length as a first-pass filter: every keyword is 2 to 7
/// bytes long and starts with a lowercase ASCII letter.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=7).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }
    match text {
        "in" => Some(TokenKind::In),
        "if" => Some(TokenKind::If),
        "for" => Some(TokenKind::For),
        "let" => Some(TokenKind::Let),
        "not" => Some(TokenKind::Not),
        "import" => Some(TokenKind::Import),
        "package" => Some(TokenKind::Package),
        _ => None,
    }
}
