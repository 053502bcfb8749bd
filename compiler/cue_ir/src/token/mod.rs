//! Token types for the CUE lexer.

mod flags;
mod kind;
mod list;
mod tag;

pub use flags::TokenFlags;
pub use kind::{EscapeKind, IntBase, LiteralKind, TokenKind};
pub use list::TokenList;
pub use tag::TokenTag;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    // Kind fits in two bytes; the span's alignment pads it to 12.
    crate::static_assert_size!(Token, 12);
}

#[cfg(test)]
mod tests;
