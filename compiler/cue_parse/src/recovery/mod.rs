//! Error recovery for the parser.
//!
//! Provides token sets for "expected ..." reporting and the
//! resynchronization routine used after a syntax error.
//! Uses bitset-based O(1) membership testing inspired by Go's parser.

use cue_ir::{TokenKind, TokenTag};

use crate::context::ParseContext;
use crate::cursor::Cursor;

// TokenSet is a u128 bitset, so every discriminant index must be below 128.
const _: () = assert!(
    TokenTag::MAX_DISCRIMINANT <= 127,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
/// Payload-carrying kinds (`Int(_)`, `LiteralOpen(_)`, `Escape(_)`) share
/// one bit per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the discriminant indices in this set, lowest first.
    pub fn iter_indices(&self) -> TokenSetIterator {
        TokenSetIterator { bits: self.0 }
    }

    /// Format this token set as a human-readable list for error messages.
    ///
    /// Returns a string like "`,`, `)`, or `}`" for multiple tokens,
    /// or "`(`" for a single token, or "nothing" for an empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self
            .iter_indices()
            .filter_map(TokenKind::friendly_name_from_index)
            .collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => format!("`{single}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [rest @ .., last] => {
                let rest_str = rest
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{rest_str}, or `{last}`")
            }
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over discriminant indices in a `TokenSet`.
pub struct TokenSetIterator {
    bits: u128,
}

impl Iterator for TokenSetIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "u128::trailing_zeros() max is 127"
        )]
        let idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for TokenSetIterator {}

// Pre-defined token sets, computed at compile time.

/// Tokens that can begin an expression.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::Int(cue_ir::IntBase::Decimal))
    .with(TokenKind::Float)
    .with(TokenKind::LiteralOpen(cue_ir::LiteralKind::SimpleString))
    .with(TokenKind::Underscore)
    .with(TokenKind::Bottom)
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::Not);

/// Tokens that can begin a label.
pub const LABEL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::LiteralOpen(cue_ir::LiteralKind::SimpleString))
    .with(TokenKind::LBracket);

/// Tokens that can begin a declaration.
pub const DECL_START: TokenSet = EXPR_START
    .with(TokenKind::Let)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::Ellipsis);

/// Tokens that open a nested region skipped as a unit during recovery.
const OPENERS: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace)
    .with(TokenKind::LiteralOpen(cue_ir::LiteralKind::SimpleString))
    .with(TokenKind::InterpolationOpen);

/// Tokens that close a nested region.
const CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::LiteralClose)
    .with(TokenKind::InterpolationClose);

#[inline]
pub(crate) fn is_opener(kind: &TokenKind) -> bool {
    OPENERS.contains(kind)
}

#[inline]
pub(crate) fn is_closer(kind: &TokenKind) -> bool {
    CLOSERS.contains(kind)
}

/// Skip tokens until a safe point to resume parsing.
///
/// Stops before a `,` or a closing bracket at the starting nesting level,
/// before a token that begins a new line when newlines terminate
/// declarations, or at end of input. The first token is always examined
/// without the newline check, since the error was reported on it.
///
/// At the top level a stray closing bracket has nothing to close, so it
/// is skipped instead of stopping.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, context: ParseContext) -> usize {
    let newline_terminates = context.contains(ParseContext::NEWLINE_TERMINATES);
    let top_level = context.contains(ParseContext::TOP_LEVEL);
    let mut depth = 0usize;
    let mut skipped = 0usize;

    loop {
        let kind = *cursor.current_kind();
        if kind == TokenKind::Eof {
            break;
        }
        if depth == 0 {
            if kind == TokenKind::Comma {
                break;
            }
            if skipped > 0 && newline_terminates && cursor.has_newline_before() {
                break;
            }
            if CLOSERS.contains(&kind) && !top_level {
                break;
            }
        }
        if OPENERS.contains(&kind) {
            depth += 1;
        } else if CLOSERS.contains(&kind) {
            depth = depth.saturating_sub(1);
        }
        cursor.advance();
        skipped += 1;
    }
    skipped
}

/// Skip tokens up to, but not including, the closer of the current region.
///
/// Used after a `...` in a list, where everything until `]` is rejected.
pub fn skip_to_closer(cursor: &mut Cursor<'_>) -> usize {
    let mut depth = 0usize;
    let mut skipped = 0usize;
    loop {
        let kind = *cursor.current_kind();
        if kind == TokenKind::Eof || (depth == 0 && CLOSERS.contains(&kind)) {
            break;
        }
        if OPENERS.contains(&kind) {
            depth += 1;
        } else if CLOSERS.contains(&kind) {
            depth -= 1;
        }
        cursor.advance();
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod tests;
