//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use cue_ir::{Span, Token, TokenFlags, TokenKind, TokenList, TokenTag};
use tracing::trace;

/// Cursor for navigating tokens.
///
/// Tracks the current position in the token stream. The last token of
/// every `TokenList` is `Eof` and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Dense array of discriminant tags, parallel to `tokens`.
    tags: &'a [u8],
    /// Dense array of per-token metadata flags, parallel to `tokens`.
    flags: &'a [TokenFlags],
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        debug_assert!(
            tokens.kinds().last() == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            tags: tokens.tags(),
            flags: tokens.flags(),
            source,
            pos: 0,
        }
    }

    /// Current position in the token stream.
    ///
    /// Compare positions before and after parsing to tell whether
    /// tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Source text of the current token.
    #[inline]
    pub fn current_text(&self) -> &'a str {
        self.text(self.current_span())
    }

    /// Source text covered by `span`.
    #[inline]
    pub fn text(&self, span: Span) -> &'a str {
        self.source.get(span.to_range()).unwrap_or_default()
    }

    /// Span of the most recently consumed token.
    ///
    /// A point at offset 0 before anything has been consumed.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.token_at(prev).span,
            None => Span::point(0),
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenTag::Eof as u8
    }

    /// Discriminant tag of the current token.
    #[inline]
    pub fn current_tag(&self) -> u8 {
        self.tag_at(self.pos)
    }

    /// Check if the current token matches the given kind, ignoring payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_tag() == kind.discriminant_index()
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        self.current_tag() == TokenTag::Ident as u8
    }

    /// Check if the current token is a keyword.
    #[inline]
    pub fn check_keyword(&self) -> bool {
        self.current_kind().keyword_str().is_some()
    }

    /// Peek at the token kind at offset `n` from the current position.
    ///
    /// `peek_kind_at(0)` is the current token. Returns `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        &self.token_at(self.pos + n).kind
    }

    /// Kind of the token at absolute position `pos`; `Eof` past the end.
    #[inline]
    pub fn kind_at(&self, pos: usize) -> &'a TokenKind {
        &self.token_at(pos).kind
    }

    /// Span of the token at absolute position `pos`; the `Eof` span past the end.
    #[inline]
    pub fn span_at(&self, pos: usize) -> Span {
        self.token_at(pos).span
    }

    /// Flags of the token at absolute position `pos`.
    #[inline]
    pub fn flags_at(&self, pos: usize) -> TokenFlags {
        self.flags
            .get(pos)
            .copied()
            .unwrap_or(TokenFlags::EMPTY)
    }

    /// Check if the next token (lookahead) is the given kind.
    #[inline]
    pub fn next_is(&self, kind: &TokenKind) -> bool {
        self.tag_at(self.pos + 1) == kind.discriminant_index()
    }

    // ─── TokenFlags Access ─────────────────────────────────────────────

    #[inline]
    pub fn current_flags(&self) -> TokenFlags {
        self.flags_at(self.pos)
    }

    /// True if the current token was preceded by a line break.
    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.current_flags().has_newline_before()
    }

    /// True if the current token touches the previous one (no whitespace,
    /// newline or comment between them).
    #[inline]
    pub fn is_adjacent(&self) -> bool {
        self.current_flags().is_adjacent()
    }

    /// True if the lexer reported an error on the current token.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.current_flags().has_error()
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At `Eof` the cursor stays put and keeps returning `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let current = self.pos;
        let token = self.token_at(current);
        trace!(
            pos = current,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    #[inline]
    fn token_at(&self, pos: usize) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens.as_slice()[pos.min(last)]
    }

    #[inline]
    fn tag_at(&self, pos: usize) -> u8 {
        self.tags
            .get(pos)
            .copied()
            .unwrap_or(TokenTag::Eof as u8)
    }
}
