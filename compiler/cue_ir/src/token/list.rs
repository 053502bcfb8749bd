//! Lexer output: tokens with parallel tag and flag arrays.

use super::{Token, TokenFlags, TokenKind};
use crate::Span;

/// The tokens of one source file.
///
/// `tags[i] == tokens[i].kind.discriminant_index()` and `flags[i]`
/// describes the trivia before `tokens[i]`. The list always ends with
/// an `Eof` token once the lexer has finished. Comment spans are kept
/// on the side since comments never reach the parser.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<u8>,
    flags: Vec<TokenFlags>,
    comments: Vec<Span>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
            comments: Vec::new(),
        }
    }

    /// Append a token with empty flags.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.push_with_flags(token, TokenFlags::EMPTY);
    }

    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.tags.push(token.kind.discriminant_index());
        self.tokens.push(token);
        self.flags.push(flags);
    }

    /// Record the span of a `//` comment.
    #[inline]
    pub fn push_comment(&mut self, span: Span) {
        self.comments.push(span);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    #[inline]
    pub fn flags(&self) -> &[TokenFlags] {
        &self.flags
    }

    #[inline]
    pub fn comments(&self) -> &[Span] {
        &self.comments
    }

    /// Token kinds in order, mostly for tests and debugging output.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// Split into the tokens, their flags and the comment spans.
    pub fn into_parts(self) -> (Vec<Token>, Vec<TokenFlags>, Vec<Span>) {
        (self.tokens, self.flags, self.comments)
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
