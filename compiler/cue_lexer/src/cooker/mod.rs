//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into the parser's
//! `TokenKind` values with keyword resolution, number validation and
//! escape validation.
//!
//! # Architecture
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: Direct 1:1 mapping
//! - **Identifiers**: Keyword lookup
//! - **Numerics**: Digit and separator checks, base recorded in the kind
//! - **Literals**: Open/close tracked on a stack so escapes know whether
//!   they sit in a string or a bytes literal
//! - **Errors**: Push `LexError`, return a kind the parser can recover with
//!
//! Literal errors from the scanner (unterminated, unclosed, mismatched
//! fence) cook to `LiteralClose`, so every opened literal is closed in
//! the token stream even when the source never closes it.

use cue_ir::{LiteralKind, Span, TokenKind};
use cue_lexer_core::RawTag;

use crate::cook_escape::cook_escape;
use crate::cook_number::cook_number;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorContext};

/// A literal whose opener has been cooked but not its closer.
#[derive(Copy, Clone, Debug)]
struct OpenLiteral {
    kind: LiteralKind,
    start: u32,
    fence: u32,
}

/// Cooks raw tokens into parser-ready `TokenKind` values.
///
/// Accumulates errors for the entire file.
pub(crate) struct TokenCooker<'src> {
    source: &'src [u8],
    errors: Vec<LexError>,
    /// Number of errors before the current `cook()` call.
    errors_before_cook: usize,
    literals: Vec<OpenLiteral>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            errors: Vec::new(),
            errors_before_cook: 0,
            literals: Vec::new(),
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    #[cfg(test)]
    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Record an error found outside `cook()`.
    pub(crate) fn push_error(&mut self, err: LexError) {
        self.errors.push(err);
    }

    /// Check if the most recent `cook()` call added any errors.
    ///
    /// Used by the driver loop to set `TokenFlags::HAS_ERROR` on the token.
    pub(crate) fn last_cook_had_error(&self) -> bool {
        self.errors.len() > self.errors_before_cook
    }

    /// Number of literals opened and not yet closed.
    pub(crate) fn literal_depth(&self) -> usize {
        self.literals.len()
    }

    /// Cook a single raw token into a `TokenKind`.
    ///
    /// `offset` is the byte position of the token in source.
    /// `len` is the byte length of the token.
    #[inline]
    #[expect(
        clippy::too_many_lines,
        reason = "exhaustive RawTag → TokenKind cooking dispatch"
    )]
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> TokenKind {
        self.errors_before_cook = self.errors.len();
        let span = Span::new(offset, offset + len);
        match tag {
            // Operators
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::Ampersand => TokenKind::Amp,
            RawTag::AmpAmp => TokenKind::AmpAmp,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::Greater => TokenKind::Gt,
            RawTag::GreaterEqual => TokenKind::GtEq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::BangEqual => TokenKind::NotEq,
            RawTag::Equal => TokenKind::Eq,
            RawTag::EqualTilde => TokenKind::Match,
            RawTag::BangTilde => TokenKind::NotMatch,
            RawTag::Question => TokenKind::Question,
            RawTag::Dot => TokenKind::Dot,
            RawTag::DotDotDot => TokenKind::Ellipsis,

            // Delimiters
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Colon => TokenKind::Colon,

            // Identifiers and values
            RawTag::Ident => keywords::lookup(self.text(span)).unwrap_or(TokenKind::Ident),
            RawTag::Underscore => TokenKind::Underscore,
            RawTag::Bottom => TokenKind::Bottom,
            RawTag::Attribute => TokenKind::Attribute,

            // Numeric literals
            RawTag::Int
            | RawTag::Float
            | RawTag::HexInt
            | RawTag::OctInt
            | RawTag::BinInt
            | RawTag::SiInt => {
                let text = self.text(span);
                cook_number(tag, text, span, &mut self.errors)
            }

            // String and bytes literals
            RawTag::StringOpen
            | RawTag::BytesOpen
            | RawTag::MultilineStringOpen
            | RawTag::MultilineBytesOpen
            | RawTag::RawStringOpen
            | RawTag::RawBytesOpen
            | RawTag::MultilineRawStringOpen
            | RawTag::MultilineRawBytesOpen => self.cook_literal_open(tag, span),
            RawTag::LiteralText => TokenKind::LiteralText,
            RawTag::Escape => self.cook_escape(span),
            RawTag::InterpolationOpen => TokenKind::InterpolationOpen,
            RawTag::InterpolationClose => TokenKind::InterpolationClose,
            RawTag::LiteralClose => {
                self.literals.pop();
                TokenKind::LiteralClose
            }

            // Literal errors
            RawTag::UnterminatedLiteral => {
                if let Some(open) = self.literals.pop() {
                    self.errors
                        .push(LexError::unterminated_literal(span, open.kind, open.start));
                }
                TokenKind::LiteralClose
            }
            RawTag::UnclosedDelimiter => {
                if let Some(open) = self.literals.pop() {
                    self.errors
                        .push(LexError::unclosed_delimiter(span, open.kind, open.start));
                }
                TokenKind::LiteralClose
            }
            RawTag::MismatchedFence => {
                if let Some(open) = self.literals.pop() {
                    let found = count_trailing_hashes(self.text(span));
                    self.errors
                        .push(LexError::mismatched_fence(span, open.fence, found));
                }
                TokenKind::LiteralClose
            }

            // Other error tags
            RawTag::InvalidByte => self.cook_invalid_character(span),
            RawTag::StrayBackslash => {
                self.errors.push(LexError::stray_backslash(span));
                TokenKind::Error
            }
            RawTag::Bang => {
                self.errors.push(LexError::lone_bang(span));
                TokenKind::Error
            }
            RawTag::MalformedAttribute => {
                self.errors.push(LexError::malformed_attribute(span));
                TokenKind::Error
            }
            // Still an identifier so the parser can continue
            RawTag::InvalidIdentifier => {
                self.errors.push(LexError::invalid_identifier(span));
                TokenKind::Ident
            }

            // Trivia and interior nulls (should not reach cook, handled by driver)
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::InteriorNull => {
                debug_assert!(
                    false,
                    "Trivia/InteriorNull tags should be handled by the driver loop, not cook()"
                );
                TokenKind::Error
            }

            // EOF (should not reach cook, handled by driver)
            RawTag::Eof => {
                debug_assert!(false, "Eof should be handled by the driver loop, not cook()");
                TokenKind::Eof
            }
        }
    }

    fn cook_literal_open(&mut self, tag: RawTag, span: Span) -> TokenKind {
        let (bytes, multiline) = match tag {
            RawTag::StringOpen | RawTag::RawStringOpen => (false, false),
            RawTag::BytesOpen | RawTag::RawBytesOpen => (true, false),
            RawTag::MultilineStringOpen | RawTag::MultilineRawStringOpen => (false, true),
            _ => (true, true),
        };
        let fence = count_leading_hashes(self.text(span));
        let kind = LiteralKind::from_parts(bytes, multiline, fence > 0);
        self.literals.push(OpenLiteral {
            kind,
            start: span.start,
            fence,
        });
        TokenKind::LiteralOpen(kind)
    }

    fn cook_escape(&mut self, span: Span) -> TokenKind {
        let (bytes, context) = match self.literals.last() {
            Some(open) => (
                open.kind.is_bytes(),
                LexErrorContext::InsideLiteral {
                    kind: open.kind,
                    start: open.start,
                },
            ),
            None => (false, LexErrorContext::TopLevel),
        };
        let text = slice_source(self.source, span);
        TokenKind::Escape(cook_escape(text, span, bytes, context, &mut self.errors))
    }

    #[cold]
    fn cook_invalid_character(&mut self, span: Span) -> TokenKind {
        let ch = self.text(span).chars().next().unwrap_or('\u{FFFD}');
        self.errors.push(LexError::invalid_character(span, ch));
        TokenKind::Error
    }

    #[inline]
    fn text(&self, span: Span) -> &'src str {
        slice_source(self.source, span)
    }
}

/// Slice source bytes as `&str`.
///
/// Token boundaries always fall on UTF-8 character boundaries, so the
/// conversion only fails on a scanner bug; it then yields `""`.
#[inline]
fn slice_source(source: &[u8], span: Span) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .unwrap_or_default()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "fence length is bounded by the token length, a u32"
)]
fn count_leading_hashes(text: &str) -> u32 {
    text.bytes().take_while(|&b| b == b'#').count() as u32
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "fence length is bounded by the token length, a u32"
)]
fn count_trailing_hashes(text: &str) -> u32 {
    text.bytes().rev().take_while(|&b| b == b'#').count() as u32
}
