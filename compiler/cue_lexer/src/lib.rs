//! Lexer for CUE.
//!
//! Drives the raw scanner from `cue_lexer_core` and cooks its output
//! into a `TokenList`. Whitespace, newlines and comments never become
//! tokens: they are folded into the [`TokenFlags`] of the next token,
//! and comment spans are kept on the side.
//!
//! Lexing never fails. Problems are returned as [`LexError`]s next to
//! a token list that still covers the whole source.

mod cook_escape;
mod cook_number;
mod cooker;
mod keywords;
pub mod lex_error;

use cue_ir::{Span, Token, TokenFlags, TokenKind, TokenList};
use cue_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use crate::cooker::TokenCooker;
pub use crate::lex_error::{ErrorCategory, LexError, LexErrorContext, LexErrorKind};

/// Result of lexing one source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Errors ordered by position.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList` and its errors.
pub fn lex(source: &str) -> LexOutput {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut cooker = TokenCooker::new(source.as_bytes());
    let mut tokens = TokenList::with_capacity(source.len() / 3 + 1);

    for &pos in buf.interior_nulls() {
        cooker.push_error(LexError::nul_byte(Span::new(pos, pos + 1)));
    }

    let mut offset = 0u32;
    let mut pending = 0u8;
    let mut line_start = true;
    loop {
        let raw = scanner.next_token();
        let span = Span::new(offset, offset + raw.len);
        offset += raw.len;

        match raw.tag {
            RawTag::Whitespace | RawTag::InteriorNull => pending |= TokenFlags::SPACE_BEFORE,
            RawTag::Newline => {
                pending |= TokenFlags::NEWLINE_BEFORE;
                line_start = true;
            }
            RawTag::LineComment => {
                pending |= TokenFlags::TRIVIA_BEFORE;
                tokens.push_comment(span);
            }
            RawTag::Eof => {
                let flags = token_flags(pending, line_start, tokens.is_empty());
                tokens.push_with_flags(Token::new(TokenKind::Eof, span), flags);
                break;
            }
            tag => {
                let kind = cooker.cook(tag, span.start, raw.len);
                let mut flags = token_flags(pending, line_start, tokens.is_empty());
                if cooker.last_cook_had_error() {
                    flags.set(TokenFlags::HAS_ERROR);
                }
                if tag.is_literal_open() || kind == TokenKind::LiteralClose {
                    trace!(
                        ?kind,
                        offset = span.start,
                        depth = cooker.literal_depth(),
                        "literal mode"
                    );
                }
                tokens.push_with_flags(Token::new(kind, span), flags);
                pending = 0;
                line_start = false;
            }
        }
    }

    let mut errors = cooker.into_errors();
    errors.sort_by_key(|e| e.span.start);
    debug!(tokens = tokens.len(), errors = errors.len(), "lexed");
    LexOutput { tokens, errors }
}

/// Flags for a token preceded by the `pending` trivia bits.
fn token_flags(pending: u8, line_start: bool, first: bool) -> TokenFlags {
    let mut flags = TokenFlags::from_bits(pending);
    if line_start {
        flags.set(TokenFlags::LINE_START);
    }
    if pending == 0 && !first {
        flags.set(TokenFlags::ADJACENT);
    }
    flags
}

#[cfg(test)]
mod tests;
