//! String and bytes literals, interpolations and attributes.
//!
//! The lexer splits every literal into an opener, a run of text, escape
//! and interpolation tokens, and a closer. It always emits the closer,
//! even for an unterminated literal, so assembly here only has to walk
//! the parts in order.

use cue_ir::ast::{Attribute, Identifier, Interpolation, LiteralPart, StringLiteral};
use cue_ir::{LiteralKind, Span, Spanned, TokenKind};

use crate::{ErrorContext, ParseContext, ParseError, Parser, TokenSet};

/// Tokens that may follow a literal opener.
const LITERAL_PARTS: TokenSet = TokenSet::new()
    .with(TokenKind::LiteralText)
    .with(TokenKind::Escape(cue_ir::EscapeKind::Char))
    .with(TokenKind::InterpolationOpen)
    .with(TokenKind::LiteralClose);

impl Parser<'_> {
    /// Any of the eight string and bytes literal forms.
    pub(crate) fn parse_string_literal(&mut self) -> Result<StringLiteral, ParseError> {
        let open = self.cursor.current();
        let TokenKind::LiteralOpen(kind) = open.kind else {
            return Err(ParseError::unexpected(
                &open.kind,
                open.span,
                TokenSet::single(TokenKind::LiteralOpen(LiteralKind::SimpleString)),
            ));
        };
        self.cursor.advance();

        let mut parts = Vec::new();
        loop {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::LiteralText => {
                    self.cursor.advance();
                    parts.push(LiteralPart::Text {
                        text: self.cursor.text(token.span).into(),
                        span: token.span,
                    });
                }
                TokenKind::Escape(escape) => {
                    self.cursor.advance();
                    parts.push(LiteralPart::Escape {
                        kind: escape,
                        text: self.cursor.text(token.span).into(),
                        span: token.span,
                    });
                }
                TokenKind::InterpolationOpen => {
                    parts.push(LiteralPart::Interpolation(self.parse_interpolation()?));
                }
                TokenKind::LiteralClose => break,
                ref other => {
                    return Err(ParseError::unexpected(other, token.span, LITERAL_PARTS)
                        .with_context(ErrorContext::StringLiteral));
                }
            }
        }
        let close = self.cursor.advance().span;

        Ok(StringLiteral {
            kind,
            parts,
            span: open.span.merge(close),
        })
    }

    /// `\( expression )` or, in raw literals, `\#( expression )`.
    fn parse_interpolation(&mut self) -> Result<Interpolation, ParseError> {
        let open = self.expect(&TokenKind::InterpolationOpen)?.span;
        let raw = self.cursor.text(open).starts_with("\\#");
        let expression = self
            .nested(|p| p.with_context(ParseContext::BRACKETED, Self::parse_expr_or_error))
            .map_err(|e| e.with_context(ErrorContext::Interpolation))?;
        let close = self.close(TokenKind::InterpolationClose, open)?;
        let span = open.merge(close.span).merge(expression.span());
        Ok(Interpolation {
            raw,
            expression: Box::new(expression),
            skipped: close.skipped,
            span,
        })
    }

    /// Split an attribute token into its name and verbatim body.
    ///
    /// The lexer only produces `Attribute` for a complete `@name(...)`.
    pub(crate) fn parse_attribute(&mut self) -> Attribute {
        debug_assert!(self.cursor.check(&TokenKind::Attribute));
        let span = self.cursor.advance().span;
        let text = self.cursor.text(span);
        let inner = text.strip_prefix('@').unwrap_or(text);
        let (name, body) = match inner.split_once('(') {
            Some((name, rest)) => (name, rest.strip_suffix(')').unwrap_or(rest)),
            None => (inner, ""),
        };
        let name_start = span.start + 1;
        let name_end = name_start + u32::try_from(name.len()).unwrap_or(0);
        Attribute {
            name: Identifier::new(name, Span::new(name_start, name_end)),
            body: body.into(),
            span,
        }
    }
}
