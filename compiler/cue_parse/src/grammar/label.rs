//! Labels.
//!
//! ```text
//! label      = (identifier '=')? label_expr
//! label_expr = label_name '?'? | '[' aliased_expr ']'
//! label_name = identifier | keyword | string_lit
//! ```
//!
//! Whether a declaration is a field is decided up front by scanning for
//! the `:` that ends its first label. Strings and bracketed labels are
//! skipped as balanced groups.

use cue_ir::ast::{Aliased, Identifier, Label, LabelExpr, LabelName};
use cue_ir::TokenKind;

use crate::recovery::{is_closer, is_opener};
use crate::{ErrorContext, ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// True if the tokens at the cursor form `label ':'`.
    pub(crate) fn at_field_start(&self) -> bool {
        self.label_end(self.cursor.position()).is_some()
    }

    /// Position just past the `:` of a label starting at `pos`.
    fn label_end(&self, mut pos: usize) -> Option<usize> {
        if *self.cursor.kind_at(pos) == TokenKind::Ident
            && *self.cursor.kind_at(pos + 1) == TokenKind::Eq
        {
            pos += 2;
        }
        let kind = self.cursor.kind_at(pos);
        pos = match kind {
            TokenKind::Ident => pos + 1,
            TokenKind::LiteralOpen(_) | TokenKind::LBracket => self.skip_group(pos)?,
            _ if kind.keyword_str().is_some() => pos + 1,
            _ => return None,
        };
        if *self.cursor.kind_at(pos) == TokenKind::Question {
            pos += 1;
        }
        (*self.cursor.kind_at(pos) == TokenKind::Colon).then_some(pos + 1)
    }

    /// Position just past the group opened at `pos`, if it is closed.
    fn skip_group(&self, mut pos: usize) -> Option<usize> {
        let mut depth = 0usize;
        loop {
            let kind = self.cursor.kind_at(pos);
            if *kind == TokenKind::Eof {
                return None;
            }
            if is_opener(kind) {
                depth += 1;
            } else if is_closer(kind) {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            pos += 1;
        }
    }

    pub(crate) fn parse_label(&mut self) -> Result<Label, ParseError> {
        let start = self.cursor.current_span();
        let alias = self.parse_alias();
        let value = self
            .parse_label_expr()
            .map_err(|e| e.with_context(ErrorContext::Label))?;
        Ok(Aliased {
            alias,
            value,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    fn parse_label_expr(&mut self) -> Result<LabelExpr, ParseError> {
        let token = self.cursor.current();
        let name = match token.kind {
            TokenKind::LBracket => {
                self.cursor.advance();
                let expr = self.with_context(ParseContext::BRACKETED, Self::parse_aliased_expr)?;
                let close = self.close(TokenKind::RBracket, token.span)?;
                return Ok(LabelExpr::Computed {
                    expr: Box::new(expr),
                    skipped: close.skipped,
                    span: token.span.merge(close.span),
                });
            }
            TokenKind::LiteralOpen(_) => LabelName::String(self.parse_string_literal()?),
            TokenKind::Ident => LabelName::Identifier(self.parse_identifier()?),
            ref kind if kind.keyword_str().is_some() => {
                self.cursor.advance();
                LabelName::Identifier(Identifier::new(self.cursor.text(token.span), token.span))
            }
            ref kind => return Err(ParseError::expected_label(kind, token.span)),
        };
        let optional = self.cursor.eat(&TokenKind::Question).map(|q| q.span);
        Ok(LabelExpr::Name {
            name,
            optional,
            span: token.span.merge(self.cursor.previous_span()),
        })
    }
}
