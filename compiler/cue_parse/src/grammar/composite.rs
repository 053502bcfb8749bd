//! Struct and list literals.
//!
//! ```text
//! struct_lit = '{' ((declaration | attribute) ','?)* '}'
//! list_lit   = '[' (embedding (',' embedding)* (',' ellipsis)? ','? | ellipsis ','?)? ']'
//! ```
//!
//! Separators are optional: `{a: 1 b: 2}` holds two fields and `[1 2]`
//! two elements. Line breaks inside brackets are just whitespace.

use cue_ir::ast::{
    Aliased, Declaration, Embedding, ErrorNode, Expression, ListLiteral, StructLiteral,
    StructMember, StructMemberKind,
};
use cue_ir::{Span, TokenKind};
use tracing::trace;

use crate::recovery::{is_closer, skip_to_closer};
use crate::{ErrorContext, ParseContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_struct_literal(&mut self) -> Result<StructLiteral, ParseError> {
        self.nested(|p| p.with_context(ParseContext::STRUCT_BODY, Self::parse_struct_body))
            .map_err(|e| e.with_context(ErrorContext::StructLiteral))
    }

    fn parse_struct_body(&mut self) -> Result<StructLiteral, ParseError> {
        let open = self.expect(&TokenKind::LBrace)?.span;
        let mut members = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.position();
            let kind = if self.cursor.check(&TokenKind::Attribute) {
                StructMemberKind::Attribute(self.parse_attribute())
            } else {
                StructMemberKind::Declaration(self.parse_declaration_or_error()?)
            };
            let comma = self.cursor.eat(&TokenKind::Comma).map(|c| c.span);
            members.push(StructMember { kind, comma });

            // A closer that is not ours ends the struct; `close` reports it.
            if comma.is_none()
                && (self.cursor.position() == start || is_closer(self.cursor.current_kind()))
            {
                break;
            }
        }
        let close = self.close(TokenKind::RBrace, open)?;
        if let Some(node) = close.skipped {
            members.push(StructMember {
                kind: StructMemberKind::Declaration(Declaration::Error(node)),
                comma: None,
            });
        }
        trace!(members = members.len(), "struct literal");
        Ok(StructLiteral {
            members,
            span: open.merge(close.span),
        })
    }

    pub(crate) fn parse_list_literal(&mut self) -> Result<ListLiteral, ParseError> {
        self.nested(|p| p.with_context(ParseContext::BRACKETED, Self::parse_list_body))
            .map_err(|e| e.with_context(ErrorContext::ListLiteral))
    }

    fn parse_list_body(&mut self) -> Result<ListLiteral, ParseError> {
        let open = self.expect(&TokenKind::LBracket)?.span;
        let mut elements = Vec::new();
        let mut ellipsis = None;
        let mut rejected = None;
        let mut trailing_comma = None;

        while !self.cursor.check(&TokenKind::RBracket) && !self.cursor.is_at_end() {
            if self.cursor.check(&TokenKind::Ellipsis) {
                let dots = self.parse_ellipsis()?;
                trailing_comma = self.cursor.eat(&TokenKind::Comma).map(|c| c.span);
                if !self.cursor.is_at_end() && !is_closer(self.cursor.current_kind()) {
                    trailing_comma = None;
                    rejected = self.reject_after_ellipsis(dots.span)?;
                }
                ellipsis = Some(dots);
                break;
            }

            elements.push(self.parse_list_element()?);
            trailing_comma = self.cursor.eat(&TokenKind::Comma).map(|c| c.span);
            // A closer that is not ours ends the list; `close` reports it.
            if trailing_comma.is_none() && is_closer(self.cursor.current_kind()) {
                break;
            }
        }

        let close = self.close(TokenKind::RBracket, open)?;
        if let Some(node) = close.skipped {
            if ellipsis.is_some() {
                rejected = rejected.or(Some(node));
            } else {
                elements.push(Embedding::Expression(Aliased::bare(Expression::Error(node))));
            }
        }
        trace!(elements = elements.len(), open = ellipsis.is_some(), "list literal");
        Ok(ListLiteral {
            elements,
            ellipsis,
            rejected,
            trailing_comma,
            span: open.merge(close.span),
        })
    }

    fn parse_list_element(&mut self) -> Result<Embedding, ParseError> {
        if matches!(self.cursor.current_kind(), TokenKind::For | TokenKind::If) {
            return self.parse_comprehension().map(Embedding::Comprehension);
        }
        self.parse_aliased_expr().map(Embedding::Expression)
    }

    /// Report and skip everything between a list's `...` and its `]`.
    fn reject_after_ellipsis(&mut self, dots: Span) -> Result<Option<ErrorNode>, ParseError> {
        let start = self.cursor.position();
        if skip_to_closer(&mut self.cursor) == 0 {
            return Ok(None);
        }
        let span = self.span_from(start);
        self.report(
            ParseError::element_after_ellipsis(span, dots).with_context(ErrorContext::ListLiteral),
        )?;
        Ok(Some(ErrorNode { span }))
    }
}
