//! Postfix chains: selectors, indexes and calls.
//!
//! `.` and `[` must touch the expression they apply to. A call's callee
//! is restricted to a builtin name or `package.name`.

use cue_ir::ast::{
    Builtin, CallExpression, Callee, ErrorNode, Expression, IndexExpression, Operand,
    PrimaryExpression, QualifiedIdentifier, Selector, SelectorExpression,
};
use cue_ir::{LiteralKind, Span, Spanned, TokenKind};

use crate::recovery::skip_to_closer;
use crate::{ErrorContext, ParseContext, ParseError, Parser, TokenSet};

impl Parser<'_> {
    /// An operand followed by any number of postfix operations.
    ///
    /// Every postfix operation wraps the chain so far, so each one counts
    /// as a nesting level.
    pub(crate) fn parse_postfix(&mut self) -> Result<PrimaryExpression, ParseError> {
        self.chain(|p| {
            let mut expr = PrimaryExpression::Operand(p.parse_operand()?);
            loop {
                if p.at_line_break() {
                    break;
                }
                let kind = p.cursor.current_kind();
                if !matches!(kind, TokenKind::Dot | TokenKind::LBracket | TokenKind::LParen) {
                    break;
                }
                p.link()?;
                expr = match kind {
                    TokenKind::Dot => p
                        .parse_selector(expr)
                        .map_err(|e| e.with_context(ErrorContext::Selector))?,
                    TokenKind::LBracket => p
                        .parse_index(expr)
                        .map_err(|e| e.with_context(ErrorContext::Index))?,
                    _ => p
                        .parse_call(expr)
                        .map_err(|e| e.with_context(ErrorContext::CallArguments))?,
                };
            }
            Ok(expr)
        })
    }

    /// Report whitespace between an operand and its `.` or `[`.
    fn check_attached(&mut self) -> Result<(), ParseError> {
        if self.cursor.is_adjacent() {
            return Ok(());
        }
        self.report(ParseError::detached_postfix(
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))
    }

    fn parse_selector(&mut self, operand: PrimaryExpression) -> Result<PrimaryExpression, ParseError> {
        self.check_attached()?;
        self.cursor.advance();
        let selector = match self.cursor.current_kind() {
            TokenKind::Ident => Selector::Identifier(self.parse_identifier()?),
            TokenKind::LiteralOpen(LiteralKind::SimpleString) => {
                Selector::String(self.parse_string_literal()?)
            }
            other => {
                return Err(ParseError::unexpected(
                    other,
                    self.cursor.current_span(),
                    TokenSet::single(TokenKind::Ident)
                        .with(TokenKind::LiteralOpen(LiteralKind::SimpleString)),
                ));
            }
        };
        let span = operand.span().merge(selector.span());
        Ok(PrimaryExpression::Selector(SelectorExpression {
            operand: Box::new(operand),
            selector,
            span,
        }))
    }

    fn parse_index(&mut self, operand: PrimaryExpression) -> Result<PrimaryExpression, ParseError> {
        self.check_attached()?;
        let open = self.cursor.advance().span;
        let index = self.with_context(ParseContext::BRACKETED, Self::parse_expr_or_error)?;
        let close = self.close(TokenKind::RBracket, open)?;
        let span = operand.span().merge(close.span);
        Ok(PrimaryExpression::Index(IndexExpression {
            operand: Box::new(operand),
            index: Box::new(index),
            skipped: close.skipped,
            span,
        }))
    }

    fn parse_call(&mut self, callee: PrimaryExpression) -> Result<PrimaryExpression, ParseError> {
        let callee = into_callee(callee).map_err(ParseError::bad_callee)?;
        let open = self.cursor.advance().span;
        let arguments = self.with_context(ParseContext::BRACKETED, |p| p.parse_arguments(open))?;
        let close = self.close(TokenKind::RParen, open)?;
        let span = callee.span().merge(close.span);
        Ok(PrimaryExpression::Call(CallExpression {
            callee,
            arguments,
            span,
        }))
    }

    /// `argument (',' argument)*`; at least one is required.
    fn parse_arguments(&mut self, open: Span) -> Result<Vec<Expression>, ParseError> {
        if self.cursor.check(&TokenKind::RParen) {
            let span = open.merge(self.cursor.current_span());
            self.report(ParseError::empty_call(span))?;
            return Ok(vec![Expression::Error(ErrorNode {
                span: Span::point(self.cursor.current_span().start),
            })]);
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_expr_or_error()?);
            if self.cursor.eat(&TokenKind::Comma).is_none() {
                break;
            }
        }
        if !self.cursor.check(&TokenKind::RParen) && !self.cursor.is_at_end() {
            self.report(
                ParseError::unexpected(
                    self.cursor.current_kind(),
                    self.cursor.current_span(),
                    TokenSet::single(TokenKind::RParen).with(TokenKind::Comma),
                )
                .with_context(ErrorContext::CallArguments),
            )?;
            let start = self.cursor.position();
            if skip_to_closer(&mut self.cursor) > 0 {
                arguments.push(Expression::Error(ErrorNode {
                    span: self.span_from(start),
                }));
            }
        }
        Ok(arguments)
    }
}

/// The callee of a call, or the span of an expression that cannot be called.
fn into_callee(expr: PrimaryExpression) -> Result<Callee, Span> {
    match expr {
        PrimaryExpression::Operand(Operand::Identifier(ident)) => {
            match Builtin::from_name(&ident.name) {
                Some(builtin) => Ok(Callee::Builtin {
                    builtin,
                    span: ident.span,
                }),
                None => Err(ident.span),
            }
        }
        PrimaryExpression::Selector(selector) => {
            let span = selector.span;
            match (*selector.operand, selector.selector) {
                (
                    PrimaryExpression::Operand(Operand::Identifier(package)),
                    Selector::Identifier(name),
                ) => Ok(Callee::Qualified(QualifiedIdentifier {
                    package,
                    name,
                    span,
                })),
                _ => Err(span),
            }
        }
        other => Err(other.span()),
    }
}
