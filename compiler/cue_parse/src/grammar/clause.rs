//! Comprehensions.
//!
//! ```text
//! comprehension = start_clause (','? clause)* struct_lit
//! start_clause  = for_clause | guard_clause
//! clause        = start_clause | let_clause
//! for_clause    = 'for' binding (',' binding)? 'in' expression
//! guard_clause  = 'if' expression
//! ```

use cue_ir::ast::{Binding, Clause, Comprehension, ForClause, GuardClause};
use cue_ir::{Spanned, TokenKind};
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser, TokenSet};

impl Parser<'_> {
    pub(crate) fn parse_comprehension(&mut self) -> Result<Comprehension, ParseError> {
        let start = self.cursor.current_span();
        let mut clauses = vec![self.parse_start_clause()?];
        loop {
            if self.cursor.check(&TokenKind::Comma)
                && matches!(
                    self.cursor.peek_kind_at(1),
                    TokenKind::For | TokenKind::If | TokenKind::Let
                )
            {
                self.cursor.advance();
            }
            match self.cursor.current_kind() {
                TokenKind::For | TokenKind::If => clauses.push(self.parse_start_clause()?),
                TokenKind::Let => clauses.push(Clause::Let(
                    self.parse_let_clause()
                        .map_err(|e| e.with_context(ErrorContext::LetClause))?,
                )),
                _ => break,
            }
        }
        trace!(clauses = clauses.len(), "comprehension clauses");

        if !self.cursor.check(&TokenKind::LBrace) {
            return Err(ParseError::comprehension_without_body(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            )
            .with_context(ErrorContext::Comprehension));
        }
        let body = self.parse_struct_literal()?;
        let span = start.merge(body.span);
        Ok(Comprehension {
            clauses,
            body,
            span,
        })
    }

    fn parse_start_clause(&mut self) -> Result<Clause, ParseError> {
        if self.cursor.check(&TokenKind::For) {
            self.parse_for_clause()
                .map(Clause::For)
                .map_err(|e| e.with_context(ErrorContext::ForClause))
        } else {
            let keyword = self
                .expect(&TokenKind::If)
                .map_err(|e| e.with_context(ErrorContext::GuardClause))?
                .span;
            let condition = self.parse_expr_or_error()?;
            let span = keyword.merge(condition.span());
            Ok(Clause::Guard(GuardClause { condition, span }))
        }
    }

    fn parse_for_clause(&mut self) -> Result<ForClause, ParseError> {
        let keyword = self.expect(&TokenKind::For)?.span;
        let first = self.parse_binding()?;
        let second = match self.cursor.eat(&TokenKind::Comma) {
            Some(_) => Some(self.parse_binding()?),
            None => None,
        };
        if self.cursor.eat(&TokenKind::In).is_none() {
            let expected = if second.is_some() {
                TokenSet::single(TokenKind::In)
            } else {
                TokenSet::single(TokenKind::In).with(TokenKind::Comma)
            };
            return Err(ParseError::unexpected(
                self.cursor.current_kind(),
                self.cursor.current_span(),
                expected,
            ));
        }
        let source = self.parse_expr_or_error()?;
        let span = keyword.merge(source.span());
        Ok(ForClause {
            first,
            second,
            source,
            span,
        })
    }

    /// An identifier or `_`.
    fn parse_binding(&mut self) -> Result<Binding, ParseError> {
        if let Some(blank) = self.cursor.eat(&TokenKind::Underscore) {
            return Ok(Binding::Blank(blank.span));
        }
        self.parse_identifier().map(Binding::Identifier)
    }
}
