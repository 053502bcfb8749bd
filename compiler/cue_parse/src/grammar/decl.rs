//! Declarations.
//!
//! ```text
//! declaration = field | ellipsis | embedding | let_clause
//! field       = (label ':')+ aliased_expr attribute*
//! ellipsis    = '...' expression?
//! embedding   = comprehension | aliased_expr
//! let_clause  = 'let' identifier '=' expression
//! ```

use cue_ir::ast::{
    Aliased, AliasedExpression, Declaration, Ellipsis, Embedding, Field, Identifier, LetClause,
};
use cue_ir::{Spanned, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

use crate::recovery::{DECL_START, EXPR_START};
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one declaration.
    ///
    /// Fields are recognised by lookahead, so keywords such as `if` or
    /// `let` followed by `:` are labels rather than clause openers.
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        if self.at_field_start() {
            return self.parse_field().map(Declaration::Field);
        }
        let kind = *self.cursor.current_kind();
        match kind {
            TokenKind::Let => self.parse_let_clause().map(Declaration::Let),
            TokenKind::For | TokenKind::If => self
                .parse_comprehension()
                .map(|c| Declaration::Embedding(Embedding::Comprehension(c))),
            TokenKind::Ellipsis => self
                .parse_ellipsis()
                .map(Declaration::Ellipsis)
                .map_err(|e| e.with_context(ErrorContext::Ellipsis)),
            _ if DECL_START.contains(&kind) => self
                .parse_aliased_expr()
                .map(|e| Declaration::Embedding(Embedding::Expression(e))),
            _ => Err(
                ParseError::expected_expression(&kind, self.cursor.current_span())
                    .with_expected(DECL_START),
            ),
        }
    }

    /// A declaration, or an `ERROR` node covering a broken one.
    pub(crate) fn parse_declaration_or_error(&mut self) -> Result<Declaration, ParseError> {
        let start = self.cursor.position();
        match self.parse_declaration() {
            Ok(declaration) => Ok(declaration),
            Err(error) => Ok(Declaration::Error(self.recover(error, start)?)),
        }
    }

    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let start = self.cursor.current_span();
        let mut labels = SmallVec::new();
        loop {
            labels.push(self.parse_label()?);
            self.expect(&TokenKind::Colon)
                .map_err(|e| e.with_context(ErrorContext::Field))?;
            if !self.at_field_start() {
                break;
            }
        }
        trace!(labels = labels.len(), "field labels");

        let value = self.parse_aliased_expr()?;

        let mut attributes = Vec::new();
        while self.cursor.check(&TokenKind::Attribute) && !self.at_line_break() {
            attributes.push(self.parse_attribute());
        }

        Ok(Field {
            labels,
            value,
            attributes,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `(identifier '=')? expression`, recovering from a broken expression.
    pub(crate) fn parse_aliased_expr(&mut self) -> Result<AliasedExpression, ParseError> {
        let alias = self.parse_alias();
        let value = self.parse_expr_or_error()?;
        let span = match &alias {
            Some(alias) => alias.span.merge(value.span()),
            None => value.span(),
        };
        Ok(Aliased { alias, value, span })
    }

    /// Consume `name =` if present.
    pub(crate) fn parse_alias(&mut self) -> Option<Identifier> {
        if !(self.cursor.check_ident() && self.cursor.next_is(&TokenKind::Eq)) {
            return None;
        }
        let name = self.cursor.advance();
        self.cursor.advance();
        Some(Identifier::new(self.cursor.text(name.span), name.span))
    }

    pub(crate) fn parse_let_clause(&mut self) -> Result<LetClause, ParseError> {
        let keyword = self.expect(&TokenKind::Let)?.span;
        let left = self
            .parse_identifier()
            .map_err(|e| e.with_context(ErrorContext::LetClause))?;
        self.expect(&TokenKind::Eq)
            .map_err(|e| e.with_context(ErrorContext::LetClause))?;
        let right = self.parse_expr_or_error()?;
        let span = keyword.merge(right.span());
        Ok(LetClause { left, right, span })
    }

    /// `...` with an optional value on the same line.
    pub(crate) fn parse_ellipsis(&mut self) -> Result<Ellipsis, ParseError> {
        let dots = self.expect(&TokenKind::Ellipsis)?.span;
        let has_value = EXPR_START.contains(self.cursor.current_kind()) && !self.at_line_break();
        let value = if has_value {
            Some(Box::new(self.parse_expr_or_error()?))
        } else {
            None
        };
        let span = value.as_ref().map_or(dots, |v| dots.merge(v.span()));
        Ok(Ellipsis { value, span })
    }
}
