//! Expression parsing.
//!
//! This module extends Parser with methods for parsing expressions,
//! from `||` down to operands.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry points and the boolean, `not` and comparison levels
//! - `operators.rs`: Operator matching helpers and binary precedence climbing
//! - `postfix.rs`: Selector, index and call chains
//! - `primary.rs`: Identifiers, scalar literals, parenthesized expressions
//!
//! # Precedence
//!
//! | Level | Operators                       | Associativity |
//! |-------|---------------------------------|---------------|
//! | 3     | `\|\|`                          | left          |
//! | 4     | `&&`                            | left          |
//! | 5     | `not` (prefix)                  |               |
//! | 6     | `< <= == != >= > =~ !~`         | one flat node |
//! | 7     | `\|`                            | left          |
//! | 8     | `&`                             | left          |
//! | 9     | `+ -`                           | left          |
//! | 10    | `* /`                           | left          |
//! | 11    | unary `+ -`                     |               |

mod operators;
mod postfix;
mod primary;

use cue_ir::ast::{
    BooleanOp, BooleanOperator, ComparisonOperator, Expression, NotOperator, Operator,
};
use cue_ir::{Spanned, TokenKind};

use crate::{ErrorContext, ParseError, Parser, TokenSet};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Counts one nesting level, so the depth limit covers every
    /// parenthesized, bracketed or interpolated sub-expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        self.nested(Self::parse_or)
    }

    /// An expression, or an `ERROR` node covering a broken one.
    pub(crate) fn parse_expr_or_error(&mut self) -> Result<Expression, ParseError> {
        let start = self.cursor.position();
        match self.parse_expr() {
            Ok(expression) => Ok(expression),
            Err(error) => Ok(Expression::Error(
                self.recover(error.with_context(ErrorContext::Expression), start)?,
            )),
        }
    }

    /// A whole input holding exactly one expression.
    pub(crate) fn parse_standalone_expression(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse_expr_or_error()?;
        if !self.cursor.is_at_end() {
            self.report(ParseError::unexpected(
                self.cursor.current_kind(),
                self.cursor.current_span(),
                TokenSet::single(TokenKind::Eof),
            ))?;
        }
        Ok(expression)
    }

    /// Parse `||` (lowest precedence).
    fn parse_or(&mut self) -> Result<Expression, ParseError> {
        self.chain(|p| {
            let mut left = p.parse_and()?;
            while p.match_boolean_op() == Some(BooleanOp::Or) {
                p.link()?;
                let operator = p.take_operator(BooleanOp::Or);
                let right = p.parse_and()?;
                left = boolean(left, operator, right);
            }
            Ok(left)
        })
    }

    /// Parse `&&`.
    fn parse_and(&mut self) -> Result<Expression, ParseError> {
        self.chain(|p| {
            let mut left = p.parse_not()?;
            while p.match_boolean_op() == Some(BooleanOp::And) {
                p.link()?;
                let operator = p.take_operator(BooleanOp::And);
                let right = p.parse_not()?;
                left = boolean(left, operator, right);
            }
            Ok(left)
        })
    }

    /// Parse prefix `not`, whose argument binds tighter than `&&`.
    fn parse_not(&mut self) -> Result<Expression, ParseError> {
        let Some(keyword) = self.cursor.eat(&TokenKind::Not) else {
            return self.parse_comparison();
        };
        let argument = self.nested(Self::parse_not)?;
        let span = keyword.span.merge(argument.span());
        Ok(Expression::Not(NotOperator {
            argument: Box::new(argument),
            span,
        }))
    }

    /// Parse a comparison chain.
    ///
    /// `a < b <= c` is one node over operands `[a, b, c]`, not a nesting
    /// of two comparisons.
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let first = self.parse_binary(0)?;
        let Some(mut kind) = self.match_comparison_op() else {
            return Ok(Expression::Primary(first));
        };

        let start = first.span();
        let mut operands = vec![first];
        let mut operators = Vec::new();
        loop {
            operators.push(self.take_operator(kind));
            operands.push(self.parse_binary(0)?);
            match self.match_comparison_op() {
                Some(next) => kind = next,
                None => break,
            }
        }

        let span = operands.last().map_or(start, |last| start.merge(last.span()));
        Ok(Expression::Comparison(ComparisonOperator {
            operands,
            operators,
            span,
        }))
    }
}

fn boolean(left: Expression, operator: Operator<BooleanOp>, right: Expression) -> Expression {
    let span = left.span().merge(right.span());
    Expression::Boolean(BooleanOperator {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    })
}
