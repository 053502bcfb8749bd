//! Operator Matching Helpers
//!
//! Helper methods for matching operators during parsing, and the
//! precedence climbing loop for the binary levels.
//!
//! Infix operators never continue an expression across a line break in
//! a context where line breaks end declarations: `a\n-1` is two
//! declarations, not a subtraction.

use cue_ir::ast::{
    BinaryOp, BinaryOperator, BooleanOp, ComparisonOp, Operator, PrimaryExpression, UnaryOp,
    UnaryOperator,
};
use cue_ir::{Spanned, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn match_boolean_op(&self) -> Option<BooleanOp> {
        if self.at_line_break() {
            return None;
        }
        match self.cursor.current_kind() {
            TokenKind::AmpAmp => Some(BooleanOp::And),
            TokenKind::PipePipe => Some(BooleanOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<ComparisonOp> {
        if self.at_line_break() {
            return None;
        }
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(ComparisonOp::Lt),
            TokenKind::LtEq => Some(ComparisonOp::LtEq),
            TokenKind::EqEq => Some(ComparisonOp::Eq),
            TokenKind::NotEq => Some(ComparisonOp::NotEq),
            TokenKind::GtEq => Some(ComparisonOp::GtEq),
            TokenKind::Gt => Some(ComparisonOp::Gt),
            TokenKind::Match => Some(ComparisonOp::Match),
            TokenKind::NotMatch => Some(ComparisonOp::NotMatch),
            _ => None,
        }
    }

    pub(crate) fn match_binary_op(&self) -> Option<BinaryOp> {
        if self.at_line_break() {
            return None;
        }
        match self.cursor.current_kind() {
            TokenKind::Pipe => Some(BinaryOp::Disjunction),
            TokenKind::Amp => Some(BinaryOp::Unification),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Prefix `+` or `-`. Only asked at the start of an operand.
    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            _ => None,
        }
    }

    /// Consume the current operator token as `kind`.
    pub(crate) fn take_operator<K>(&mut self, kind: K) -> Operator<K> {
        let span = self.cursor.advance().span;
        Operator { kind, span }
    }

    /// Precedence climbing over the binary levels.
    ///
    /// Only operators binding at least as tightly as `min_precedence` are
    /// taken; the right operand is parsed one level tighter, which makes
    /// every level left-associative. Each operator taken deepens the
    /// left spine and counts against the depth limit.
    pub(crate) fn parse_binary(
        &mut self,
        min_precedence: u8,
    ) -> Result<PrimaryExpression, ParseError> {
        self.chain(|p| {
            let mut left = p.parse_unary()?;
            while let Some(op) = p.match_binary_op() {
                let precedence = op.precedence();
                if precedence < min_precedence {
                    break;
                }
                p.link()?;
                let operator = p.take_operator(op);
                let right = p.parse_binary(precedence + 1)?;
                let span = left.span().merge(right.span());
                left = PrimaryExpression::Binary(BinaryOperator {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                    span,
                });
            }
            Ok(left)
        })
    }

    fn parse_unary(&mut self) -> Result<PrimaryExpression, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_postfix();
        };
        let operator = self.take_operator(op);
        let argument = self.nested(Self::parse_unary)?;
        let span = operator.span.merge(argument.span());
        Ok(PrimaryExpression::Unary(UnaryOperator {
            operator,
            argument: Box::new(argument),
            span,
        }))
    }
}
