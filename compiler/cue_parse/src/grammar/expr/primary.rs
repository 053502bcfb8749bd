//! Operands: identifiers, literals and parenthesized expressions.

use cue_ir::ast::{
    FloatLiteral, Identifier, IntLiteral, Literal, Operand, ParenExpression, PrimitiveType,
};
use cue_ir::{Span, TokenKind};

use crate::{ErrorContext, ParseContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        let literal = match token.kind {
            TokenKind::Ident => {
                self.cursor.advance();
                return Ok(self.classify_identifier(span));
            }
            TokenKind::LParen => return self.parse_parenthesized().map(Operand::Paren),
            TokenKind::Underscore => {
                self.cursor.advance();
                Literal::Top(span)
            }
            TokenKind::Bottom => {
                self.cursor.advance();
                Literal::Bottom(span)
            }
            TokenKind::Int(base) => {
                self.cursor.advance();
                Literal::Int(IntLiteral {
                    base,
                    text: self.cursor.text(span).into(),
                    span,
                })
            }
            TokenKind::Float => {
                self.cursor.advance();
                Literal::Float(FloatLiteral {
                    text: self.cursor.text(span).into(),
                    span,
                })
            }
            TokenKind::LiteralOpen(_) => Literal::String(
                self.parse_string_literal()
                    .map_err(|e| e.with_context(ErrorContext::StringLiteral))?,
            ),
            TokenKind::LBrace => Literal::Struct(self.parse_struct_literal()?),
            TokenKind::LBracket => Literal::List(self.parse_list_literal()?),
            ref other => return Err(ParseError::expected_expression(other, span)),
        };
        Ok(Operand::Literal(literal))
    }

    /// Predeclared names are only special in operand position; elsewhere
    /// (labels, selectors, bindings) they are ordinary identifiers.
    fn classify_identifier(&self, span: Span) -> Operand {
        let text = self.cursor.text(span);
        let literal = match text {
            "null" => Literal::Null(span),
            "true" => Literal::Bool { value: true, span },
            "false" => Literal::Bool { value: false, span },
            _ => match PrimitiveType::from_name(text) {
                Some(primitive) => Literal::Primitive { primitive, span },
                None => return Operand::Identifier(Identifier::new(text, span)),
            },
        };
        Operand::Literal(literal)
    }

    fn parse_parenthesized(&mut self) -> Result<ParenExpression, ParseError> {
        let open = self.expect(&TokenKind::LParen)?.span;
        let inner = self
            .with_context(ParseContext::BRACKETED, Self::parse_expr_or_error)
            .map_err(|e| e.with_context(ErrorContext::Parenthesized))?;
        let close = self.close(TokenKind::RParen, open)?;
        Ok(ParenExpression {
            inner: Box::new(inner),
            skipped: close.skipped,
            span: open.merge(close.span),
        })
    }
}
