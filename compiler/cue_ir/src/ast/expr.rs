//! Expressions: operators, operands and postfix chains.

use super::{impl_spanned, Aliased, Builtin, ErrorNode, Identifier, Literal, Operator, StringLiteral};
use crate::{Span, Spanned};

/// An expression with an optional `X=` alias.
pub type AliasedExpression = Aliased<Expression>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Comparison(ComparisonOperator),
    Not(NotOperator),
    Boolean(BooleanOperator),
    /// Operands, postfix chains and the arithmetic/unification operators.
    Primary(PrimaryExpression),
    /// Recovery placeholder.
    Error(ErrorNode),
}

impl Expression {
    /// The primary expression, if this is one.
    pub fn as_primary(&self) -> Option<&PrimaryExpression> {
        match self {
            Self::Primary(p) => Some(p),
            _ => None,
        }
    }
}

impl Spanned for Expression {
    fn span(&self) -> Span {
        match self {
            Self::Comparison(e) => e.span,
            Self::Not(e) => e.span,
            Self::Boolean(e) => e.span,
            Self::Primary(e) => e.span(),
            Self::Error(e) => e.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimaryExpression {
    Binary(BinaryOperator),
    Operand(Operand),
    Unary(UnaryOperator),
    Index(IndexExpression),
    Selector(SelectorExpression),
    Call(CallExpression),
}

impl Spanned for PrimaryExpression {
    fn span(&self) -> Span {
        match self {
            Self::Binary(e) => e.span,
            Self::Operand(e) => e.span(),
            Self::Unary(e) => e.span,
            Self::Index(e) => e.span,
            Self::Selector(e) => e.span,
            Self::Call(e) => e.span,
        }
    }
}

/// `a < b <= c`: all operands of a comparison chain in one node.
///
/// `operands.len() == operators.len() + 1`; `operators[i]` sits between
/// `operands[i]` and `operands[i + 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonOperator {
    pub operands: Vec<PrimaryExpression>,
    pub operators: Vec<Operator<ComparisonOp>>,
    pub span: Span,
}

impl ComparisonOperator {
    pub fn left(&self) -> Option<&PrimaryExpression> {
        self.operands.first()
    }

    /// `(operator, right operand)` pairs in source order.
    pub fn steps(&self) -> impl Iterator<Item = (&Operator<ComparisonOp>, &PrimaryExpression)> {
        self.operators.iter().zip(self.operands.iter().skip(1))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    Lt,
    LtEq,
    Eq,
    NotEq,
    GtEq,
    Gt,
    /// `=~`
    Match,
    /// `!~`
    NotMatch,
}

impl ComparisonOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::GtEq => ">=",
            Self::Gt => ">",
            Self::Match => "=~",
            Self::NotMatch => "!~",
        }
    }
}

/// `not argument`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NotOperator {
    pub argument: Box<Expression>,
    pub span: Span,
}

/// `left && right` or `left || right`, left-associative.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanOperator {
    pub left: Box<Expression>,
    pub operator: Operator<BooleanOp>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BooleanOp {
    And,
    Or,
}

impl BooleanOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

/// `left op right` over primary expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOperator {
    pub left: Box<PrimaryExpression>,
    pub operator: Operator<BinaryOp>,
    pub right: Box<PrimaryExpression>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `|`
    Disjunction,
    /// `&`
    Unification,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Disjunction => "|",
            Self::Unification => "&",
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Disjunction => 7,
            Self::Unification => 8,
            Self::Add | Self::Sub => 9,
            Self::Mul | Self::Div => 10,
        }
    }
}

/// `+x` or `-x`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOperator {
    pub operator: Operator<UnaryOp>,
    pub argument: Box<PrimaryExpression>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    Identifier(Identifier),
    Literal(Literal),
    Paren(ParenExpression),
}

impl Spanned for Operand {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(i) => i.span,
            Self::Literal(l) => l.span(),
            Self::Paren(p) => p.span,
        }
    }
}

/// `( expression )`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ParenExpression {
    pub inner: Box<Expression>,
    /// Tokens between the expression and `)` skipped during recovery.
    pub skipped: Option<ErrorNode>,
    pub span: Span,
}

/// `operand[index]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexExpression {
    pub operand: Box<PrimaryExpression>,
    pub index: Box<Expression>,
    pub skipped: Option<ErrorNode>,
    pub span: Span,
}

/// `operand.name` or `operand."name"`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorExpression {
    pub operand: Box<PrimaryExpression>,
    pub selector: Selector,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Selector {
    Identifier(Identifier),
    String(StringLiteral),
}

impl Spanned for Selector {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(i) => i.span,
            Self::String(s) => s.span,
        }
    }
}

/// `callee(arg, ...)` with at least one argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpression {
    pub callee: Callee,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// Only builtins and package-qualified names can be called.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Callee {
    Builtin { builtin: Builtin, span: Span },
    Qualified(QualifiedIdentifier),
}

impl Spanned for Callee {
    fn span(&self) -> Span {
        match self {
            Self::Builtin { span, .. } => *span,
            Self::Qualified(q) => q.span,
        }
    }
}

/// `package.name`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedIdentifier {
    pub package: Identifier,
    pub name: Identifier,
    pub span: Span,
}

impl_spanned!(
    ComparisonOperator,
    NotOperator,
    BooleanOperator,
    BinaryOperator,
    UnaryOperator,
    ParenExpression,
    IndexExpression,
    SelectorExpression,
    CallExpression,
    QualifiedIdentifier,
);
