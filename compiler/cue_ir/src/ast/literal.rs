//! Literal nodes.

use super::{
    impl_spanned, Attribute, Declaration, Ellipsis, Embedding, ErrorNode, Expression, PrimitiveType,
};
use crate::{EscapeKind, IntBase, LiteralKind, Span, Spanned};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Struct(StructLiteral),
    List(ListLiteral),
    /// Any of the eight string and bytes forms.
    String(StringLiteral),
    Int(IntLiteral),
    Float(FloatLiteral),
    Bool { value: bool, span: Span },
    Null(Span),
    /// `_`
    Top(Span),
    /// `_|_`
    Bottom(Span),
    Primitive { primitive: PrimitiveType, span: Span },
}

impl Spanned for Literal {
    fn span(&self) -> Span {
        match self {
            Self::Struct(l) => l.span,
            Self::List(l) => l.span,
            Self::String(l) => l.span,
            Self::Int(l) => l.span,
            Self::Float(l) => l.span,
            Self::Bool { span, .. }
            | Self::Null(span)
            | Self::Top(span)
            | Self::Bottom(span)
            | Self::Primitive { span, .. } => *span,
        }
    }
}

/// `{ members }`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructLiteral {
    pub members: Vec<StructMember>,
    pub span: Span,
}

impl StructLiteral {
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.members.iter().filter_map(|m| match &m.kind {
            StructMemberKind::Declaration(d) => Some(d),
            StructMemberKind::Attribute(_) => None,
        })
    }
}

/// One struct member and its optional trailing comma.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructMember {
    pub kind: StructMemberKind,
    pub comma: Option<Span>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StructMemberKind {
    Declaration(Declaration),
    /// A declaration-level `@attr(...)`.
    Attribute(Attribute),
}

/// `[ elements, ...tail ]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ListLiteral {
    pub elements: Vec<Embedding>,
    /// Open-ended marker, always last.
    pub ellipsis: Option<Ellipsis>,
    /// Anything between the ellipsis and `]`, which is rejected.
    pub rejected: Option<ErrorNode>,
    pub trailing_comma: Option<Span>,
    pub span: Span,
}

/// A string or bytes literal, split into its parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    pub kind: LiteralKind,
    pub parts: Vec<LiteralPart>,
    pub span: Span,
}

impl StringLiteral {
    /// True when the literal has no interpolations.
    pub fn is_constant(&self) -> bool {
        !self
            .parts
            .iter()
            .any(|p| matches!(p, LiteralPart::Interpolation(_)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralPart {
    /// Verbatim text; multiline and raw content is never decoded.
    Text { text: Box<str>, span: Span },
    Escape {
        kind: EscapeKind,
        text: Box<str>,
        span: Span,
    },
    Interpolation(Interpolation),
}

impl Spanned for LiteralPart {
    fn span(&self) -> Span {
        match self {
            Self::Text { span, .. } | Self::Escape { span, .. } => *span,
            Self::Interpolation(i) => i.span,
        }
    }
}

/// `\( expression )`, or `\#( expression )` inside raw literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolation {
    pub raw: bool,
    pub expression: Box<Expression>,
    pub skipped: Option<ErrorNode>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IntLiteral {
    pub base: IntBase,
    pub text: Box<str>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatLiteral {
    pub text: Box<str>,
    pub span: Span,
}

impl_spanned!(
    StructLiteral,
    ListLiteral,
    StringLiteral,
    Interpolation,
    IntLiteral,
    FloatLiteral,
);
