//! Concrete syntax tree for CUE source files.
//!
//! Every choice in the grammar is a tagged enum; every node owns its
//! children and records its byte span. The shape mirrors the source
//! closely: chained labels stay flat, comparison chains keep all their
//! operands in one node, and literals keep their text runs, escapes and
//! interpolations in order.
//!
//! # Module Structure
//!
//! - `mod.rs`: identifiers, aliasing, attributes and shared leaf types
//! - `decl.rs`: files, imports, declarations, fields, labels, clauses
//! - `expr.rs`: operators and postfix chains
//! - `literal.rs`: struct, list, string and scalar literals
//! - `printer.rs`: S-expression rendering

mod decl;
mod expr;
mod literal;
mod printer;

pub use decl::{
    Binding, Clause, Comprehension, Declaration, Ellipsis, Embedding, Field, ForClause,
    GuardClause, ImportDeclaration, ImportName, ImportSpec, ImportSpecs, Label, LabelExpr,
    LabelName, LetClause, PackageClause, SourceFile, Terminator, TerminatorKind,
    TerminatedDeclaration,
};
pub use expr::{
    AliasedExpression, BinaryOp, BinaryOperator, BooleanOp, BooleanOperator, CallExpression,
    Callee, ComparisonOp, ComparisonOperator, Expression, IndexExpression, NotOperator, Operand,
    ParenExpression, PrimaryExpression, QualifiedIdentifier, Selector, SelectorExpression,
    UnaryOp, UnaryOperator,
};
pub use literal::{
    FloatLiteral, IntLiteral, Interpolation, ListLiteral, Literal, LiteralPart, StringLiteral,
    StructLiteral, StructMember, StructMemberKind,
};
pub use printer::{to_sexp, SexpPrinter};

use crate::{Span, Spanned};

/// An identifier with its prefix preserved in `name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: Box<str>,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<Box<str>>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Classify by prefix.
    pub fn kind(&self) -> IdentKind {
        IdentKind::of(&self.name)
    }
}

/// The four identifier flavours, distinguished only by prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentKind {
    /// `name`
    Regular,
    /// `_name`
    Hidden,
    /// `#name`
    Definition,
    /// `_#name`
    HiddenDefinition,
}

impl IdentKind {
    pub fn of(name: &str) -> Self {
        if name.starts_with("_#") {
            Self::HiddenDefinition
        } else if name.starts_with('#') {
            Self::Definition
        } else if name.starts_with('_') {
            Self::Hidden
        } else {
            Self::Regular
        }
    }
}

/// Marks a region the parser could not make sense of.
///
/// Only produced in recovery mode; the matching error is in the
/// parse output's error list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorNode {
    pub span: Span,
}

/// An optional bound name in front of a payload: `alias = value`.
///
/// Shared by labels (`X=name`), import specs (`name "path"`) and
/// aliased expressions (`X=expr`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Aliased<T, A = Identifier> {
    pub alias: Option<A>,
    pub value: T,
    pub span: Span,
}

impl<T, A> Aliased<T, A> {
    /// A payload with no alias; the span is the payload's.
    pub fn bare(value: T) -> Self
    where
        T: Spanned,
    {
        let span = value.span();
        Aliased {
            alias: None,
            value,
            span,
        }
    }
}

/// `@name(body)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: Identifier,
    /// Text between the parentheses, verbatim.
    pub body: Box<str>,
    pub span: Span,
}

/// An operator token together with its meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator<K> {
    pub kind: K,
    pub span: Span,
}

/// Built-in functions that may be called without a package.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Builtin {
    Len,
    Close,
    And,
    Or,
    Div,
    Mod,
    Quo,
    Rem,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "len" => Self::Len,
            "close" => Self::Close,
            "and" => Self::And,
            "or" => Self::Or,
            "div" => Self::Div,
            "mod" => Self::Mod,
            "quo" => Self::Quo,
            "rem" => Self::Rem,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::Close => "close",
            Self::And => "and",
            Self::Or => "or",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Quo => "quo",
            Self::Rem => "rem",
        }
    }
}

/// Predeclared type names, classified only in operand position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Number,
    Float,
    Float32,
    Float64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    String,
    Bytes,
    Bool,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 19] = [
        Self::Number,
        Self::Float,
        Self::Float32,
        Self::Float64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uint128,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Int128,
        Self::String,
        Self::Bytes,
        Self::Bool,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Float => "float",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint128 => "uint128",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int128 => "int128",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Bool => "bool",
        }
    }
}

/// Implements [`Spanned`] for node structs with a `span` field.
macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}
pub(crate) use impl_spanned;

impl_spanned!(Identifier, ErrorNode, Attribute);

impl<T, A> Spanned for Aliased<T, A> {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl<K> Spanned for Operator<K> {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}
