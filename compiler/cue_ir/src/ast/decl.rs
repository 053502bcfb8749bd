//! Files, imports, declarations and comprehension clauses.

use smallvec::SmallVec;

use super::{
    impl_spanned, Aliased, AliasedExpression, Attribute, ErrorNode, Expression, Identifier,
    StringLiteral, StructLiteral,
};
use crate::{Span, Spanned};

/// Root of the tree: one parsed file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceFile {
    pub attribute: Option<Attribute>,
    pub package: Option<PackageClause>,
    pub imports: Vec<ImportDeclaration>,
    pub declarations: Vec<TerminatedDeclaration>,
    pub span: Span,
}

impl SourceFile {
    /// Declarations without their terminators.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().map(|d| &d.declaration)
    }
}

/// A top-level declaration and the terminator that ended it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminatedDeclaration {
    pub declaration: Declaration,
    pub terminator: Terminator,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminator {
    pub kind: TerminatorKind,
    /// The comma, or a point span where the line break or end of input begins.
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminatorKind {
    Comma,
    Newline,
    EndOfInput,
    /// Recovery marker: the declaration ran into the next one.
    Missing,
}

/// `package name`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageClause {
    pub name: Identifier,
    pub span: Span,
}

/// `import "path"` or `import ( ... )`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDeclaration {
    pub specs: ImportSpecs,
    pub span: Span,
}

impl ImportDeclaration {
    pub fn specs(&self) -> &[ImportSpec] {
        match &self.specs {
            ImportSpecs::Single(spec) => std::slice::from_ref(spec),
            ImportSpecs::Grouped(specs) => specs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportSpecs {
    Single(ImportSpec),
    /// Parenthesized, terminator-separated list.
    Grouped(Vec<ImportSpec>),
}

/// Optional local name plus import path.
pub type ImportSpec = Aliased<StringLiteral, ImportName>;

impl Aliased<StringLiteral, ImportName> {
    #[inline]
    pub fn name(&self) -> Option<&ImportName> {
        self.alias.as_ref()
    }

    #[inline]
    pub fn path(&self) -> &StringLiteral {
        &self.value
    }
}

/// Local name given to an import.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportName {
    /// `.`
    Dot(Span),
    /// `_`
    Blank(Span),
    Package(Identifier),
}

impl Spanned for ImportName {
    fn span(&self) -> Span {
        match self {
            Self::Dot(span) | Self::Blank(span) => *span,
            Self::Package(ident) => ident.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    Field(Field),
    Ellipsis(Ellipsis),
    Embedding(Embedding),
    Let(LetClause),
    /// Recovery placeholder.
    Error(ErrorNode),
}

impl Spanned for Declaration {
    fn span(&self) -> Span {
        match self {
            Self::Field(f) => f.span,
            Self::Ellipsis(e) => e.span,
            Self::Embedding(e) => e.span(),
            Self::Let(l) => l.span,
            Self::Error(e) => e.span,
        }
    }
}

/// `label: label: value @attr(...)`
///
/// Chained labels are kept flat, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub labels: SmallVec<[Label; 1]>,
    pub value: AliasedExpression,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// `alias=` prefix plus label expression.
pub type Label = Aliased<LabelExpr>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelExpr {
    /// `name` or `name?`
    Name {
        name: LabelName,
        optional: Option<Span>,
        span: Span,
    },
    /// `[X=expr]`
    Computed {
        expr: Box<AliasedExpression>,
        skipped: Option<ErrorNode>,
        span: Span,
    },
}

impl LabelExpr {
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Name { optional: Some(_), .. })
    }
}

impl Spanned for LabelExpr {
    fn span(&self) -> Span {
        match self {
            Self::Name { span, .. } | Self::Computed { span, .. } => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelName {
    Identifier(Identifier),
    String(StringLiteral),
}

impl Spanned for LabelName {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(i) => i.span,
            Self::String(s) => s.span,
        }
    }
}

/// `...` with an optional constraint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsis {
    pub value: Option<Box<Expression>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Embedding {
    Comprehension(Comprehension),
    Expression(AliasedExpression),
}

impl Spanned for Embedding {
    fn span(&self) -> Span {
        match self {
            Self::Comprehension(c) => c.span,
            Self::Expression(e) => e.span,
        }
    }
}

/// `for ... if ... let ... { body }`
///
/// The first clause is always a `for` or an `if`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Comprehension {
    pub clauses: Vec<Clause>,
    pub body: StructLiteral,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Clause {
    For(ForClause),
    Guard(GuardClause),
    Let(LetClause),
}

impl Spanned for Clause {
    fn span(&self) -> Span {
        match self {
            Self::For(c) => c.span,
            Self::Guard(c) => c.span,
            Self::Let(c) => c.span,
        }
    }
}

/// `for key, value in source` or `for value in source`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ForClause {
    pub first: Binding,
    pub second: Option<Binding>,
    pub source: Expression,
    pub span: Span,
}

/// A name bound by a `for` clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Binding {
    Identifier(Identifier),
    /// `_`
    Blank(Span),
}

impl Spanned for Binding {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(i) => i.span,
            Self::Blank(span) => *span,
        }
    }
}

/// `if condition`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardClause {
    pub condition: Expression,
    pub span: Span,
}

/// `let left = right`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LetClause {
    pub left: Identifier,
    pub right: Expression,
    pub span: Span,
}

impl_spanned!(
    SourceFile,
    PackageClause,
    ImportDeclaration,
    Field,
    Ellipsis,
    Comprehension,
    ForClause,
    GuardClause,
    LetClause,
    Terminator,
);
