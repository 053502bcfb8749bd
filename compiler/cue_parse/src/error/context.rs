//! Error context for "while parsing X" messages.

/// Context describing what was being parsed when an error occurred.
///
/// Rendered as a note such as "while parsing a struct literal". This is
/// distinct from `ParseContext`, the flag set that changes parsing
/// behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === File level ===
    SourceFile,
    PackageClause,
    ImportDeclaration,

    // === Declarations ===
    Field,
    Label,
    LetClause,
    Ellipsis,
    Comprehension,
    ForClause,
    GuardClause,

    // === Expressions ===
    Expression,
    Parenthesized,
    StructLiteral,
    ListLiteral,
    StringLiteral,
    Interpolation,
    CallArguments,
    Index,
    Selector,
}

impl ErrorContext {
    /// Get a human-readable description of this context.
    ///
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::SourceFile => "a file",
            Self::PackageClause => "a package clause",
            Self::ImportDeclaration => "an import declaration",
            Self::Field => "a field",
            Self::Label => "a label",
            Self::LetClause => "a let clause",
            Self::Ellipsis => "an ellipsis",
            Self::Comprehension => "a comprehension",
            Self::ForClause => "a for clause",
            Self::GuardClause => "an if clause",
            Self::Expression => "an expression",
            Self::Parenthesized => "a parenthesized expression",
            Self::StructLiteral => "a struct literal",
            Self::ListLiteral => "a list literal",
            Self::StringLiteral => "a string literal",
            Self::Interpolation => "an interpolation",
            Self::CallArguments => "call arguments",
            Self::Index => "an index expression",
            Self::Selector => "a selector",
        }
    }

    /// Get a short label for this context (for error titles).
    pub fn label(self) -> &'static str {
        match self {
            Self::SourceFile => "file",
            Self::PackageClause => "package clause",
            Self::ImportDeclaration => "import declaration",
            Self::Field => "field",
            Self::Label => "label",
            Self::LetClause => "let clause",
            Self::Ellipsis => "ellipsis",
            Self::Comprehension => "comprehension",
            Self::ForClause => "for clause",
            Self::GuardClause => "if clause",
            Self::Expression => "expression",
            Self::Parenthesized => "parenthesized expression",
            Self::StructLiteral => "struct literal",
            Self::ListLiteral => "list literal",
            Self::StringLiteral => "string literal",
            Self::Interpolation => "interpolation",
            Self::CallArguments => "call arguments",
            Self::Index => "index expression",
            Self::Selector => "selector",
        }
    }
}
