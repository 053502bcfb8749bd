//! Parse error types.
//!
//! Provides structured error types for the parser with:
//! - An error code and a category for every error
//! - The set of tokens that would have been accepted
//! - `ErrorContext` for "while parsing X" notes
//!
//! Lexer errors are carried through unchanged so their richer
//! diagnostics (escape hints, fence suggestions) survive.

mod context;

use cue_diagnostic::{Diagnostic, ErrorCode};
use cue_ir::{Span, TokenKind};
use cue_lexer::{ErrorCategory, LexError};

use crate::recovery::TokenSet;

pub use context::ErrorContext;

/// Broad category of a parse error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No token matches the input.
    Lexical,
    /// The token stream matches no grammar alternative.
    Syntax,
    /// Literal delimiters do not pair up.
    UnbalancedDelimiter,
    /// Nesting exceeded the configured depth. Never recovered from.
    RecursionLimit,
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    /// Tokens that would have been accepted at `span`.
    pub expected: TokenSet,
    pub context: Option<ErrorContext>,
    /// A second location worth pointing at, e.g. an unclosed opener.
    pub related: Option<(Span, String)>,
    lex: Option<Box<LexError>>,
}

impl ParseError {
    /// Create a new syntax error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            span,
            expected: TokenSet::new(),
            context: None,
            related: None,
            lex: None,
        }
    }

    /// Wrap a lexer error.
    #[cold]
    pub fn from_lex(error: LexError) -> Self {
        let kind = match error.category() {
            ErrorCategory::Lexical => ParseErrorKind::Lexical,
            ErrorCategory::UnbalancedDelimiter => ParseErrorKind::UnbalancedDelimiter,
        };
        let message = error.to_diagnostic().message;
        ParseError {
            code: error.code(),
            kind,
            message,
            span: error.span,
            expected: TokenSet::new(),
            context: None,
            related: None,
            lex: Some(Box::new(error)),
        }
    }

    /// The wrapped lexer error, if this error came from the lexer.
    pub fn lex_error(&self) -> Option<&LexError> {
        self.lex.as_deref()
    }

    /// An unexpected token where one of `expected` was required.
    ///
    /// An `Error` token was already reported by the lexer; the result is
    /// marked `Lexical` so recovery can drop the duplicate.
    #[cold]
    pub fn unexpected(found: &TokenKind, span: Span, expected: TokenSet) -> Self {
        let mut err = Self::new(
            ErrorCode::E1001,
            format!(
                "expected {}, found `{}`",
                expected.format_expected(),
                found.display_name()
            ),
            span,
        )
        .with_expected(expected);
        if *found == TokenKind::Error {
            err.kind = ParseErrorKind::Lexical;
        }
        err
    }

    #[cold]
    pub fn expected_expression(found: &TokenKind, span: Span) -> Self {
        let mut err = Self::new(
            ErrorCode::E1002,
            format!("expected expression, found `{}`", found.display_name()),
            span,
        )
        .with_expected(crate::recovery::EXPR_START);
        if *found == TokenKind::Error {
            err.kind = ParseErrorKind::Lexical;
        }
        err
    }

    /// A bracket opened at `open` was never closed.
    #[cold]
    pub fn unclosed(open: Span, closer: &TokenKind, found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1003,
            format!(
                "expected `{}`, found `{}`",
                closer.display_name(),
                found.display_name()
            ),
            span,
        )
        .with_expected(crate::recovery::TokenSet::single(*closer))
        .with_related(open, "unclosed delimiter opened here")
    }

    #[cold]
    pub fn expected_identifier(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1004,
            format!("expected identifier, found `{}`", found.display_name()),
            span,
        )
        .with_expected(TokenSet::single(TokenKind::Ident))
    }

    #[cold]
    pub fn expected_label(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1005,
            format!("expected label, found `{}`", found.display_name()),
            span,
        )
        .with_expected(crate::recovery::LABEL_START)
    }

    /// A call whose callee is neither a builtin nor `package.name`.
    #[cold]
    pub fn bad_callee(callee: Span) -> Self {
        Self::new(
            ErrorCode::E1006,
            "only builtins and qualified identifiers can be called",
            callee,
        )
    }

    #[cold]
    pub fn empty_call(span: Span) -> Self {
        Self::new(ErrorCode::E1007, "call requires at least one argument", span)
            .with_expected(crate::recovery::EXPR_START)
    }

    #[cold]
    pub fn comprehension_without_body(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1008,
            format!(
                "expected `{{` to start the comprehension body, found `{}`",
                found.display_name()
            ),
            span,
        )
        .with_expected(TokenSet::single(TokenKind::LBrace))
    }

    #[cold]
    pub fn element_after_ellipsis(span: Span, ellipsis: Span) -> Self {
        Self::new(ErrorCode::E1009, "list elements cannot follow `...`", span)
            .with_expected(TokenSet::single(TokenKind::RBracket))
            .with_related(ellipsis, "list is closed by this `...`")
    }

    #[cold]
    pub fn missing_terminator(found: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1010,
            format!(
                "expected `,` or a line break after declaration, found `{}`",
                found.display_name()
            ),
            span,
        )
        .with_expected(TokenSet::single(TokenKind::Comma))
    }

    /// An attribute outside a struct, after the file's leading attribute.
    #[cold]
    pub fn stray_attribute(span: Span) -> Self {
        Self::new(
            ErrorCode::E1001,
            "attributes must follow a field value or sit inside a struct",
            span,
        )
        .with_expected(crate::recovery::DECL_START)
    }

    /// A `package` or `import` after the first declaration.
    #[cold]
    pub fn misplaced_header(keyword: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1001,
            format!(
                "`{}` must come before all other declarations",
                keyword.display_name()
            ),
            span,
        )
    }

    /// Whitespace between an operand and its `.` or `[`.
    #[cold]
    pub fn detached_postfix(token: &TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1011,
            format!(
                "`{}` must follow its operand without whitespace",
                token.display_name()
            ),
            span,
        )
    }

    #[cold]
    pub fn recursion_limit(span: Span, max_depth: u32) -> Self {
        let mut err = Self::new(
            ErrorCode::E1100,
            format!("nesting exceeds the maximum depth of {max_depth}"),
            span,
        );
        err.kind = ParseErrorKind::RecursionLimit;
        err
    }

    #[must_use]
    pub fn with_expected(mut self, expected: TokenSet) -> Self {
        self.expected = expected;
        self
    }

    /// Attach the context, keeping an innermost context already present.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    /// True for errors that abort parsing even in recovery mode.
    pub fn is_fatal(&self) -> bool {
        self.kind == ParseErrorKind::RecursionLimit
    }

    /// Convert to a full Diagnostic for rich error reporting.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let Some(lex) = &self.lex {
            return lex.to_diagnostic();
        }
        let label = self.context.map_or("here", ErrorContext::label);
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message.as_str());
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        diag
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}
