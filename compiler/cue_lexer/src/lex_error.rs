//! Lexer error types for the cooking layer.
//!
//! Errors follow a WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the lexer was doing
//! - HOW: `suggestions` providing actionable fixes

use cue_diagnostic::{Applicability, Diagnostic, ErrorCode, Suggestion};
use cue_ir::{LiteralKind, Span};

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking (lexing context at the point of error).
    pub context: LexErrorContext,
    /// HOW to fix (actionable suggestions).
    pub suggestions: Vec<LexSuggestion>,
}

/// Broad class of a lexer error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCategory {
    /// No token matches the input.
    Lexical,
    /// Literal delimiters do not pair up.
    UnbalancedDelimiter,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Literal Errors ===
    /// Newline or end of input before the closing quote of a
    /// single-line literal.
    UnterminatedLiteral { kind: LiteralKind },
    /// End of input inside a multiline or raw literal.
    UnclosedDelimiter { kind: LiteralKind },
    /// Raw literal closed with more `#` than it was opened with.
    MismatchedFence { expected: u32, found: u32 },

    // === Escape Errors ===
    /// Unknown escape letter (e.g., `\q`).
    InvalidEscape { escape_char: char },
    /// Escape with the wrong number of digits (e.g., `\u12`).
    EscapeDigitCount { escape: char, expected: &'static str },
    /// Backslash at the end of a line or of the input.
    IncompleteEscape,
    /// `\x41` or `\101` inside a string literal.
    ByteEscapeInString,

    // === Numeric Errors ===
    /// Invalid digit for the given radix (e.g., `0b102`).
    InvalidDigitForRadix { digit: char, radix: u8 },
    /// Radix prefix with no digits (e.g., `0x`).
    MissingDigits { radix: u8 },
    /// Empty exponent in a float literal (e.g., `1e+`).
    EmptyExponent,
    /// Hex float without its mandatory `p` exponent (e.g., `0x1.8`).
    HexFloatWithoutExponent,
    /// Leading zero on a decimal number (e.g., `089`, `01Ki`).
    LeadingZero,
    /// Underscore not between two digits (e.g., `100_`, `1._5`).
    TrailingUnderscore,
    /// Consecutive underscores in numeric literal (e.g., `1__000`).
    ConsecutiveUnderscores,

    // === Character Errors ===
    /// Character that cannot start any token.
    InvalidCharacter { ch: char },
    /// `\` outside a literal.
    StrayBackslash,
    /// `!` not followed by `=` or `~`.
    LoneBang,
    /// `@` not followed by `name(...)`, or an attribute body left open.
    MalformedAttribute,
    /// `#` or `_#` not followed by a letter.
    InvalidIdentifier,
    /// NUL byte in source.
    NulByte,
}

impl LexErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnclosedDelimiter { .. } | Self::MismatchedFence { .. } => {
                ErrorCategory::UnbalancedDelimiter
            }
            _ => ErrorCategory::Lexical,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnterminatedLiteral { .. } => ErrorCode::E0001,
            Self::InvalidCharacter { .. } => ErrorCode::E0002,
            Self::InvalidDigitForRadix { .. }
            | Self::MissingDigits { .. }
            | Self::EmptyExponent
            | Self::HexFloatWithoutExponent
            | Self::LeadingZero
            | Self::TrailingUnderscore
            | Self::ConsecutiveUnderscores => ErrorCode::E0003,
            Self::InvalidEscape { .. } | Self::EscapeDigitCount { .. } | Self::IncompleteEscape => {
                ErrorCode::E0004
            }
            Self::ByteEscapeInString => ErrorCode::E0005,
            Self::UnclosedDelimiter { .. } => ErrorCode::E0006,
            Self::MismatchedFence { .. } => ErrorCode::E0007,
            Self::StrayBackslash => ErrorCode::E0008,
            Self::LoneBang => ErrorCode::E0009,
            Self::MalformedAttribute => ErrorCode::E0010,
            Self::InvalidIdentifier => ErrorCode::E0011,
            Self::NulByte => ErrorCode::E0012,
        }
    }
}

/// Lexing context at the point of error, the WHY.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Top-level scanning (not inside any literal).
    #[default]
    TopLevel,
    /// Inside a string or bytes literal opened at `start`.
    InsideLiteral { kind: LiteralKind, start: u32 },
    /// Inside a numeric literal.
    NumberLiteral,
    /// Inside an attribute.
    Attribute,
}

impl LexErrorContext {
    /// "while ..." note for diagnostics, if the context adds anything.
    pub fn note(&self) -> Option<String> {
        match self {
            Self::TopLevel => None,
            Self::InsideLiteral { kind, start } => Some(format!(
                "while lexing a {} starting at byte {start}",
                literal_description(*kind)
            )),
            Self::NumberLiteral => Some("while lexing a number literal".to_owned()),
            Self::Attribute => Some("while lexing an attribute".to_owned()),
        }
    }
}

/// Suggestion for fixing a lexical error, the HOW.
///
/// Rendering maps it to `cue_diagnostic::Suggestion`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    /// The span to replace.
    pub span: Span,
    /// The replacement text.
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion with a removal (replace span with empty string).
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, String::new())
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    fn new(span: Span, kind: LexErrorKind) -> Self {
        Self {
            span,
            kind,
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    // === Literals ===

    /// Create an unterminated single-line literal error.
    ///
    /// `span` is the zero-width point where the closer was expected.
    #[cold]
    pub fn unterminated_literal(span: Span, kind: LiteralKind, start: u32) -> Self {
        let closer = if kind.is_bytes() { "'" } else { "\"" };
        Self::new(span, LexErrorKind::UnterminatedLiteral { kind })
            .with_context(LexErrorContext::InsideLiteral { kind, start })
            .with_suggestion(LexSuggestion::text(format!("add closing `{closer}`"), 0))
    }

    /// Create an unclosed multiline or raw literal error.
    #[cold]
    pub fn unclosed_delimiter(span: Span, kind: LiteralKind, start: u32) -> Self {
        Self::new(span, LexErrorKind::UnclosedDelimiter { kind })
            .with_context(LexErrorContext::InsideLiteral { kind, start })
    }

    /// Create a mismatched fence error. `span` covers the whole closer.
    #[cold]
    pub fn mismatched_fence(span: Span, expected: u32, found: u32) -> Self {
        let extra = found.saturating_sub(expected);
        let mut err = Self::new(span, LexErrorKind::MismatchedFence { expected, found });
        if extra > 0 {
            let trim = Span::new(span.end - extra, span.end);
            err = err.with_suggestion(LexSuggestion::removal(
                format!("remove the extra `#` to match the opening fence of {expected}"),
                trim,
            ));
        }
        err
    }

    // === Escapes ===

    /// Create an unknown-escape error.
    #[cold]
    pub fn invalid_escape(span: Span, escape_char: char) -> Self {
        Self::new(span, LexErrorKind::InvalidEscape { escape_char }).with_suggestion(
            LexSuggestion::text(
                r#"valid escapes are: \a, \b, \f, \n, \r, \t, \v, \\, \', \", \uXXXX, \UXXXXXXXX"#,
                0,
            ),
        )
    }

    /// Create a wrong-digit-count escape error.
    #[cold]
    pub fn escape_digit_count(span: Span, escape: char, expected: &'static str) -> Self {
        Self::new(span, LexErrorKind::EscapeDigitCount { escape, expected })
    }

    /// Create an incomplete escape error.
    #[cold]
    pub fn incomplete_escape(span: Span) -> Self {
        Self::new(span, LexErrorKind::IncompleteEscape)
    }

    /// Create a byte-escape-in-string error.
    #[cold]
    pub fn byte_escape_in_string(span: Span) -> Self {
        Self::new(span, LexErrorKind::ByteEscapeInString).with_suggestion(LexSuggestion::text(
            r"use a bytes literal ('...') for byte escapes, or \u for code points",
            0,
        ))
    }

    // === Numbers ===

    /// Create an invalid-digit error.
    #[cold]
    pub fn invalid_digit(span: Span, digit: char, radix: u8) -> Self {
        Self::new(span, LexErrorKind::InvalidDigitForRadix { digit, radix })
            .with_context(LexErrorContext::NumberLiteral)
    }

    /// Create a missing-digits error.
    #[cold]
    pub fn missing_digits(span: Span, radix: u8) -> Self {
        Self::new(span, LexErrorKind::MissingDigits { radix })
            .with_context(LexErrorContext::NumberLiteral)
    }

    /// Create an empty exponent error.
    #[cold]
    pub fn empty_exponent(span: Span) -> Self {
        Self::new(span, LexErrorKind::EmptyExponent).with_context(LexErrorContext::NumberLiteral)
    }

    /// Create a hex-float-without-exponent error.
    #[cold]
    pub fn hex_float_without_exponent(span: Span) -> Self {
        Self::new(span, LexErrorKind::HexFloatWithoutExponent)
            .with_context(LexErrorContext::NumberLiteral)
            .with_suggestion(LexSuggestion::text(
                "hexadecimal floats need a `p` exponent, e.g. `0x1.8p0`",
                0,
            ))
    }

    /// Create a leading zero error.
    #[cold]
    pub fn leading_zero(span: Span) -> Self {
        Self::new(span, LexErrorKind::LeadingZero)
            .with_context(LexErrorContext::NumberLiteral)
            .with_suggestion(LexSuggestion::text(
                "a leading `0` makes an octal literal, which only uses digits 0-7",
                0,
            ))
    }

    /// Create a trailing underscore error.
    #[cold]
    pub fn trailing_underscore(span: Span) -> Self {
        Self::new(span, LexErrorKind::TrailingUnderscore)
            .with_context(LexErrorContext::NumberLiteral)
    }

    /// Create a consecutive underscores error.
    #[cold]
    pub fn consecutive_underscores(span: Span) -> Self {
        Self::new(span, LexErrorKind::ConsecutiveUnderscores)
            .with_context(LexErrorContext::NumberLiteral)
    }

    // === Characters ===

    /// Create an invalid character error.
    #[cold]
    pub fn invalid_character(span: Span, ch: char) -> Self {
        Self::new(span, LexErrorKind::InvalidCharacter { ch })
    }

    /// Create a stray backslash error.
    #[cold]
    pub fn stray_backslash(span: Span) -> Self {
        Self::new(span, LexErrorKind::StrayBackslash).with_suggestion(LexSuggestion::text(
            "backslashes are only meaningful inside string and bytes literals",
            0,
        ))
    }

    /// Create a lone `!` error.
    #[cold]
    pub fn lone_bang(span: Span) -> Self {
        Self::new(span, LexErrorKind::LoneBang).with_suggestion(LexSuggestion::replace(
            "use `not` for logical negation",
            span,
            "not ",
        ))
    }

    /// Create a malformed attribute error.
    #[cold]
    pub fn malformed_attribute(span: Span) -> Self {
        Self::new(span, LexErrorKind::MalformedAttribute)
            .with_context(LexErrorContext::Attribute)
            .with_suggestion(LexSuggestion::text(
                "attributes have the form `@name(...)`",
                0,
            ))
    }

    /// Create an invalid identifier error.
    #[cold]
    pub fn invalid_identifier(span: Span) -> Self {
        Self::new(span, LexErrorKind::InvalidIdentifier).with_suggestion(LexSuggestion::text(
            "`#` and `_#` must be followed by a letter",
            0,
        ))
    }

    /// Create a NUL byte error.
    #[cold]
    pub fn nul_byte(span: Span) -> Self {
        Self::new(span, LexErrorKind::NulByte)
    }

    /// Set the context.
    #[must_use]
    pub fn with_context(mut self, ctx: LexErrorContext) -> Self {
        self.context = ctx;
        self
    }

    /// Add a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Render into a `Diagnostic` with code, message, label, context
    /// note and suggestions.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, label) = self.message_and_label();
        let mut diag = Diagnostic::error(self.code())
            .with_message(message)
            .with_label(self.span, label);
        if let Some(note) = self.context.note() {
            diag = diag.with_note(note);
        }
        let mut suggestions: Vec<&LexSuggestion> = self.suggestions.iter().collect();
        suggestions.sort_by_key(|s| s.priority);
        for s in suggestions {
            diag = diag.with_suggestion(match &s.replacement {
                Some(r) => Suggestion::replace(
                    s.message.clone(),
                    r.span,
                    r.text.clone(),
                    Applicability::MaybeIncorrect,
                ),
                None => Suggestion::text(s.message.clone()),
            });
        }
        diag
    }

    fn message_and_label(&self) -> (String, String) {
        match &self.kind {
            LexErrorKind::UnterminatedLiteral { kind } => (
                format!("unterminated {}", literal_description(*kind)),
                "literal not closed before end of line".to_owned(),
            ),
            LexErrorKind::UnclosedDelimiter { kind } => (
                format!("unclosed {}", literal_description(*kind)),
                "reached end of input inside this literal".to_owned(),
            ),
            LexErrorKind::MismatchedFence { expected, found } => (
                format!("raw literal opened with {expected} `#` but closed with {found}"),
                "closing fence does not match".to_owned(),
            ),
            LexErrorKind::InvalidEscape { escape_char } => (
                format!("invalid escape sequence `\\{escape_char}`"),
                "unknown escape".to_owned(),
            ),
            LexErrorKind::EscapeDigitCount { escape, expected } => (
                format!("`\\{escape}` escape needs {expected}"),
                "wrong number of digits".to_owned(),
            ),
            LexErrorKind::IncompleteEscape => (
                "incomplete escape sequence".to_owned(),
                "nothing follows this backslash".to_owned(),
            ),
            LexErrorKind::ByteEscapeInString => (
                "byte escapes are only allowed in bytes literals".to_owned(),
                "byte escape in a string".to_owned(),
            ),
            LexErrorKind::InvalidDigitForRadix { digit, radix } => (
                format!("invalid digit `{digit}` for base-{radix} literal"),
                format!("not valid in base {radix}"),
            ),
            LexErrorKind::MissingDigits { radix } => (
                format!("base-{radix} literal has no digits"),
                "expected digits after the prefix".to_owned(),
            ),
            LexErrorKind::EmptyExponent => (
                "expected digits after exponent".to_owned(),
                "empty exponent".to_owned(),
            ),
            LexErrorKind::HexFloatWithoutExponent => (
                "hexadecimal float without `p` exponent".to_owned(),
                "missing exponent".to_owned(),
            ),
            LexErrorKind::LeadingZero => (
                "leading zeros are not allowed in decimal literals".to_owned(),
                "remove the leading zero".to_owned(),
            ),
            LexErrorKind::TrailingUnderscore => (
                "misplaced underscore in numeric literal".to_owned(),
                "`_` must sit between two digits".to_owned(),
            ),
            LexErrorKind::ConsecutiveUnderscores => (
                "consecutive underscores in numeric literal".to_owned(),
                "use a single `_` between digits".to_owned(),
            ),
            LexErrorKind::InvalidCharacter { ch } => (
                format!("invalid character `{}`", ch.escape_debug()),
                "cannot start a token".to_owned(),
            ),
            LexErrorKind::StrayBackslash => (
                "unexpected backslash".to_owned(),
                "outside of a literal".to_owned(),
            ),
            LexErrorKind::LoneBang => (
                "`!` must be followed by `=` or `~`".to_owned(),
                "not an operator".to_owned(),
            ),
            LexErrorKind::MalformedAttribute => (
                "malformed attribute".to_owned(),
                "expected `@name(...)`".to_owned(),
            ),
            LexErrorKind::InvalidIdentifier => (
                "invalid identifier".to_owned(),
                "expected a letter after the prefix".to_owned(),
            ),
            LexErrorKind::NulByte => (
                "NUL byte in source".to_owned(),
                "not allowed here".to_owned(),
            ),
        }
    }
}

fn literal_description(kind: LiteralKind) -> &'static str {
    match kind {
        LiteralKind::SimpleString => "string literal",
        LiteralKind::MultilineString => "multiline string literal",
        LiteralKind::SimpleBytes => "bytes literal",
        LiteralKind::MultilineBytes => "multiline bytes literal",
        LiteralKind::RawString => "raw string literal",
        LiteralKind::MultilineRawString => "multiline raw string literal",
        LiteralKind::RawBytes => "raw bytes literal",
        LiteralKind::MultilineRawBytes => "multiline raw bytes literal",
    }
}

#[cfg(test)]
mod tests;
