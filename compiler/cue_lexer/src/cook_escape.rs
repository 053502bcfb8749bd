//! Escape validation for `"..."` and `'...'` literals.
//!
//! The raw scanner cuts an escape by shape only. Here each escape is
//! classified and checked against the set its literal allows:
//!
//! - char escapes `\a \b \f \n \r \t \v \\ \' \"`, in both forms
//! - unicode escapes `\uXXXX` and `\UXXXXXXXX`, in both forms
//! - byte escapes `\xHH..` (two or more digits) and `\ddd` (two or three
//!   digits), in bytes literals only
//!
//! Unicode and byte escapes may carry one `#` after the backslash.
//! Multiline and raw literals never produce escape tokens.

use cue_ir::{EscapeKind, Span};

use crate::lex_error::{LexError, LexErrorContext};

/// Classify one escape token, pushing an error if it is not allowed.
///
/// `text` is the full token, backslash included.
pub(crate) fn cook_escape(
    text: &str,
    span: Span,
    bytes: bool,
    context: LexErrorContext,
    errors: &mut Vec<LexError>,
) -> EscapeKind {
    let (kind, problem) = classify(text, span, bytes);
    if let Some(err) = problem {
        errors.push(err.with_context(context));
    }
    kind
}

fn classify(text: &str, span: Span, bytes: bool) -> (EscapeKind, Option<LexError>) {
    let body = text.strip_prefix('\\').unwrap_or(text);
    let (hashed, body) = match body.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return (EscapeKind::Char, Some(LexError::incomplete_escape(span)));
    };
    let digits = chars.as_str();

    match first {
        'u' => (EscapeKind::Unicode, hex_count(digits, 4, 'u', "4 hex digits", span)),
        'U' => (EscapeKind::Unicode, hex_count(digits, 8, 'U', "8 hex digits", span)),
        'x' => {
            let problem = if bytes {
                (digits.len() < 2)
                    .then(|| LexError::escape_digit_count(span, 'x', "at least 2 hex digits"))
            } else {
                Some(LexError::byte_escape_in_string(span))
            };
            (EscapeKind::Byte, problem)
        }
        '0'..='9' => {
            let problem = if bytes {
                (body.len() < 2)
                    .then(|| LexError::escape_digit_count(span, first, "2 or 3 digits"))
            } else {
                Some(LexError::byte_escape_in_string(span))
            };
            (EscapeKind::Byte, problem)
        }
        'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '\'' | '"' if !hashed => {
            (EscapeKind::Char, None)
        }
        other => (EscapeKind::Char, Some(LexError::invalid_escape(span, other))),
    }
}

fn hex_count(
    digits: &str,
    want: usize,
    escape: char,
    expected: &'static str,
    span: Span,
) -> Option<LexError> {
    (digits.len() != want).then(|| LexError::escape_digit_count(span, escape, expected))
}

#[cfg(test)]
mod tests;
