//! Number literal validation for the cooking layer.
//!
//! The raw scanner decides where a number ends and which shape it has
//! (decimal, prefixed radix, float, SI). Here the digits are checked
//! against the grammar:
//!
//! ```text
//! decimal = "0" | [1-9] ("_"? digit)*
//! hex     = "0" [xX] "_"? hex ("_"? hex)*
//! octal   = "0" [oO]? "_"? oct ("_"? oct)*
//! binary  = "0" [bB] "_"? bin ("_"? bin)*
//! float   = decimals "." decimals? exp? | decimals exp | "." decimals exp?
//!         | hex mantissa "p" exp
//! si      = (decimal ("." decimals)? | "." decimals) [KMGTP] "i"?
//! ```
//!
//! Each token gets at most one error, for the first problem found.

use cue_ir::{IntBase, Span, TokenKind};
use cue_lexer_core::RawTag;

use crate::lex_error::LexError;

/// Cook a numeric raw token, reporting the first problem into `errors`.
///
/// The token keeps its numeric kind even when malformed so the parser
/// sees an operand where the user wrote one.
pub(crate) fn cook_number(
    tag: RawTag,
    text: &str,
    span: Span,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    let (kind, problem) = match tag {
        RawTag::Int => (TokenKind::Int(IntBase::Decimal), check_decimal_int(text)),
        RawTag::HexInt => (
            TokenKind::Int(IntBase::Hex),
            check_prefixed(&text[2..], 16),
        ),
        RawTag::OctInt => (TokenKind::Int(IntBase::Octal), check_octal(text)),
        RawTag::BinInt => (
            TokenKind::Int(IntBase::Binary),
            check_prefixed(&text[2..], 2),
        ),
        RawTag::SiInt => (TokenKind::Int(IntBase::Si), check_si(text)),
        _ => (TokenKind::Float, check_float(text)),
    };
    if let Some(problem) = problem {
        errors.push(problem.into_error(span));
    }
    kind
}

/// What is wrong with a number, before it is attached to a span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Problem {
    InvalidDigit { digit: char, radix: u8 },
    MissingDigits { radix: u8 },
    EmptyExponent,
    HexFloatWithoutExponent,
    LeadingZero,
    Underscore,
    DoubleUnderscore,
}

impl Problem {
    fn into_error(self, span: Span) -> LexError {
        match self {
            Problem::InvalidDigit { digit, radix } => LexError::invalid_digit(span, digit, radix),
            Problem::MissingDigits { radix } => LexError::missing_digits(span, radix),
            Problem::EmptyExponent => LexError::empty_exponent(span),
            Problem::HexFloatWithoutExponent => LexError::hex_float_without_exponent(span),
            Problem::LeadingZero => LexError::leading_zero(span),
            Problem::Underscore => LexError::trailing_underscore(span),
            Problem::DoubleUnderscore => LexError::consecutive_underscores(span),
        }
    }
}

/// Check a run of digits with `_` separators.
///
/// With `leading_underscore` one `_` may precede the first digit, as
/// after a radix prefix. An empty run is reported as missing digits.
fn check_digits(digits: &str, radix: u8, leading_underscore: bool) -> Option<Problem> {
    let body = match digits.strip_prefix('_') {
        Some(rest) if leading_underscore => rest,
        Some(_) => return Some(Problem::Underscore),
        None => digits,
    };
    if body.is_empty() {
        return Some(Problem::MissingDigits { radix });
    }
    let mut prev_underscore = true;
    for c in body.chars() {
        if c == '_' {
            if prev_underscore {
                return Some(Problem::DoubleUnderscore);
            }
            prev_underscore = true;
            continue;
        }
        if !c.is_digit(u32::from(radix)) {
            return Some(Problem::InvalidDigit { digit: c, radix });
        }
        prev_underscore = false;
    }
    if prev_underscore {
        return Some(Problem::Underscore);
    }
    None
}

fn check_decimal_int(text: &str) -> Option<Problem> {
    if text.len() > 1 && text.starts_with('0') {
        return Some(Problem::LeadingZero);
    }
    check_digits(text, 10, false)
}

/// Digits after a `0x`, `0o` or `0b` prefix.
fn check_prefixed(digits: &str, radix: u8) -> Option<Problem> {
    check_digits(digits, radix, true)
}

/// `0o17`, or the legacy `017` form in which `8` and `9` are reported
/// as a leading zero on a decimal.
fn check_octal(text: &str) -> Option<Problem> {
    if let Some(rest) = text
        .strip_prefix("0o")
        .or_else(|| text.strip_prefix("0O"))
    {
        return check_prefixed(rest, 8);
    }
    let rest = &text[1..];
    if rest.bytes().any(|b| matches!(b, b'8' | b'9')) {
        return Some(Problem::LeadingZero);
    }
    check_prefixed(rest, 8)
}

fn check_si(text: &str) -> Option<Problem> {
    let number = text.trim_end_matches('i');
    let number = &number[..number.len().saturating_sub(1)];
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };
    if !whole.is_empty() {
        if let Some(problem) = check_decimal_int(whole) {
            return Some(problem);
        }
    }
    match fraction {
        Some(fraction) => check_digits(fraction, 10, false),
        None => None,
    }
}

fn check_float(text: &str) -> Option<Problem> {
    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return check_hex_float(hex);
    }
    let (mantissa, exponent) = split_exponent(text, b'e');
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if !whole.is_empty() {
        if let Some(problem) = check_digits(whole, 10, false) {
            return Some(problem);
        }
    }
    if !fraction.is_empty() {
        if let Some(problem) = check_digits(fraction, 10, false) {
            return Some(problem);
        }
    }
    exponent.and_then(check_exponent)
}

fn check_hex_float(text: &str) -> Option<Problem> {
    let (mantissa, exponent) = split_exponent(text, b'p');
    let Some(exponent) = exponent else {
        return Some(Problem::HexFloatWithoutExponent);
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Some(Problem::MissingDigits { radix: 16 });
    }
    if !whole.is_empty() {
        if let Some(problem) = check_digits(whole, 16, true) {
            return Some(problem);
        }
    }
    if !fraction.is_empty() {
        if let Some(problem) = check_digits(fraction, 16, false) {
            return Some(problem);
        }
    }
    check_exponent(exponent)
}

/// Split at the first `marker` (either case). The exponent excludes
/// the marker itself.
fn split_exponent(text: &str, marker: u8) -> (&str, Option<&str>) {
    match text
        .bytes()
        .position(|b| b.to_ascii_lowercase() == marker)
    {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    }
}

fn check_exponent(exponent: &str) -> Option<Problem> {
    let digits = exponent
        .strip_prefix(['+', '-'])
        .unwrap_or(exponent);
    if digits.is_empty() {
        return Some(Problem::EmptyExponent);
    }
    check_digits(digits, 10, false)
}
