//! Interior scanners for multiline and raw literals.
//!
//! Six literal kinds (multiline or raw, string or bytes) keep their
//! interiors opaque: no escape tokens, no indentation handling. The
//! raw scanner calls [`scan_content`] right after the opening delimiter
//! and after each interpolation, and gets back either one maximal run of
//! text or [`ContentScan::Boundary`] when the closing delimiter or an
//! interpolation opener starts at the cursor.
//!
//! Inside a literal fenced with `n` hashes only `\` followed by exactly
//! `n` hashes is special: followed by `(` it opens an interpolation, and
//! followed by anything else it escapes that character, so `\#"` never
//! closes a `#"..."#` literal. A backslash with fewer hashes is text.

use crate::Cursor;

/// Quote character of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"`, strings.
    Double,
    /// `'`, bytes.
    Single,
}

impl Quote {
    #[inline]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Double => b'"',
            Self::Single => b'\'',
        }
    }
}

/// Opening/closing delimiter shape of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delimiter {
    pub quote: Quote,
    /// Triple-quoted.
    pub multiline: bool,
    /// Number of `#` around the quotes. Zero for non-raw literals.
    pub fence: u32,
}

impl Delimiter {
    pub const fn new(quote: Quote, multiline: bool, fence: u32) -> Self {
        Delimiter {
            quote,
            multiline,
            fence,
        }
    }

    #[inline]
    pub const fn is_raw(self) -> bool {
        self.fence > 0
    }

    /// Number of quote characters on each side.
    #[inline]
    pub const fn quote_len(self) -> u32 {
        if self.multiline {
            3
        } else {
            1
        }
    }

    /// The content scanner for this delimiter, `None` for plain `"..."`
    /// and `'...'` literals whose interiors the scanner tokenizes itself.
    pub const fn content_kind(self) -> Option<ContentKind> {
        match (self.quote, self.multiline, self.is_raw()) {
            (_, false, false) => None,
            (Quote::Double, true, false) => Some(ContentKind::MultilineString),
            (Quote::Single, true, false) => Some(ContentKind::MultilineBytes),
            (Quote::Double, false, true) => Some(ContentKind::RawString),
            (Quote::Single, false, true) => Some(ContentKind::RawBytes),
            (Quote::Double, true, true) => Some(ContentKind::MultilineRawString),
            (Quote::Single, true, true) => Some(ContentKind::MultilineRawBytes),
        }
    }

    /// Length of the closing delimiter at the cursor, if one starts there.
    ///
    /// For raw literals every `#` after the quotes is counted, so a
    /// result longer than `quote_len() + fence` is an over-long fence.
    pub fn closer_len(self, cursor: &Cursor<'_>) -> Option<u32> {
        let quotes = self.quote_len();
        if cursor.count_run(0, self.quote.byte()) < quotes {
            return None;
        }
        if !self.is_raw() {
            return Some(quotes);
        }
        let hashes = cursor.count_run(quotes, b'#');
        (hashes >= self.fence).then_some(quotes + hashes)
    }

    /// Whether `\` + fence + `(` starts at the cursor.
    pub fn interpolation_at(self, cursor: &Cursor<'_>) -> bool {
        cursor.current() == b'\\'
            && cursor.count_run(1, b'#') == self.fence
            && cursor.peek_at(1 + self.fence) == b'('
    }
}

/// The six literal kinds with opaque interiors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// `"""` ... `"""`
    MultilineString,
    /// `'''` ... `'''`
    MultilineBytes,
    /// `#"` ... `"#`
    RawString,
    /// `#'` ... `'#`
    RawBytes,
    /// `#"""` ... `"""#`
    MultilineRawString,
    /// `#'''` ... `'''#`
    MultilineRawBytes,
}

/// Result of one content scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentScan {
    /// A run of `len` content bytes was consumed.
    Content(u32),
    /// Nothing consumed: a closer, an interpolation opener, a newline
    /// ending a single-line raw literal, or EOF starts at the cursor.
    Boundary,
}

/// Scan one maximal run of literal content.
///
/// Never consumes the closing delimiter or an interpolation opener.
pub fn scan_content(cursor: &mut Cursor<'_>, delim: Delimiter) -> ContentScan {
    let start = cursor.pos();
    let quote = delim.quote.byte();

    loop {
        let b = if delim.multiline {
            cursor.skip_to_quote_or_backslash(quote)
        } else {
            cursor.skip_to_literal_delim(quote)
        };
        match b {
            b'\\' => {
                if delim.interpolation_at(cursor) {
                    break;
                }
                escaped_or_text(cursor, delim);
            }
            b'\n' | b'\r' => break,
            0 if cursor.is_eof() => break,
            _ if b == quote => {
                if delim.closer_len(cursor).is_some() {
                    break;
                }
                cursor.advance();
            }
            _ => cursor.advance(),
        }
    }

    match cursor.pos() - start {
        0 => ContentScan::Boundary,
        len => ContentScan::Content(len),
    }
}

/// Consume a backslash that does not open an interpolation.
///
/// With a full fence it escapes the next character, which is then
/// never a closer. Otherwise it is ordinary text.
fn escaped_or_text(cursor: &mut Cursor<'_>, delim: Delimiter) {
    let hashes = cursor.count_run(1, b'#');
    cursor.advance();
    if hashes < delim.fence {
        return;
    }
    cursor.advance_n(delim.fence);
    let next = cursor.current();
    let ends_line = !delim.multiline && matches!(next, b'\n' | b'\r');
    if !ends_line && !cursor.is_eof() {
        cursor.advance_char();
    }
}

#[cfg(test)]
mod tests;
