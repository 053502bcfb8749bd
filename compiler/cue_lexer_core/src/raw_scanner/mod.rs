//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner is a small state machine over a stack of open literals.
//! With no literal open, or with the innermost literal inside an
//! interpolation, bytes are scanned as ordinary tokens. Otherwise the
//! scanner produces the pieces of the literal: text runs, escapes,
//! interpolation openers and finally the closing delimiter.
//!
//! The scanner never fails. Problems are encoded as error tags, and the
//! cooking layer turns them into diagnostics. Two error tags,
//! [`RawTag::UnterminatedLiteral`] and [`RawTag::UnclosedDelimiter`],
//! have zero length and pop the literal they report, so every call
//! either consumes input, pops a literal or returns `Eof`.

use crate::content::{scan_content, ContentScan, Delimiter, Quote};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// One open literal.
#[derive(Clone, Copy, Debug)]
struct LiteralFrame {
    delim: Delimiter,
    /// Inside `\( ... )`: ordinary tokens until the matching `)`.
    interpolating: bool,
    /// Unmatched `(` seen inside the current interpolation.
    parens: u32,
}

/// Raw scanner over a sentinel-terminated cursor.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    literals: Vec<LiteralFrame>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            literals: Vec::new(),
        }
    }

    /// Number of literals currently open, interpolating ones included.
    pub fn literal_depth(&self) -> usize {
        self.literals.len()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is
    /// exhausted and every open literal has been reported.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if let Some(frame) = self.literals.last() {
            if !frame.interpolating {
                let delim = frame.delim;
                return self.literal_part(start, delim);
            }
        }

        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'$' => self.identifier(start),
            b'_' => self.underscore(start),
            b'#' => self.hash(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.open_literal(start, Quote::Double, 0),
            b'\'' => self.open_literal(start, Quote::Single, 0),
            b'/' => self.slash_or_comment(start),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b'|' => self.pair(start, b'|', RawTag::PipePipe, RawTag::Pipe),
            b'&' => self.pair(start, b'&', RawTag::AmpAmp, RawTag::Ampersand),
            b'<' => self.pair(start, b'=', RawTag::LessEqual, RawTag::Less),
            b'>' => self.pair(start, b'=', RawTag::GreaterEqual, RawTag::Greater),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'.' => self.dot(start),
            b'?' => self.single(start, RawTag::Question),
            b'(' => self.left_paren(start),
            b')' => self.right_paren(start),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b'@' => self.attribute(start),
            b'\\' => self.single(start, RawTag::StrayBackslash),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.single(start, RawTag::InvalidByte),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `x` or `x` followed by `second`.
    fn pair(&mut self, start: u32, second: u8, long: RawTag, short: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(start, long)
        } else {
            self.token(start, short)
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if !self.cursor.is_eof() {
            return self.single(start, RawTag::InteriorNull);
        }
        match self.literals.pop() {
            Some(frame) => RawToken {
                tag: unterminated_at_eof(frame.delim),
                len: 0,
            },
            None => RawToken {
                tag: RawTag::Eof,
                len: 0,
            },
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            self.token(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.single(start, RawTag::Newline)
    }

    // ─── Comments & Slash ──────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'/' {
            self.cursor.eat_until_newline_or_eof();
            self.token(start, RawTag::LineComment)
        } else {
            self.token(start, RawTag::Slash)
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.eat_ident_continue();
        self.token(start, RawTag::Ident)
    }

    /// `_`, `_|_`, `_name` or `_#Name`.
    fn underscore(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'|' && self.cursor.peek2() == b'_' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::Bottom);
        }
        if self.cursor.peek() == b'#' {
            self.cursor.advance_n(2);
            return self.prefixed_identifier(start);
        }
        self.cursor.advance();
        if self.is_ident_continue_at(0) {
            self.eat_ident_continue();
            self.token(start, RawTag::Ident)
        } else {
            self.token(start, RawTag::Underscore)
        }
    }

    /// `#Name`, or the fence of a raw literal.
    fn hash(&mut self, start: u32) -> RawToken {
        let fence = self.cursor.count_run(0, b'#');
        match self.cursor.peek_at(fence) {
            b'"' => return self.open_literal(start, Quote::Double, fence),
            b'\'' => return self.open_literal(start, Quote::Single, fence),
            _ => {}
        }
        self.cursor.advance_n(fence);
        if fence == 1 {
            self.prefixed_identifier(start)
        } else {
            self.eat_ident_continue();
            self.token(start, RawTag::InvalidIdentifier)
        }
    }

    /// Rest of an identifier after a `#` or `_#` prefix, which must be
    /// followed by a letter.
    fn prefixed_identifier(&mut self, start: u32) -> RawToken {
        let valid = self.is_letter_at(0);
        if valid {
            self.cursor.advance_char();
        }
        self.eat_ident_continue();
        self.token(
            start,
            if valid {
                RawTag::Ident
            } else {
                RawTag::InvalidIdentifier
            },
        )
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        let c = self.cursor.current_char();
        if start == 0 && c == '\u{FEFF}' {
            self.cursor.advance_char();
            return self.token(start, RawTag::Whitespace);
        }
        if c.is_alphabetic() {
            return self.identifier(start);
        }
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }

    fn eat_ident_continue(&mut self) {
        while self.is_ident_continue_at(0) {
            self.cursor.advance_char();
        }
    }

    fn is_ident_continue_at(&self, offset: u32) -> bool {
        let b = self.cursor.peek_at(offset);
        if b < 0x80 {
            return is_ident_continue(b);
        }
        self.char_at(offset).is_alphanumeric()
    }

    /// Letter in the identifier sense: Unicode letter, `_` or `$`.
    fn is_letter_at(&self, offset: u32) -> bool {
        let b = self.cursor.peek_at(offset);
        if b < 0x80 {
            return b.is_ascii_alphabetic() || b == b'_' || b == b'$';
        }
        self.char_at(offset).is_alphabetic()
    }

    fn char_at(&self, offset: u32) -> char {
        let mut probe = self.cursor;
        probe.advance_n(offset);
        probe.current_char()
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' => return self.hex_number(start),
                b'o' | b'O' => {
                    self.cursor.advance();
                    self.eat_decimal_digits();
                    return self.token(start, RawTag::OctInt);
                }
                b'b' | b'B' => {
                    self.cursor.advance();
                    self.eat_decimal_digits();
                    return self.token(start, RawTag::BinInt);
                }
                _ => {}
            }
        }

        self.eat_decimal_digits();
        let leading_zero = first == b'0' && self.cursor.pos() - start > 1;

        let mut is_float = false;
        // `1.` is a float, but `1...` leaves the ellipsis alone.
        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            self.cursor.advance();
            self.eat_decimal_digits();
            is_float = true;
        }

        if let Some(len) = self.multiplier_len() {
            self.cursor.advance_n(len);
            return self.token(start, RawTag::SiInt);
        }
        if self.eat_exponent(b'e') || is_float {
            return self.token(start, RawTag::Float);
        }
        self.token(
            start,
            if leading_zero {
                RawTag::OctInt
            } else {
                RawTag::Int
            },
        )
    }

    /// Number starting with `.`, e.g. `.5`, `.5e3` or `.5Ki`.
    fn leading_dot_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_decimal_digits();
        if let Some(len) = self.multiplier_len() {
            self.cursor.advance_n(len);
            return self.token(start, RawTag::SiInt);
        }
        self.eat_exponent(b'e');
        self.token(start, RawTag::Float)
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_hex_digits();
        let mut is_float = false;
        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            self.cursor.advance();
            self.eat_hex_digits();
            is_float = true;
        }
        if self.eat_exponent(b'p') || is_float {
            self.token(start, RawTag::Float)
        } else {
            self.token(start, RawTag::HexInt)
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_hex_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
    }

    /// Consume `e`/`p` (either case), an optional sign and the digits.
    ///
    /// A bare letter with neither sign nor digit after it is left for
    /// the next token. With a sign the exponent is consumed even when
    /// empty, and the cooking layer reports it.
    fn eat_exponent(&mut self, marker: u8) -> bool {
        if self.cursor.current().to_ascii_lowercase() != marker {
            return false;
        }
        let signed = matches!(self.cursor.peek(), b'+' | b'-');
        if !signed && !self.cursor.peek().is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(if signed { 2 } else { 1 });
        self.eat_decimal_digits();
        true
    }

    /// Length of an SI multiplier (`K`, `Ki`, ... `P`, `Pi`) at the
    /// cursor, provided no identifier character follows it.
    fn multiplier_len(&self) -> Option<u32> {
        if !matches!(self.cursor.current(), b'K' | b'M' | b'G' | b'T' | b'P') {
            return None;
        }
        let len = if self.cursor.peek() == b'i' { 2 } else { 1 };
        (!self.is_ident_continue_at(len)).then_some(len)
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::EqualEqual),
            b'~' => self.single(start, RawTag::EqualTilde),
            _ => self.token(start, RawTag::Equal),
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::BangEqual),
            b'~' => self.single(start, RawTag::BangTilde),
            _ => self.token(start, RawTag::Bang),
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.leading_dot_number(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::DotDotDot);
        }
        self.single(start, RawTag::Dot)
    }

    fn left_paren(&mut self, start: u32) -> RawToken {
        if let Some(frame) = self.literals.last_mut() {
            frame.parens += 1;
        }
        self.single(start, RawTag::LeftParen)
    }

    /// `)` either closes a nested paren or ends the interpolation.
    fn right_paren(&mut self, start: u32) -> RawToken {
        if let Some(frame) = self.literals.last_mut() {
            if frame.parens == 0 {
                frame.interpolating = false;
                return self.single(start, RawTag::InterpolationClose);
            }
            frame.parens -= 1;
        }
        self.single(start, RawTag::RightParen)
    }

    // ─── Attributes ────────────────────────────────────────────────

    /// `@name(...)`, with `()`, `[]` and `{}` balanced in the body and
    /// double-quoted strings skipped.
    fn attribute(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if !self.is_letter_at(0) {
            return self.token(start, RawTag::MalformedAttribute);
        }
        self.cursor.advance_char();
        self.eat_ident_continue();
        if self.cursor.current() != b'(' {
            return self.token(start, RawTag::MalformedAttribute);
        }

        let mut depth = 0u32;
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    return self.token(start, RawTag::MalformedAttribute);
                }
                b'(' | b'[' | b'{' => {
                    depth += 1;
                    self.cursor.advance();
                }
                b')' | b']' | b'}' => {
                    depth = depth.saturating_sub(1);
                    self.cursor.advance();
                    if depth == 0 {
                        return self.token(start, RawTag::Attribute);
                    }
                }
                b'"' => self.skip_attribute_string(),
                _ => self.cursor.advance_char(),
            }
        }
    }

    fn skip_attribute_string(&mut self) {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_literal_delim(b'"') {
                b'"' => {
                    self.cursor.advance();
                    return;
                }
                b'\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.current(), b'\n' | b'\r') && !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => return,
            }
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn open_literal(&mut self, start: u32, quote: Quote, fence: u32) -> RawToken {
        self.cursor.advance_n(fence);
        let multiline = self.cursor.count_run(0, quote.byte()) >= 3;
        let delim = Delimiter::new(quote, multiline, fence);
        self.cursor.advance_n(delim.quote_len());
        self.literals.push(LiteralFrame {
            delim,
            interpolating: false,
            parens: 0,
        });
        self.token(start, open_tag(delim))
    }

    fn literal_part(&mut self, start: u32, delim: Delimiter) -> RawToken {
        if delim.content_kind().is_none() {
            return self.simple_literal_part(start, delim.quote);
        }
        match scan_content(&mut self.cursor, delim) {
            ContentScan::Content(len) => RawToken {
                tag: RawTag::LiteralText,
                len,
            },
            ContentScan::Boundary => self.literal_boundary(start, delim),
        }
    }

    /// Next piece of a plain `"..."` or `'...'` literal.
    fn simple_literal_part(&mut self, start: u32, quote: Quote) -> RawToken {
        match self.cursor.current() {
            b'\\' if self.cursor.peek() == b'(' => {
                self.cursor.advance_n(2);
                self.start_interpolation();
                self.token(start, RawTag::InterpolationOpen)
            }
            b'\\' => self.escape(start),
            b'\n' | b'\r' => self.unterminated(RawTag::UnterminatedLiteral),
            0 if self.cursor.is_eof() => self.unterminated(RawTag::UnterminatedLiteral),
            b if b == quote.byte() => self.close_literal(start),
            _ => {
                self.cursor.skip_to_literal_delim(quote.byte());
                self.token(start, RawTag::LiteralText)
            }
        }
    }

    /// One escape sequence, scanned by shape only.
    ///
    /// Digit counts and escape letters are checked by the cooking layer.
    fn escape(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'#' {
            self.cursor.advance();
        }
        match self.cursor.current() {
            b'u' => {
                self.cursor.advance();
                self.eat_hex_up_to(4);
            }
            b'U' => {
                self.cursor.advance();
                self.eat_hex_up_to(8);
            }
            b'x' => {
                self.cursor.advance();
                self.eat_hex_digits_only();
            }
            b'0'..=b'9' => {
                let mut n = 0;
                while n < 3 && self.cursor.current().is_ascii_digit() {
                    self.cursor.advance();
                    n += 1;
                }
            }
            b'\n' | b'\r' => {}
            0 if self.cursor.is_eof() => {}
            _ => self.cursor.advance_char(),
        }
        self.token(start, RawTag::Escape)
    }

    fn eat_hex_up_to(&mut self, max: u32) {
        let mut n = 0;
        while n < max && self.cursor.current().is_ascii_hexdigit() {
            self.cursor.advance();
            n += 1;
        }
    }

    fn eat_hex_digits_only(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
    }

    /// Closer, interpolation opener, line end or EOF of a multiline or
    /// raw literal.
    fn literal_boundary(&mut self, start: u32, delim: Delimiter) -> RawToken {
        if let Some(len) = delim.closer_len(&self.cursor) {
            self.cursor.advance_n(len);
            self.literals.pop();
            let tag = if len > delim.quote_len() + delim.fence {
                RawTag::MismatchedFence
            } else {
                RawTag::LiteralClose
            };
            return self.token(start, tag);
        }
        if delim.interpolation_at(&self.cursor) {
            self.cursor.advance_n(2 + delim.fence);
            self.start_interpolation();
            return self.token(start, RawTag::InterpolationOpen);
        }
        if self.cursor.is_eof() {
            return self.unterminated(unterminated_at_eof(delim));
        }
        if !delim.multiline && matches!(self.cursor.current(), b'\n' | b'\r') {
            return self.unterminated(RawTag::UnterminatedLiteral);
        }
        self.cursor.advance_char();
        self.token(start, RawTag::LiteralText)
    }

    fn close_literal(&mut self, start: u32) -> RawToken {
        self.literals.pop();
        self.single(start, RawTag::LiteralClose)
    }

    fn start_interpolation(&mut self) {
        if let Some(frame) = self.literals.last_mut() {
            frame.interpolating = true;
            frame.parens = 0;
        }
    }

    /// Zero-length error token that abandons the innermost literal.
    fn unterminated(&mut self, tag: RawTag) -> RawToken {
        self.literals.pop();
        RawToken { tag, len: 0 }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

fn open_tag(delim: Delimiter) -> RawTag {
    match (delim.quote, delim.multiline, delim.is_raw()) {
        (Quote::Double, false, false) => RawTag::StringOpen,
        (Quote::Single, false, false) => RawTag::BytesOpen,
        (Quote::Double, true, false) => RawTag::MultilineStringOpen,
        (Quote::Single, true, false) => RawTag::MultilineBytesOpen,
        (Quote::Double, false, true) => RawTag::RawStringOpen,
        (Quote::Single, false, true) => RawTag::RawBytesOpen,
        (Quote::Double, true, true) => RawTag::MultilineRawStringOpen,
        (Quote::Single, true, true) => RawTag::MultilineRawBytesOpen,
    }
}

/// Plain single-line literals are unterminated at EOF; multiline and
/// raw literals have an unclosed delimiter.
fn unterminated_at_eof(delim: Delimiter) -> RawTag {
    if delim.multiline || delim.is_raw() {
        RawTag::UnclosedDelimiter
    } else {
        RawTag::UnterminatedLiteral
    }
}

/// Lookup table for ASCII identifier continuation bytes: letters,
/// digits, `_` and `$`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan `source` and collect every raw token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
