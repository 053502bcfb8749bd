//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at or past the source length. A NUL
//! byte before `source_len` is an interior null, not EOF; compare
//! `pos` against `source_len` (or call [`Cursor::is_eof`]) to tell them
//! apart.

/// Earliest of two optional offsets.
///
/// `memchr3` handles at most three needles; scans that need a fourth
/// combine two searches with this.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created by [`SourceBuffer::cursor`](crate::SourceBuffer::cursor). The
/// cursor is `Copy`, so lookahead can snapshot and restore it freely.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_at(2)
    }

    /// Byte `offset` positions ahead, `0x00` past the end of the buffer.
    #[inline]
    pub fn peek_at(&self, offset: u32) -> u8 {
        self.buf
            .get((self.pos + offset) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Length of the run of `byte` starting `offset` bytes ahead.
    pub fn count_run(&self, offset: u32, byte: u8) -> u32 {
        let mut n = 0;
        while self.peek_at(offset + n) == byte && self.pos + offset + n < self.source_len {
            n += 1;
        }
        n
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// True at the sentinel, false at an interior NUL.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two offsets.
    ///
    /// Returns `""` when the range is out of bounds or splits a UTF-8
    /// sequence. Token boundaries produced by the scanner never do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.source_len) as usize;
        self.buf
            .get(start as usize..end)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be false so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Width of the UTF-8 sequence introduced by `byte`.
    ///
    /// Continuation and invalid bytes count as width 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// The character starting at the current position.
    ///
    /// Returns `'\0'` at EOF.
    pub fn current_char(&self) -> char {
        let width = Self::utf8_char_width(self.current());
        self.slice(self.pos, self.pos + width)
            .chars()
            .next()
            .unwrap_or('\0')
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary single-line literal text.
    ///
    /// Stops at `quote`, `\`, `\n` or `\r` and returns that byte, or
    /// returns 0 after moving to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);

        if let Some(off) = earliest_of(primary, cr) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next `quote` or `\`, crossing newlines.
    ///
    /// Returns the byte found, or 0 after moving to EOF. Used by the
    /// multiline and raw content scanners.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_or_backslash(&mut self, quote: u8) -> u8 {
        if let Some(off) = memchr::memchr2(quote, b'\\', self.remaining()) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos.min(self.source_len)) as usize;
        &self.buf[start..self.source_len as usize]
    }
}

#[cfg(test)]
mod tests;
