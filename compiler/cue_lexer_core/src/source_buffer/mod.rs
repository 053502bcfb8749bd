//! Sentinel-terminated source buffer.
//!
//! The buffer appends a `0x00` sentinel after the source so the scanner
//! can detect end of input without bounds checks in its hot loops. The
//! allocation is rounded up to a 64-byte boundary, which also gives
//! `peek()` and `peek2()` zeroed padding to read near the end.
//!
//! Interior NUL bytes are recorded at construction. They are not valid
//! CUE source, and the scanner cannot tell them from the sentinel by
//! value alone, so the cooking layer reports them from this list.

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// UTF-8 encoding of U+FEFF.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Sentinel-terminated source buffer.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    /// Byte offsets of NUL bytes inside the source.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `len()`; the cooking
    /// layer rejects them before scanning.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let interior_nulls = find_interior_nulls(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            interior_nulls,
        }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Whether the source starts with a UTF-8 byte order mark.
    ///
    /// The scanner treats a leading BOM as whitespace.
    pub fn has_bom(&self) -> bool {
        self.as_bytes().starts_with(&UTF8_BOM)
    }

    /// Offsets of NUL bytes in the source, in ascending order.
    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

fn find_interior_nulls(source: &[u8]) -> Vec<u32> {
    memchr::memchr_iter(0, source)
        .filter_map(|pos| u32::try_from(pos).ok())
        .collect()
}

#[cfg(test)]
mod tests;
