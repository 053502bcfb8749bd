//! CUE lexer core - the raw scanning layer.
//!
//! Turns source text into `(RawTag, len)` pairs without resolving
//! keywords, validating escapes or checking numeric digits. Those
//! decisions belong to the cooking layer in `cue_lexer`.
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source
//! - [`Cursor`]: byte cursor over that buffer
//! - [`RawScanner`]: the scanner itself, tracking open literals
//! - [`scan_content`]: the interior scanners for multiline and raw literals
//!
//! Every byte of the input belongs to exactly one raw token, so the
//! token lengths always sum to the source length.

mod content;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use content::{scan_content, ContentKind, ContentScan, Delimiter, Quote};
pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
