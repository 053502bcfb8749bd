//! Raw token tags.
//!
//! Discriminants are grouped into ranges so a tag's category can be
//! read off its value:
//!
//! | Range   | Category                           |
//! |---------|------------------------------------|
//! | 0-15    | Identifiers, numbers, attributes   |
//! | 16-31   | Literal delimiters and parts       |
//! | 32-63   | Operators                          |
//! | 80-95   | Delimiters                         |
//! | 112-127 | Trivia                             |
//! | 240-254 | Errors                             |
//! | 255     | End of input                       |

/// Payload-free kind of a raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & numbers ===
    /// Identifier, including `#def`, `_hidden` and `_#hiddenDef` forms.
    Ident = 0,
    /// Decimal integer.
    Int = 1,
    Float = 2,
    /// `0x...`
    HexInt = 3,
    /// `0o...` or a decimal-looking literal with a leading zero.
    OctInt = 4,
    /// `0b...`
    BinInt = 5,
    /// Number with a `K`/`M`/`G`/`T`/`P` multiplier, e.g. `1.5Gi`.
    SiInt = 6,
    /// `_`
    Underscore = 7,
    /// `_|_`
    Bottom = 8,
    /// `@name(...)` with a balanced body.
    Attribute = 9,

    // === Literals ===
    /// `"`
    StringOpen = 16,
    /// `'`
    BytesOpen = 17,
    /// `"""`
    MultilineStringOpen = 18,
    /// `'''`
    MultilineBytesOpen = 19,
    /// `#"` (any fence length)
    RawStringOpen = 20,
    /// `#'`
    RawBytesOpen = 21,
    /// `#"""`
    MultilineRawStringOpen = 22,
    /// `#'''`
    MultilineRawBytesOpen = 23,
    /// Uninterpreted text inside a literal.
    LiteralText = 24,
    /// `\` escape inside a single-line literal.
    Escape = 25,
    /// `\(`, or `\#(` in a raw literal.
    InterpolationOpen = 26,
    /// The `)` ending an interpolation.
    InterpolationClose = 27,
    /// Closing quote(s) and fence.
    LiteralClose = 28,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Pipe = 36,
    PipePipe = 37,
    Ampersand = 38,
    AmpAmp = 39,
    Less = 40,
    LessEqual = 41,
    Greater = 42,
    GreaterEqual = 43,
    EqualEqual = 44,
    BangEqual = 45,
    Equal = 46,
    /// `=~`
    EqualTilde = 47,
    /// `!~`
    BangTilde = 48,
    Question = 49,
    Dot = 50,
    DotDotDot = 51,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Colon = 87,

    // === Trivia ===
    /// Spaces, tabs, lone `\r` and a leading BOM.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `//` through end of line, newline excluded.
    LineComment = 114,

    // === Errors ===
    /// A byte that starts no token.
    InvalidByte = 240,
    /// A single-line literal reached a newline or EOF. Zero length.
    UnterminatedLiteral = 241,
    /// A multiline or raw literal reached EOF. Zero length.
    UnclosedDelimiter = 242,
    /// A raw literal closer followed by more `#` than the opener had.
    MismatchedFence = 243,
    /// `\` outside a literal.
    StrayBackslash = 244,
    /// `!` not followed by `=` or `~`.
    Bang = 245,
    /// `@` without a well-formed `name(...)`.
    MalformedAttribute = 246,
    /// `#` or `_#` not followed by a letter.
    InvalidIdentifier = 247,
    /// NUL byte in the source.
    InteriorNull = 248,

    /// End of input. Always zero length.
    Eof = 255,
}

impl RawTag {
    /// Fixed source text of the tag, if it has one.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Underscore => Some("_"),
            Self::Bottom => Some("_|_"),
            Self::StringOpen => Some("\""),
            Self::BytesOpen => Some("'"),
            Self::MultilineStringOpen => Some("\"\"\""),
            Self::MultilineBytesOpen => Some("'''"),
            Self::InterpolationClose | Self::RightParen => Some(")"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Pipe => Some("|"),
            Self::PipePipe => Some("||"),
            Self::Ampersand => Some("&"),
            Self::AmpAmp => Some("&&"),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Equal => Some("="),
            Self::EqualTilde => Some("=~"),
            Self::BangTilde => Some("!~"),
            Self::Question => Some("?"),
            Self::Dot => Some("."),
            Self::DotDotDot => Some("..."),
            Self::LeftParen => Some("("),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Comma => Some(","),
            Self::Colon => Some(":"),
            Self::Bang => Some("!"),
            Self::StrayBackslash => Some("\\"),
            _ => None,
        }
    }

    /// Short human-readable name, used in debug dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Float => "float",
            Self::HexInt => "hex integer",
            Self::OctInt => "octal integer",
            Self::BinInt => "binary integer",
            Self::SiInt => "SI literal",
            Self::Attribute => "attribute",
            Self::RawStringOpen => "raw string opener",
            Self::RawBytesOpen => "raw bytes opener",
            Self::MultilineRawStringOpen => "multiline raw string opener",
            Self::MultilineRawBytesOpen => "multiline raw bytes opener",
            Self::LiteralText => "literal text",
            Self::Escape => "escape sequence",
            Self::InterpolationOpen => "interpolation",
            Self::InterpolationClose => "interpolation end",
            Self::LiteralClose => "literal end",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "comment",
            Self::InvalidByte => "invalid character",
            Self::UnterminatedLiteral => "unterminated literal",
            Self::UnclosedDelimiter => "unclosed literal",
            Self::MismatchedFence => "mismatched fence",
            Self::MalformedAttribute => "malformed attribute",
            Self::InvalidIdentifier => "invalid identifier",
            Self::InteriorNull => "null byte",
            Self::Eof => "end of file",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::LineComment)
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 255
    }

    /// Any of the eight literal openers.
    #[inline]
    pub const fn is_literal_open(self) -> bool {
        (self as u8) >= Self::StringOpen as u8 && (self as u8) <= Self::MultilineRawBytesOpen as u8
    }
}

/// A raw token: tag plus byte length.
///
/// Positions are implicit; the consumer sums lengths to recover offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
