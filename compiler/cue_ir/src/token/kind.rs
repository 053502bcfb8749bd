//! Token kinds produced by the CUE lexer.

use std::fmt;

use super::TokenTag;

/// Radix (or SI form) of an integer literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum IntBase {
    /// `0b1010`
    Binary,
    /// `0o17`
    Octal,
    /// `42`, `1_000`
    Decimal,
    /// `0xFF`
    Hex,
    /// `1.5Ki`, `10M`
    Si,
}

/// One of the eight string/bytes literal forms.
///
/// The three axes are: double (string) vs. single (bytes) quotes,
/// single-line vs. triple-quoted multiline, and plain vs. `#`-fenced raw.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    /// `"..."`
    SimpleString,
    /// `"""` ... `"""`
    MultilineString,
    /// `'...'`
    SimpleBytes,
    /// `'''` ... `'''`
    MultilineBytes,
    /// `#"..."#`
    RawString,
    /// `#"""` ... `"""#`
    MultilineRawString,
    /// `#'...'#`
    RawBytes,
    /// `#'''` ... `'''#`
    MultilineRawBytes,
}

impl LiteralKind {
    /// Build a kind from its three defining properties.
    pub const fn from_parts(bytes: bool, multiline: bool, raw: bool) -> Self {
        match (bytes, multiline, raw) {
            (false, false, false) => Self::SimpleString,
            (false, true, false) => Self::MultilineString,
            (true, false, false) => Self::SimpleBytes,
            (true, true, false) => Self::MultilineBytes,
            (false, false, true) => Self::RawString,
            (false, true, true) => Self::MultilineRawString,
            (true, false, true) => Self::RawBytes,
            (true, true, true) => Self::MultilineRawBytes,
        }
    }

    /// Single-quoted literals denote bytes.
    pub const fn is_bytes(self) -> bool {
        matches!(
            self,
            Self::SimpleBytes | Self::MultilineBytes | Self::RawBytes | Self::MultilineRawBytes
        )
    }

    pub const fn is_multiline(self) -> bool {
        matches!(
            self,
            Self::MultilineString
                | Self::MultilineBytes
                | Self::MultilineRawString
                | Self::MultilineRawBytes
        )
    }

    /// `#`-fenced literals.
    pub const fn is_raw(self) -> bool {
        matches!(
            self,
            Self::RawString | Self::MultilineRawString | Self::RawBytes | Self::MultilineRawBytes
        )
    }

    /// Name used by the tree printer.
    pub const fn node_name(self) -> &'static str {
        match self {
            Self::SimpleString => "simple_string_lit",
            Self::MultilineString => "multiline_string_lit",
            Self::SimpleBytes => "simple_bytes_lit",
            Self::MultilineBytes => "multiline_bytes_lit",
            Self::RawString => "simple_raw_string_lit",
            Self::MultilineRawString => "multiline_raw_string_lit",
            Self::RawBytes => "simple_raw_bytes_lit",
            Self::MultilineRawBytes => "multiline_raw_bytes_lit",
        }
    }
}

/// Category of an escape sequence inside a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapeKind {
    /// `\n`, `\"`, `\\` and friends.
    Char,
    /// `\x41` or `\101`, valid only in bytes literals.
    Byte,
    /// `\u00E9` or `\U0001F600`.
    Unicode,
}

/// Kind of a CUE token.
///
/// Tokens carry no text; consumers slice the source with the token span.
/// Newlines are not tokens: they are recorded as
/// [`TokenFlags::NEWLINE_BEFORE`](super::TokenFlags::NEWLINE_BEFORE) on the
/// following token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Literals ===
    /// Identifier, possibly prefixed with `#`, `_` or `_#`.
    Ident,
    Int(IntBase),
    Float,
    /// Opening delimiter of a string or bytes literal, fence included.
    LiteralOpen(LiteralKind),
    /// A run of literal text between delimiters, escapes and interpolations.
    LiteralText,
    Escape(EscapeKind),
    /// `\(` or `\#(` inside a literal.
    InterpolationOpen,
    /// The `)` closing an interpolation.
    InterpolationClose,
    /// Closing delimiter of a literal, fence included.
    LiteralClose,
    /// `@name(...)`, lexed as a single token.
    Attribute,

    // === Keywords ===
    Package,
    Import,
    For,
    In,
    If,
    Let,
    Not,

    // === Top and bottom ===
    /// `_`
    Underscore,
    /// `_|_`
    Bottom,

    // === Punctuation ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
    Ellipsis,
    Question,
    Eq,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Pipe,
    Amp,
    AmpAmp,
    PipePipe,
    Lt,
    LtEq,
    EqEq,
    NotEq,
    GtEq,
    Gt,
    /// `=~`
    Match,
    /// `!~`
    NotMatch,

    // === Special ===
    /// A lexical error; details live in the lexer's error list.
    Error,
    Eof,
}

impl TokenKind {
    /// Payload-free tag of this kind.
    #[inline]
    pub const fn tag(&self) -> TokenTag {
        match self {
            Self::Ident => TokenTag::Ident,
            Self::Int(_) => TokenTag::Int,
            Self::Float => TokenTag::Float,
            Self::LiteralOpen(_) => TokenTag::LiteralOpen,
            Self::LiteralText => TokenTag::LiteralText,
            Self::Escape(_) => TokenTag::Escape,
            Self::InterpolationOpen => TokenTag::InterpolationOpen,
            Self::InterpolationClose => TokenTag::InterpolationClose,
            Self::LiteralClose => TokenTag::LiteralClose,
            Self::Attribute => TokenTag::Attribute,
            Self::Package => TokenTag::KwPackage,
            Self::Import => TokenTag::KwImport,
            Self::For => TokenTag::KwFor,
            Self::In => TokenTag::KwIn,
            Self::If => TokenTag::KwIf,
            Self::Let => TokenTag::KwLet,
            Self::Not => TokenTag::KwNot,
            Self::Underscore => TokenTag::Underscore,
            Self::Bottom => TokenTag::Bottom,
            Self::LParen => TokenTag::LParen,
            Self::RParen => TokenTag::RParen,
            Self::LBracket => TokenTag::LBracket,
            Self::RBracket => TokenTag::RBracket,
            Self::LBrace => TokenTag::LBrace,
            Self::RBrace => TokenTag::RBrace,
            Self::Comma => TokenTag::Comma,
            Self::Colon => TokenTag::Colon,
            Self::Dot => TokenTag::Dot,
            Self::Ellipsis => TokenTag::Ellipsis,
            Self::Question => TokenTag::Question,
            Self::Eq => TokenTag::Eq,
            Self::Plus => TokenTag::Plus,
            Self::Minus => TokenTag::Minus,
            Self::Star => TokenTag::Star,
            Self::Slash => TokenTag::Slash,
            Self::Pipe => TokenTag::Pipe,
            Self::Amp => TokenTag::Amp,
            Self::AmpAmp => TokenTag::AmpAmp,
            Self::PipePipe => TokenTag::PipePipe,
            Self::Lt => TokenTag::Lt,
            Self::LtEq => TokenTag::LtEq,
            Self::EqEq => TokenTag::EqEq,
            Self::NotEq => TokenTag::NotEq,
            Self::GtEq => TokenTag::GtEq,
            Self::Gt => TokenTag::Gt,
            Self::Match => TokenTag::Match,
            Self::NotMatch => TokenTag::NotMatch,
            Self::Error => TokenTag::Error,
            Self::Eof => TokenTag::Eof,
        }
    }

    /// Index used for `TokenSet` membership.
    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        self.tag() as u8
    }

    /// Name of the token for a discriminant index, if it is one.
    pub fn friendly_name_from_index(index: u8) -> Option<&'static str> {
        TokenTag::from_index(index).map(TokenTag::name)
    }

    pub fn display_name(&self) -> &'static str {
        self.tag().name()
    }

    /// Keyword text for keyword tokens.
    pub const fn keyword_str(&self) -> Option<&'static str> {
        match self {
            Self::Package => Some("package"),
            Self::Import => Some("import"),
            Self::For => Some("for"),
            Self::In => Some("in"),
            Self::If => Some("if"),
            Self::Let => Some("let"),
            Self::Not => Some("not"),
            _ => None,
        }
    }

    /// Tokens that belong to the inside of a literal.
    pub const fn is_literal_part(&self) -> bool {
        matches!(
            self,
            Self::LiteralText
                | Self::Escape(_)
                | Self::InterpolationOpen
                | Self::InterpolationClose
                | Self::LiteralClose
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
