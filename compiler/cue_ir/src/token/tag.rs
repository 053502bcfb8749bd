//! Compact discriminant tag for `TokenKind`.

/// Payload-free discriminant of a [`TokenKind`](super::TokenKind).
///
/// Values are grouped into ranges so that related tokens stay close
/// together in the parser's `u128` token sets:
///
/// | Range   | Category                  |
/// |---------|---------------------------|
/// | 0-9     | Literals and literal parts |
/// | 16-22   | Keywords                  |
/// | 24-25   | `_` and `_\|_`            |
/// | 32-43   | Punctuation               |
/// | 48-63   | Operators                 |
/// | 126-127 | Special                   |
///
/// All values must stay below 128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Literals (0-9) ===
    Ident = 0,
    Int = 1,
    Float = 2,
    LiteralOpen = 3,
    LiteralText = 4,
    Escape = 5,
    InterpolationOpen = 6,
    InterpolationClose = 7,
    LiteralClose = 8,
    Attribute = 9,

    // === Keywords (16-22) ===
    KwPackage = 16,
    KwImport = 17,
    KwFor = 18,
    KwIn = 19,
    KwIf = 20,
    KwLet = 21,
    KwNot = 22,

    // === Top and bottom (24-25) ===
    Underscore = 24,
    Bottom = 25,

    // === Punctuation (32-43) ===
    LParen = 32,
    RParen = 33,
    LBracket = 34,
    RBracket = 35,
    LBrace = 36,
    RBrace = 37,
    Comma = 38,
    Colon = 39,
    Dot = 40,
    Ellipsis = 41,
    Question = 42,
    Eq = 43,

    // === Operators (48-63) ===
    Plus = 48,
    Minus = 49,
    Star = 50,
    Slash = 51,
    Pipe = 52,
    Amp = 53,
    AmpAmp = 54,
    PipePipe = 55,
    Lt = 56,
    LtEq = 57,
    EqEq = 58,
    NotEq = 59,
    GtEq = 60,
    Gt = 61,
    Match = 62,
    NotMatch = 63,

    // === Special (126-127) ===
    Error = 126,
    Eof = 127,
}

impl TokenTag {
    /// Largest discriminant; `TokenSet` is a `u128` so this must be < 128.
    pub const MAX_DISCRIMINANT: u8 = Self::Eof as u8;

    /// Every tag, in discriminant order.
    pub const ALL: [TokenTag; 49] = [
        Self::Ident,
        Self::Int,
        Self::Float,
        Self::LiteralOpen,
        Self::LiteralText,
        Self::Escape,
        Self::InterpolationOpen,
        Self::InterpolationClose,
        Self::LiteralClose,
        Self::Attribute,
        Self::KwPackage,
        Self::KwImport,
        Self::KwFor,
        Self::KwIn,
        Self::KwIf,
        Self::KwLet,
        Self::KwNot,
        Self::Underscore,
        Self::Bottom,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::LBrace,
        Self::RBrace,
        Self::Comma,
        Self::Colon,
        Self::Dot,
        Self::Ellipsis,
        Self::Question,
        Self::Eq,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Pipe,
        Self::Amp,
        Self::AmpAmp,
        Self::PipePipe,
        Self::Lt,
        Self::LtEq,
        Self::EqEq,
        Self::NotEq,
        Self::GtEq,
        Self::Gt,
        Self::Match,
        Self::NotMatch,
        Self::Error,
        Self::Eof,
    ];

    /// Recover a tag from its discriminant.
    pub fn from_index(index: u8) -> Option<TokenTag> {
        Self::ALL.iter().copied().find(|tag| *tag as u8 == index)
    }

    /// Human-readable name, used in "expected ..." messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Float => "float",
            Self::LiteralOpen => "string literal",
            Self::LiteralText => "literal text",
            Self::Escape => "escape sequence",
            Self::InterpolationOpen => "\\(",
            Self::InterpolationClose | Self::RParen => ")",
            Self::LiteralClose => "closing quote",
            Self::Attribute => "attribute",
            Self::KwPackage => "package",
            Self::KwImport => "import",
            Self::KwFor => "for",
            Self::KwIn => "in",
            Self::KwIf => "if",
            Self::KwLet => "let",
            Self::KwNot => "not",
            Self::Underscore => "_",
            Self::Bottom => "_|_",
            Self::LParen => "(",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Ellipsis => "...",
            Self::Question => "?",
            Self::Eq => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Pipe => "|",
            Self::Amp => "&",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::GtEq => ">=",
            Self::Gt => ">",
            Self::Match => "=~",
            Self::NotMatch => "!~",
            Self::Error => "invalid token",
            Self::Eof => "end of file",
        }
    }
}
