//! Error codes for lexer and parser diagnostics.
//!
//! The first digit names the phase: `E0xxx` for lexical errors and
//! `E1xxx` for syntax errors.

use std::fmt;
use std::str::FromStr;

/// Stable identifier of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated single-line literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// Invalid escape sequence
    E0004,
    /// Byte escape inside a string literal
    E0005,
    /// Unterminated multiline or raw literal
    E0006,
    /// Raw literal closed with a different fence
    E0007,
    /// Backslash outside a literal
    E0008,
    /// `!` not followed by `=` or `~`
    E0009,
    /// Malformed attribute
    E0010,
    /// `#` or `_#` not followed by a letter
    E0011,
    /// NUL byte in source
    E0012,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected label
    E1005,
    /// Callee is not a builtin or qualified identifier
    E1006,
    /// Call without arguments
    E1007,
    /// Comprehension without a struct body
    E1008,
    /// List element after `...`
    E1009,
    /// Missing `,` or newline between declarations
    E1010,
    /// Whitespace between an operand and its selector or index
    E1011,
    /// Nesting too deep
    E1100,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 24] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1100,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1100 => "E1100",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "malformed number literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E0005 => "byte escape in a string literal",
            ErrorCode::E0006 => "unterminated multiline or raw literal",
            ErrorCode::E0007 => "mismatched raw literal fence",
            ErrorCode::E0008 => "stray backslash",
            ErrorCode::E0009 => "`!` must be followed by `=` or `~`",
            ErrorCode::E0010 => "malformed attribute",
            ErrorCode::E0011 => "invalid identifier",
            ErrorCode::E0012 => "NUL byte in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected label",
            ErrorCode::E1006 => "only builtins and qualified identifiers can be called",
            ErrorCode::E1007 => "call requires at least one argument",
            ErrorCode::E1008 => "comprehension requires a struct body",
            ErrorCode::E1009 => "list elements cannot follow `...`",
            ErrorCode::E1010 => "missing terminator between declarations",
            ErrorCode::E1011 => "selector or index must follow its operand immediately",
            ErrorCode::E1100 => "nesting too deep",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or(())
    }
}
