//! Parse context flags for context-sensitive parsing.
//!
//! CUE separates declarations with commas or line breaks, but line breaks
//! are insignificant inside parentheses, brackets and interpolations.
//! The parser carries that distinction as a flag instead of threading a
//! parameter through every production.

use bitflags::bitflags;

bitflags! {
    /// Context flags for parsing.
    ///
    /// Multiple flags can be combined using bitwise OR.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParseContext: u8 {
        /// A line break ends the current declaration.
        ///
        /// Set at file level and inside struct bodies. An operator, call
        /// or selector at the start of a new line does not continue the
        /// expression on the previous line.
        const NEWLINE_TERMINATES = 1 << 0;

        /// Parsing file-level declarations, outside any bracket.
        ///
        /// A closing bracket here has nothing to close, so recovery skips
        /// it instead of stopping at it.
        const TOP_LEVEL = 1 << 1;
    }
}

impl ParseContext {
    /// Context for file-level declarations.
    pub const FILE: Self = Self::NEWLINE_TERMINATES.union(Self::TOP_LEVEL);

    /// Context for the members of a struct literal.
    pub const STRUCT_BODY: Self = Self::NEWLINE_TERMINATES;

    /// Context inside `()`, `[]` and interpolations.
    pub const BRACKETED: Self = Self::empty();

    #[inline]
    pub const fn newline_terminates(self) -> bool {
        self.contains(Self::NEWLINE_TERMINATES)
    }
}

#[cfg(test)]
mod tests;
