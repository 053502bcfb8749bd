//! CUE IR - shared syntax types
//!
//! This crate contains the data structures passed between the CUE lexer,
//! parser and driver:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The syntax tree (`ast`) produced by the parser
//! - An S-expression printer for inspecting trees
//!
//! Every node owns its children and records the byte span it covers.
//! Names and literal text are stored as `Box<str>` so a tree outlives
//! the source buffer it was parsed from.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{
    EscapeKind, IntBase, LiteralKind, Token, TokenFlags, TokenKind, TokenList, TokenTag,
};

/// Trait for syntax nodes that know their source location.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    #[inline]
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned> Spanned for Box<T> {
    #[inline]
    fn span(&self) -> Span {
        (**self).span()
    }
}
