//! Stack growth for the recursive-descent parser.
//!
//! Nested structs, lists, parentheses and interpolations all recurse
//! through the same expression entry point. The parser caps nesting
//! depth itself; this crate makes sure the native stack can hold every
//! level up to that cap, whatever thread the parse runs on.
//!
//! On native targets [`ensure_sufficient_stack`] switches to a freshly
//! allocated segment via `stacker` when less than [`RED_ZONE`] bytes
//! remain. On `wasm32` it calls the closure directly.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
///
/// Wrap the recursive entry point, not every helper:
///
/// ```text
/// fn parse_expr(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expr_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
