//! Recursive descent parser for CUE.
//!
//! Produces the owned syntax tree from [`cue_ir::ast`]. The lexer runs
//! first; the parser then walks the cooked `TokenList`, where whitespace
//! and comments survive only as token flags.
//!
//! # Error handling
//!
//! Two modes, chosen with [`ParseOptions`]:
//! - [`ErrorMode::Recover`] records every error, replaces the broken
//!   region with an `ERROR` node and resynchronizes at the next
//!   terminator or closing bracket.
//! - [`ErrorMode::StopAtFirst`] stops at the first error.
//!
//! Exceeding [`ParseOptions::max_depth`] always stops parsing.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use cue_lexer::{lex, LexOutput};
pub use error::{ErrorContext, ParseError, ParseErrorKind};
pub use recovery::{synchronize, TokenSet};

use cue_ir::ast::{ErrorNode, Expression, SourceFile};
use cue_ir::{Span, Token, TokenKind, TokenList};
use cue_stack::ensure_sufficient_stack;
use tracing::debug;

/// What to do when the parser hits an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Stop at the first error.
    StopAtFirst,
    /// Collect all errors and return a best-effort tree.
    #[default]
    Recover,
}

/// Parser configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub mode: ErrorMode,
    /// Deepest nesting of expressions and structs accepted.
    pub max_depth: u32,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: u32 = 512;

    pub fn new() -> Self {
        Self::default()
    }

    /// Options for [`ErrorMode::StopAtFirst`].
    pub fn strict() -> Self {
        Self::default().with_mode(ErrorMode::StopAtFirst)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            mode: ErrorMode::default(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of parsing a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    /// The tree. Empty when parsing stopped early.
    pub file: SourceFile,
    /// Lexer and parser errors, ordered by position. With
    /// [`ErrorMode::StopAtFirst`] at most one.
    pub errors: Vec<ParseError>,
    /// Spans of all `//` comments.
    pub comments: Vec<Span>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tree, or the first error.
    pub fn into_result(self) -> Result<SourceFile, ParseError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.file),
        }
    }
}

/// Result of parsing a standalone expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionOutput {
    pub expression: Expression,
    pub errors: Vec<ParseError>,
}

/// Parse one source file.
pub fn parse(source: &str, options: &ParseOptions) -> ParseOutput {
    let lexed = cue_lexer::lex(source);
    let end = eof_offset(&lexed.tokens);

    let mut parser = Parser::new(&lexed.tokens, source, *options);
    let result = parser.parse_source_file();
    let mut errors = parser.into_errors();
    let file = match result {
        Ok(file) => file,
        Err(error) => {
            errors.push(error);
            empty_file(end)
        }
    };

    let errors = merge_errors(lexed.errors, errors, options.mode);
    debug!(
        declarations = file.declarations.len(),
        errors = errors.len(),
        "parsed file"
    );
    ParseOutput {
        file,
        errors,
        comments: lexed.tokens.comments().to_vec(),
    }
}

/// Parse one source file, failing on the first error.
pub fn parse_strict(source: &str) -> Result<SourceFile, ParseError> {
    parse(source, &ParseOptions::strict()).into_result()
}

/// Parse a single expression, such as the text of a field value.
pub fn parse_expression(source: &str, options: &ParseOptions) -> ExpressionOutput {
    let lexed = cue_lexer::lex(source);
    let end = eof_offset(&lexed.tokens);

    let mut parser = Parser::new(&lexed.tokens, source, *options);
    parser.context = ParseContext::TOP_LEVEL;
    let result = parser.parse_standalone_expression();
    let mut errors = parser.into_errors();
    let expression = match result {
        Ok(expression) => expression,
        Err(error) => {
            errors.push(error);
            Expression::Error(ErrorNode {
                span: Span::new(0, end),
            })
        }
    };

    ExpressionOutput {
        expression,
        errors: merge_errors(lexed.errors, errors, options.mode),
    }
}

fn eof_offset(tokens: &TokenList) -> u32 {
    tokens.as_slice().last().map_or(0, |token| token.span.start)
}

fn empty_file(end: u32) -> SourceFile {
    SourceFile {
        attribute: None,
        package: None,
        imports: Vec::new(),
        declarations: Vec::new(),
        span: Span::new(0, end),
    }
}

/// Combine lexer and parser errors in source order.
///
/// Parser errors raised on an `Error` token repeat a lexer error and are
/// dropped. At equal positions lexer errors come first.
fn merge_errors(
    lex_errors: Vec<cue_lexer::LexError>,
    parse_errors: Vec<ParseError>,
    mode: ErrorMode,
) -> Vec<ParseError> {
    let mut errors: Vec<ParseError> = lex_errors.into_iter().map(ParseError::from_lex).collect();
    errors.extend(
        parse_errors
            .into_iter()
            .filter(|e| e.kind != ParseErrorKind::Lexical || e.lex_error().is_some()),
    );
    errors.sort_by_key(|e| e.span.start);
    if mode == ErrorMode::StopAtFirst {
        errors.truncate(1);
    }
    errors
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    context: ParseContext,
    depth: u32,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList, source: &'a str, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            options,
            context: ParseContext::FILE,
            depth: 0,
            errors: Vec::new(),
        }
    }

    pub(crate) fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Record a local error the parser can continue past.
    ///
    /// In `StopAtFirst` mode the error is returned instead, ending the parse.
    pub(crate) fn report(&mut self, error: ParseError) -> Result<(), ParseError> {
        match self.options.mode {
            ErrorMode::StopAtFirst => Err(error),
            ErrorMode::Recover => {
                debug!(code = %error.code, offset = error.span.start, "reported");
                self.errors.push(error);
                Ok(())
            }
        }
    }

    /// Turn a failed production into an `ERROR` node.
    ///
    /// `start` is the cursor position where the production began. The
    /// node covers every token from there to the resynchronization point,
    /// or is a point span if nothing was consumed. A production that
    /// already consumed tokens and stopped at a line break is left there.
    pub(crate) fn recover(
        &mut self,
        error: ParseError,
        start: usize,
    ) -> Result<ErrorNode, ParseError> {
        if error.is_fatal() || self.options.mode == ErrorMode::StopAtFirst {
            return Err(error);
        }
        debug!(code = %error.code, offset = error.span.start, "recovering");
        self.errors.push(error);
        if self.cursor.position() == start || !self.at_line_break() {
            synchronize(&mut self.cursor, self.context);
        }
        Ok(ErrorNode {
            span: self.span_from(start),
        })
    }

    /// Span from the token at position `start` to the last consumed token.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        if self.cursor.position() > start {
            self.cursor.span_at(start).merge(self.cursor.previous_span())
        } else {
            Span::point(self.cursor.current_span().start)
        }
    }

    /// Run `f` one nesting level deeper, growing the stack if needed.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.link()?;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Run a left-nested chain such as `a + b + c` or `a.b[0]`.
    ///
    /// Each link the chain wraps around its left side is one more level of
    /// tree, counted with [`Parser::link`]. The depth is restored when the
    /// chain ends, whether or not it succeeded.
    pub(crate) fn chain<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = self.depth;
        let result = f(self);
        self.depth = saved;
        result
    }

    /// Count one nesting level against `max_depth`.
    pub(crate) fn link(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::recursion_limit(
                self.cursor.current_span(),
                self.options.max_depth,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Run `f` with `context` in place of the current context.
    pub(crate) fn with_context<T>(
        &mut self,
        context: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Consume a token of `kind` or fail with the expected set `{kind}`.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance())
        } else {
            Err(ParseError::unexpected(
                self.cursor.current_kind(),
                self.cursor.current_span(),
                TokenSet::single(*kind),
            ))
        }
    }

    /// Consume the closing bracket for an opener at `open`.
    ///
    /// A missing closer is reported; anything before the next closing
    /// bracket is skipped and returned as an error node. The span is the
    /// closer's, or a point span where it should have been.
    pub(crate) fn close(&mut self, closer: TokenKind, open: Span) -> Result<Closed, ParseError> {
        if let Some(token) = self.cursor.eat(&closer) {
            return Ok(Closed {
                span: token.span,
                skipped: None,
            });
        }
        self.report(ParseError::unclosed(
            open,
            &closer,
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))?;
        let start = self.cursor.position();
        let skipped = (recovery::skip_to_closer(&mut self.cursor) > 0).then(|| ErrorNode {
            span: self.span_from(start),
        });
        let span = match self.cursor.eat(&closer) {
            Some(token) => token.span,
            None => Span::point(self.cursor.previous_span().end),
        };
        Ok(Closed { span, skipped })
    }

    /// True if a line break before the current token ends the expression.
    #[inline]
    pub(crate) fn at_line_break(&self) -> bool {
        self.context.newline_terminates() && self.cursor.has_newline_before()
    }
}

/// A consumed (or missing) closing bracket.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Closed {
    pub(crate) span: Span,
    /// Tokens skipped while looking for the closer.
    pub(crate) skipped: Option<ErrorNode>,
}

#[cfg(test)]
mod tests;
