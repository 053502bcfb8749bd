//! Grammar Modules
//!
//! Parsing implementations for CUE syntax constructs.
//!
//! # Organization
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - `file`: source file, package clause, imports, terminators
//! - `decl`: declarations, fields, let clauses, ellipses
//! - `label`: labels and the lookahead that tells a field from an embedding
//! - `clause`: comprehensions and their `for`/`if`/`let` clauses
//! - `composite`: struct and list literals
//! - `literal`: string and bytes literals, interpolations, attributes
//! - `expr`: the operator precedence chain, postfix chains and operands
//!
//! # Design
//!
//! Plain recursive descent over the cooked token list:
//!
//! - **Lookahead only**: no production backtracks; fields are told apart
//!   from embeddings by scanning ahead for the label's `:`
//! - **Context flags**: `ParseContext` decides whether a line break ends
//!   the current expression
//! - **Error recovery**: value and declaration sites catch errors and
//!   leave an `ERROR` node behind (see `Parser::recover`)

mod clause;
mod composite;
mod decl;
mod expr;
mod file;
mod label;
mod literal;

use cue_ir::ast::Identifier;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a plain identifier token.
    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        if !self.cursor.check_ident() {
            return Err(ParseError::expected_identifier(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        let token = self.cursor.advance();
        Ok(Identifier::new(self.cursor.text(token.span), token.span))
    }
}
