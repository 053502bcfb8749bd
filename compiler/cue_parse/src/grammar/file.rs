//! File-level structure.
//!
//! ```text
//! source_file = attribute? package_clause? import_declaration*
//!               (declaration terminator)*
//! ```
//!
//! A terminator is a `,`, a line break before the next token, or the end
//! of input.

use cue_ir::ast::{
    Aliased, Declaration, ErrorNode, ImportDeclaration, ImportName, ImportSpec, ImportSpecs,
    PackageClause, SourceFile, TerminatedDeclaration, Terminator, TerminatorKind,
};
use cue_ir::{LiteralKind, Span, TokenKind};
use tracing::debug;

use crate::{ErrorContext, ParseError, Parser, TokenSet};

impl Parser<'_> {
    pub(crate) fn parse_source_file(&mut self) -> Result<SourceFile, ParseError> {
        debug!("parsing source file");
        let attribute = self
            .cursor
            .check(&TokenKind::Attribute)
            .then(|| self.parse_attribute());

        let package = if self.at_package_clause() {
            let clause = self
                .parse_package_clause()
                .map_err(|e| e.with_context(ErrorContext::PackageClause))?;
            self.expect_header_terminator()?;
            Some(clause)
        } else {
            None
        };

        let mut imports = Vec::new();
        while self.at_import_declaration() {
            let start = self.cursor.position();
            match self.parse_import_declaration() {
                Ok(import) => {
                    imports.push(import);
                    self.expect_header_terminator()?;
                }
                // The tree has no slot for a broken import; the error list does.
                Err(error) => {
                    self.recover(error.with_context(ErrorContext::ImportDeclaration), start)?;
                }
            }
        }
        debug!(
            package = package.is_some(),
            imports = imports.len(),
            "parsed file header"
        );

        let mut declarations = Vec::new();
        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            let declaration = self.parse_file_declaration()?;
            let terminator = self.parse_terminator()?;
            declarations.push(TerminatedDeclaration {
                declaration,
                terminator,
            });
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }

        Ok(SourceFile {
            attribute,
            package,
            imports,
            declarations,
            span: Span::new(0, self.cursor.current_span().end),
        })
    }

    /// `package` followed by its name; `package: x` is a field.
    fn at_package_clause(&self) -> bool {
        self.cursor.check(&TokenKind::Package) && self.cursor.next_is(&TokenKind::Ident)
    }

    /// `import` not used as a label.
    fn at_import_declaration(&self) -> bool {
        self.cursor.check(&TokenKind::Import)
            && !matches!(
                self.cursor.peek_kind_at(1),
                TokenKind::Colon | TokenKind::Question
            )
    }

    fn parse_package_clause(&mut self) -> Result<PackageClause, ParseError> {
        let keyword = self.expect(&TokenKind::Package)?.span;
        let name = self.parse_identifier()?;
        let span = keyword.merge(name.span);
        Ok(PackageClause { name, span })
    }

    fn parse_import_declaration(&mut self) -> Result<ImportDeclaration, ParseError> {
        let keyword = self.expect(&TokenKind::Import)?.span;
        let specs = if let Some(open) = self.cursor.eat(&TokenKind::LParen) {
            let mut specs = Vec::new();
            while !self.cursor.check(&TokenKind::RParen) && !self.cursor.is_at_end() {
                specs.push(self.parse_import_spec()?);
                if self.cursor.eat(&TokenKind::Comma).is_some()
                    || self.cursor.check(&TokenKind::RParen)
                    || self.cursor.has_newline_before()
                {
                    continue;
                }
                self.report(
                    ParseError::missing_terminator(
                        self.cursor.current_kind(),
                        self.cursor.current_span(),
                    )
                    .with_context(ErrorContext::ImportDeclaration),
                )?;
            }
            self.close(TokenKind::RParen, open.span)?;
            ImportSpecs::Grouped(specs)
        } else {
            ImportSpecs::Single(self.parse_import_spec()?)
        };
        let span = keyword.merge(self.cursor.previous_span());
        debug!(offset = span.start, "parsed import declaration");
        Ok(ImportDeclaration { specs, span })
    }

    /// `(name)? path`, where `name` is `.`, `_` or a package identifier.
    fn parse_import_spec(&mut self) -> Result<ImportSpec, ParseError> {
        let start = self.cursor.current_span();
        let alias = match *self.cursor.current_kind() {
            TokenKind::Dot => Some(ImportName::Dot(self.cursor.advance().span)),
            TokenKind::Underscore => Some(ImportName::Blank(self.cursor.advance().span)),
            TokenKind::Ident => Some(ImportName::Package(self.parse_identifier()?)),
            _ => None,
        };
        if !matches!(self.cursor.current_kind(), TokenKind::LiteralOpen(_)) {
            return Err(ParseError::unexpected(
                self.cursor.current_kind(),
                self.cursor.current_span(),
                TokenSet::single(TokenKind::LiteralOpen(LiteralKind::SimpleString)),
            ));
        }
        let value = self.parse_string_literal()?;
        let span = start.merge(value.span);
        Ok(Aliased { alias, value, span })
    }

    /// A top-level declaration, or an `ERROR` node covering a broken one.
    fn parse_file_declaration(&mut self) -> Result<Declaration, ParseError> {
        let start = self.cursor.position();
        let keyword = *self.cursor.current_kind();
        let result = match keyword {
            TokenKind::Attribute => {
                let attribute = self.parse_attribute();
                self.report(ParseError::stray_attribute(attribute.span))?;
                return Ok(Declaration::Error(ErrorNode {
                    span: attribute.span,
                }));
            }
            TokenKind::Package if self.at_package_clause() => self
                .parse_package_clause()
                .map_err(|e| e.with_context(ErrorContext::PackageClause))
                .and_then(|clause| self.misplaced_header(&keyword, clause.span)),
            TokenKind::Import if self.at_import_declaration() => self
                .parse_import_declaration()
                .map_err(|e| e.with_context(ErrorContext::ImportDeclaration))
                .and_then(|import| self.misplaced_header(&keyword, import.span)),
            _ => self.parse_declaration(),
        };
        match result {
            Ok(declaration) => Ok(declaration),
            Err(error) => Ok(Declaration::Error(
                self.recover(error.with_context(ErrorContext::SourceFile), start)?,
            )),
        }
    }

    /// Report a header clause found among the declarations and keep it
    /// out of the tree.
    fn misplaced_header(
        &mut self,
        keyword: &TokenKind,
        span: Span,
    ) -> Result<Declaration, ParseError> {
        self.report(ParseError::misplaced_header(keyword, span))?;
        Ok(Declaration::Error(ErrorNode { span }))
    }

    /// The terminator after a top-level declaration.
    ///
    /// A missing terminator is reported and recorded as
    /// [`TerminatorKind::Missing`]; parsing continues with the next token.
    fn parse_terminator(&mut self) -> Result<Terminator, ParseError> {
        if let Some(comma) = self.cursor.eat(&TokenKind::Comma) {
            return Ok(Terminator {
                kind: TerminatorKind::Comma,
                span: comma.span,
            });
        }
        if self.cursor.is_at_end() {
            return Ok(Terminator {
                kind: TerminatorKind::EndOfInput,
                span: Span::point(self.cursor.current_span().start),
            });
        }
        let span = Span::point(self.cursor.previous_span().end);
        if self.cursor.has_newline_before() {
            return Ok(Terminator {
                kind: TerminatorKind::Newline,
                span,
            });
        }
        self.report(ParseError::missing_terminator(
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))?;
        Ok(Terminator {
            kind: TerminatorKind::Missing,
            span,
        })
    }

    /// After a package clause or import: `,`, a line break or end of input.
    fn expect_header_terminator(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(&TokenKind::Comma).is_some()
            || self.cursor.is_at_end()
            || self.cursor.has_newline_before()
        {
            return Ok(());
        }
        self.report(ParseError::missing_terminator(
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))
    }
}
