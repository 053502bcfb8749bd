//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use cue_ir::ast::to_sexp;
use cue_parse::{lex, parse, ParseOptions};

use super::read_file;

/// Write the token stream of `source`, then any lexical errors.
pub fn lex_source<W: Write>(path: &str, source: &str, out: &mut W) -> io::Result<()> {
    let output = lex(source);

    writeln!(out, "Tokens for '{path}' ({} tokens):", output.tokens.len())?;
    for token in output.tokens.iter() {
        writeln!(
            out,
            "  {:?} {:?} @ {}",
            token.kind,
            token.span.slice(source),
            token.span
        )?;
    }

    if !output.tokens.comments().is_empty() {
        writeln!(out)?;
        writeln!(out, "Comments:")?;
        for span in output.tokens.comments() {
            writeln!(out, "  {span}: {:?}", span.slice(source))?;
        }
    }

    if output.has_errors() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for error in &output.errors {
            let diagnostic = error.to_diagnostic();
            writeln!(
                out,
                "  {}: [{}] {}",
                error.span, diagnostic.code, diagnostic.message
            )?;
        }
    }
    Ok(())
}

/// Write a summary of the parse of `source`, optionally with the full tree.
pub fn parse_source<W: Write>(
    path: &str,
    source: &str,
    show_tree: bool,
    out: &mut W,
) -> io::Result<()> {
    let output = parse(source, &ParseOptions::default());
    let file = &output.file;

    writeln!(out, "Parse result for '{path}':")?;
    match &file.package {
        Some(package) => writeln!(out, "  Package: {}", package.name.as_str())?,
        None => writeln!(out, "  Package: (none)")?,
    }
    writeln!(out, "  Imports: {}", file.imports.len())?;
    writeln!(out, "  Declarations: {}", file.declarations.len())?;
    writeln!(out, "  Comments: {}", output.comments.len())?;
    writeln!(out, "  Errors: {}", output.errors.len())?;

    if show_tree {
        writeln!(out)?;
        writeln!(out, "{}", to_sexp(file))?;
    }

    if output.has_errors() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for error in &output.errors {
            writeln!(out, "  {}: {error}", error.span)?;
        }
    }
    Ok(())
}

/// Lex a file and print its tokens.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let mut stdout = io::stdout().lock();
    if let Err(e) = lex_source(path, &content, &mut stdout) {
        eprintln!("error writing output: {e}");
        std::process::exit(1);
    }
}

/// Parse a file and print a summary, plus the tree when `show_tree` is set.
pub fn parse_file(path: &str, show_tree: bool) {
    let content = read_file(path);
    let mut stdout = io::stdout().lock();
    if let Err(e) = parse_source(path, &content, show_tree, &mut stdout) {
        eprintln!("error writing output: {e}");
        std::process::exit(1);
    }
}
