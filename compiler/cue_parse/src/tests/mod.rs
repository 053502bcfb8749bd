//! Whole-source parser tests.
//!
//! Trees are compared through their S-expression rendering, which drops
//! spans and keeps the expected values readable.

use super::*;
use cue_diagnostic::ErrorCode;
use cue_ir::ast::{to_sexp, SexpPrinter};

mod errors;
mod expressions;

/// Parse `source`, require it to be error-free, and render the file.
fn sexp(source: &str) -> String {
    let output = parse(source, &ParseOptions::default());
    assert!(
        output.errors.is_empty(),
        "unexpected errors in {source:?}: {:#?}",
        output.errors
    );
    to_sexp(&output.file)
}

/// Parse `source` as one expression, require it to be error-free, and
/// render it.
fn expr_sexp(source: &str) -> String {
    let output = parse_expression(source, &ParseOptions::default());
    assert!(
        output.errors.is_empty(),
        "unexpected errors in {source:?}: {:#?}",
        output.errors
    );
    render_expression(&output.expression)
}

fn render_expression(expression: &Expression) -> String {
    let mut printer = SexpPrinter::new();
    printer.expression(expression);
    printer.finish()
}

/// Parse `source` with recovery and return the rendering and error codes.
fn recovered(source: &str) -> (String, Vec<ErrorCode>) {
    let output = parse(source, &ParseOptions::default());
    let codes = output.errors.iter().map(|e| e.code).collect();
    (to_sexp(&output.file), codes)
}

fn error_codes(source: &str) -> Vec<ErrorCode> {
    recovered(source).1
}

// === Output ===

#[test]
fn empty_source() {
    let output = parse("", &ParseOptions::default());
    assert!(!output.has_errors());
    assert_eq!(to_sexp(&output.file), "(source_file)");
    assert_eq!(output.file.span, Span::new(0, 0));
}

#[test]
fn comments_are_collected() {
    let source = "// head\na: 1 // tail\n";
    let output = parse(source, &ParseOptions::default());
    assert!(!output.has_errors());
    let texts: Vec<&str> = output
        .comments
        .iter()
        .map(|span| &source[span.to_range()])
        .collect();
    assert_eq!(texts, vec!["// head", "// tail"]);
}

#[test]
fn into_result_returns_first_error() {
    let output = parse("a: 1 b: 2\nc: ", &ParseOptions::default());
    assert_eq!(output.errors.len(), 2);
    let error = output.into_result().err();
    assert_eq!(error.map(|e| e.code), Some(ErrorCode::E1010));
}

#[test]
fn parse_strict_accepts_valid_input() {
    let file = parse_strict("package x\na: 1\n");
    assert!(file.is_ok());
}

#[test]
fn file_span_covers_the_source() {
    let source = "a: 1\n\n";
    let output = parse(source, &ParseOptions::default());
    assert_eq!(output.file.span.end as usize, source.len());
}
