//! The `check` command: parse a CUE file and report every syntax error.

use std::io::Write;

use cue_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use cue_parse::{parse, ParseOptions, ParseOutput};

use super::read_file;

/// Parse `source` and render its diagnostics into `out`.
///
/// Returns the parse output so callers can report on the tree.
pub fn check_source<W: Write>(
    path: &str,
    source: &str,
    out: W,
    mode: ColorMode,
    is_tty: bool,
) -> ParseOutput {
    let output = parse(source, &ParseOptions::default());
    if output.has_errors() {
        let mut emitter =
            TerminalEmitter::with_color_mode(out, mode, is_tty).with_source(path, source);
        for error in &output.errors {
            emitter.emit(&error.to_diagnostic());
        }
        emitter.emit_summary(output.errors.len(), 0);
        emitter.flush();
    }
    output
}

/// Check a file, exiting with status 1 if it has syntax errors.
pub fn check_file(path: &str, mode: ColorMode) {
    let content = read_file(path);
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let output = check_source(path, &content, std::io::stderr(), mode, is_tty);

    if output.has_errors() {
        std::process::exit(1);
    }

    let declarations = output.file.declarations.len();
    let imports = output.file.imports.len();
    println!("OK: {path} ({declarations} declarations, {imports} imports)");
}
