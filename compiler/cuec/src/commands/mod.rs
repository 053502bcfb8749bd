//! Command handlers for the `cuec` CLI.
//!
//! Each command has an in-memory form (`*_source`) that writes to any
//! [`std::io::Write`] and a `*_file` wrapper that reads the file, prints
//! to the terminal and sets the exit status.

mod check;
mod debug;
mod explain;

pub use check::{check_file, check_source};
pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use explain::{explain_code, explain_error};

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}

fn read_error_message(path: &str, error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
