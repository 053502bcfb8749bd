//! Command-line front end for the CUE syntax analyzer.
//!
//! The binary in `main.rs` only dispatches on arguments; every command is
//! implemented here so it can be driven from tests with in-memory output.
//!
//! # Logging
//!
//! Tracing is off unless a filter is set:
//! - `CUE_LOG=cue_parse=debug`: parser entry points and recovery
//! - `CUE_LOG=cue_parse=trace`: every token the parser consumes
//! - `CUE_LOG_TREE=1`: indent events by span nesting
//!
//! `RUST_LOG` is honoured when `CUE_LOG` is unset.

pub mod commands;
mod logging;

pub use logging::init_tracing;

use cue_diagnostic::emitter::ColorMode;

/// Remove every `--color=WHEN` flag from `args`, returning the last one.
///
/// Returns the offending value if it is not `auto`, `always` or `never`.
pub fn take_color_flag(args: &mut Vec<String>) -> Result<ColorMode, String> {
    let mut mode = ColorMode::Auto;
    let mut invalid = None;
    args.retain(|arg| {
        let Some(value) = arg.strip_prefix("--color=") else {
            return true;
        };
        match ColorMode::from_flag(value) {
            Some(parsed) => mode = parsed,
            None => invalid = Some(value.to_string()),
        }
        false
    });
    match invalid {
        Some(value) => Err(value),
        None => Ok(mode),
    }
}
