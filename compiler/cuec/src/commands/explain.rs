//! The `explain` command: describe a diagnostic code.

use cue_diagnostic::ErrorCode;

/// One-line explanation for `code_str`, or `None` if it is not a known code.
pub fn explain_code(code_str: &str) -> Option<String> {
    let code = code_str.trim().to_ascii_uppercase().parse::<ErrorCode>().ok()?;
    let phase = if code.is_lexer_error() {
        "lexical error"
    } else {
        "syntax error"
    };
    Some(format!("{code}: {} ({phase})", code.description()))
}

/// Print the explanation for a code, exiting with status 1 if it is unknown.
pub fn explain_error(code_str: &str) {
    let Some(text) = explain_code(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}");
        }
        std::process::exit(1);
    };
    println!("{text}");
}
