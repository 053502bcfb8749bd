//! CUE syntax checker CLI.

use cuec::commands::{check_file, explain_error, lex_file, parse_file};
use cuec::{init_tracing, take_color_flag};

fn main() {
    init_tracing();

    let mut args: Vec<String> = std::env::args().collect();
    let color = match take_color_flag(&mut args) {
        Ok(mode) => mode,
        Err(value) => {
            eprintln!("error: invalid --color value '{value}'");
            eprintln!("Valid values: auto, always, never");
            std::process::exit(1);
        }
    };

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: cuec check <file.cue>");
                std::process::exit(1);
            }
            for path in &args[2..] {
                check_file(path, color);
            }
        }
        "parse" => {
            let show_tree = args.iter().skip(2).any(|a| a == "--sexp");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: cuec parse <file.cue> [--sexp]");
                std::process::exit(1);
            };
            parse_file(path, show_tree);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: cuec lex <file.cue>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: cuec explain <ERROR_CODE>");
                eprintln!("Example: cuec explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cuec {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("cue"))
            {
                check_file(command, color);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("cuec: CUE syntax checker");
    println!();
    println!("Usage: cuec [--color=auto|always|never] <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.cue>...   Report syntax errors (exit 1 if any)");
    println!("  parse <file.cue>      Parse and display a summary");
    println!("  lex <file.cue>        Tokenize and display tokens");
    println!("  explain <code>        Explain an error code (e.g., E1002)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Parse options:");
    println!("  --sexp                Also print the syntax tree");
    println!();
    println!("Environment:");
    println!("  CUE_LOG=<filter>      Enable tracing (e.g. cue_parse=debug)");
    println!("  CUE_LOG_TREE=1        Indent trace output by nesting");
    println!();
    println!("Examples:");
    println!("  cuec check schema.cue");
    println!("  cuec parse schema.cue --sexp");
    println!("  cuec explain E1010");
}
