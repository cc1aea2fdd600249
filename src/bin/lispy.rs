//! Command-line interface for lispy
//!
//! Usage:
//!   lispy repl                                 - Start an interactive prompt
//!   lispy parse `<path>` [--format `<format>`] - Parse a file and print the result

use clap::{Arg, Command};
use std::io::{self, BufRead, Write};

use lispy::lispy::parser::parse_source;
use lispy::lispy::processor::{process_source, ProcessingSpec};
use lispy::lispy::tree::to_parse_tree;

fn main() {
    let matches = Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A front-end for the lispy expression language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("repl").about("Start an interactive lispy prompt"))
        .subcommand(
            Command::new("parse")
                .about("Parse a lispy source file and print it in the requested format")
                .arg(
                    Arg::new("path")
                        .help("Path to the lispy source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tree-multiline', 'token-simple')")
                        .default_value("tree-multiline"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("repl", _)) => {
            run_repl();
        }
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Interactive read-parse-print loop. A lex or parse failure is reported
/// and the session continues; `exit` or end of input ends it.
fn run_repl() {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c or type 'exit' to exit\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("lispy> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // end of input
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }

        let input = line.trim();
        if input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match parse_source(input) {
            Ok(cst) => print!("{}", to_parse_tree(&cst).to_multiline_string()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let output = process_source(&source, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!(
            "Available formats: {}",
            ProcessingSpec::available_formats().join(", ")
        );
        std::process::exit(1);
    });

    print!("{}", output);
}
