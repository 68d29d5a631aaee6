//! Rill CLI
//!
//! Line-oriented expression language interpreter.

use rillc::commands::{lex_file, parse_file, run_file, run_repl};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill run <file.rill>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "repl" => run_repl(),
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill parse <file.rill>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: rill lex <file.rill>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        unknown => {
            eprintln!("error: unknown command '{unknown}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Rill - a line-oriented expression language");
    println!();
    println!("Usage: rill <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file.rill>     Execute a program");
    println!("  repl                Interactive session on stdin");
    println!("  parse <file.rill>   Print the call tree per line");
    println!("  lex <file.rill>     Print the token stream per line");
}
