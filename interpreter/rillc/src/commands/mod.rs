//! CLI commands: run, repl, parse, lex.

use crate::driver::Program;
use rill_ir::StringInterner;
use rill_parse::parse_source;
use std::io::{self, BufRead, Write};

/// Read a source file or exit with a message.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Execute a program file line by line.
///
/// Buffered output is flushed to stdout on success and on error alike;
/// an error is reported to stderr with its line number and the process
/// exits non-zero.
pub fn run_file(path: &str) {
    let content = read_file(path);
    let mut program = Program::new();
    let result = program.run(content.lines());

    for line in program.output() {
        println!("{line}");
    }
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Interactive session: read lines from stdin, print each result.
///
/// Unlike the batch driver, an error reports and the session continues.
/// Output-log lines are flushed as they are produced.
pub fn run_repl() {
    let mut program = Program::new();
    let stdin = io::stdin();
    let mut flushed = 0;

    print_prompt();
    for (idx, line) in stdin.lock().lines().enumerate() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim();
        if !line.is_empty() {
            match program.run_line(idx + 1, line) {
                Ok(value) => {
                    for emitted in &program.output()[flushed..] {
                        println!("{emitted}");
                    }
                    flushed = program.output().len();
                    println!("{value}");
                }
                Err(e) => eprintln!("{e}"),
            }
        }
        print_prompt();
    }
}

fn print_prompt() {
    print!("rill> ");
    let _ = io::stdout().flush();
}

/// Debug command: print the call tree for each line of a file.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let mut failed = false;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        match parse_source(line, &interner) {
            Ok(expr) => println!("line {}: {expr:?}", idx + 1),
            Err(e) => {
                eprintln!("line {}: {e}", idx + 1);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Debug command: print the token stream for each line of a file.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        println!("line {}:", idx + 1);
        let tokens = rill_lexer::lex(line, &interner);
        for token in &tokens {
            println!("  {token:?}");
        }
    }
}
