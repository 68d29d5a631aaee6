//! End-to-end driver tests: whole programs through lex → parse → eval,
//! checking the buffered output and the fail-fast contract.

use pretty_assertions::assert_eq;
use rillc::Program;

#[test]
fn score_program_produces_one_output_line() {
    let mut program = Program::new();
    let result = program.run([
        "(set v 3.5)",
        "(set a 2.0)",
        r#"(puts (concat "Score : " (str (add v a))))"#,
    ]);

    assert!(result.is_ok(), "program must run cleanly");
    assert_eq!(program.output(), ["Score : 5.5"]);
}

#[test]
fn demo_file_runs_and_flushes_in_order() {
    let source = include_str!("../demos/score.rill");
    let mut program = Program::new();

    if let Err(e) = program.run(source.lines()) {
        panic!("demo program failed: {e}");
    }
    assert_eq!(program.into_output(), vec!["Score : 5.50121", "3.51"]);
}

#[test]
fn puts_returns_its_argument_so_calls_nest() {
    let mut program = Program::new();
    let result = program.run([r#"(puts (puts "twice"))"#]);

    assert!(result.is_ok());
    assert_eq!(program.output(), ["twice", "twice"]);
}

#[test]
fn syntax_error_aborts_with_line_number() {
    let mut program = Program::new();
    let Err(err) = program.run(["(set x 1)", "(add 1 2))"]) else {
        panic!("extra `)` must abort the run");
    };

    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "error on line 2: syntax error: unexpected `)` after the closing `)`");
}

#[test]
fn eval_error_preserves_buffered_output() {
    let mut program = Program::new();
    let Err(err) = program.run([
        r#"(puts "one")"#,
        r#"(puts "two")"#,
        "(max)",
        r#"(puts "never")"#,
    ]) else {
        panic!("zero-argument max must abort the run");
    };

    assert_eq!(err.line, 3);
    assert_eq!(err.message, "max expects at least 1 argument, got 0");
    // Lines buffered before the failure are still there for the flush;
    // nothing after the failing line ran.
    assert_eq!(program.output(), ["one", "two"]);
}

#[test]
fn rebinding_uses_the_latest_value() {
    let mut program = Program::new();
    let result = program.run([
        "(set x 1)",
        "(set x (add x 10))",
        "(puts (str x))",
    ]);

    assert!(result.is_ok());
    assert_eq!(program.output(), ["11.0"]);
}

#[test]
fn set_of_text_then_concat() {
    let mut program = Program::new();
    let result = program.run([
        r#"(set greeting "hello")"#,
        r#"(puts (concat greeting " " "world"))"#,
    ]);

    assert!(result.is_ok());
    assert_eq!(program.output(), ["hello world"]);
}

#[test]
fn type_error_carries_spec_wording() {
    let mut program = Program::new();
    let Err(err) = program.run([r#"(concat "a" 1)"#]) else {
        panic!("concat of a number must fail");
    };

    assert_eq!(err.line, 1);
    assert_eq!(err.message, "type mismatch: expected text, got a number");
}
