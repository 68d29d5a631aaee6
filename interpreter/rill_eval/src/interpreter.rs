//! Tree-walking evaluator for Rill.
//!
//! Arguments evaluate eagerly, left-to-right, depth-first; the first
//! failure aborts the call, so later arguments never run and never
//! produce side effects. Dispatch resolves the callee against the
//! closed `Builtin` enumeration and matches it exhaustively.

use crate::builtins::{Builtin, BuiltinNames};
use crate::errors::{
    arity_mismatch, type_mismatch, undefined_variable, unknown_function, EvalError, EvalResult,
};
use crate::state::ProgramState;
use crate::value::{format_number, Value};
use rill_ir::{Expr, ExprKind, Name, Span, StringInterner};
use tracing::trace;

/// Tree-walking evaluator.
///
/// Holds the interner (for rendering names in errors) and the
/// pre-interned builtin name table. Program state is borrowed per call,
/// never stored: the driver owns exactly one `ProgramState` per run.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    builtin_names: BuiltinNames,
}

impl<'a> Interpreter<'a> {
    /// Create an evaluator over the given interner.
    pub fn new(interner: &'a StringInterner) -> Self {
        Interpreter {
            interner,
            builtin_names: BuiltinNames::new(interner),
        }
    }

    /// Evaluate one call tree node against the program state.
    pub fn evaluate(&self, expr: &Expr, state: &mut ProgramState) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::number(*n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(*name))),
            ExprKind::Var(name) => state.symbols.lookup(*name).ok_or_else(|| {
                undefined_variable(self.interner.lookup(*name)).with_span(expr.span)
            }),
            ExprKind::Call { callee, args } => self.eval_call(*callee, args, expr.span, state),
        }
    }

    /// Resolve and run a builtin call.
    fn eval_call(
        &self,
        callee: Name,
        args: &[Expr],
        span: Span,
        state: &mut ProgramState,
    ) -> EvalResult {
        let Some(builtin) = self.builtin_names.resolve(callee) else {
            return Err(unknown_function(self.interner.lookup(callee)).with_span(span));
        };

        // Arity is checked before any argument is evaluated.
        if !builtin.arity().admits(args.len()) {
            return Err(arity_mismatch(builtin, args.len()).with_span(span));
        }
        trace!(builtin = builtin.name(), argc = args.len(), "dispatch");

        match builtin {
            Builtin::Set => self.eval_set(args, state),
            Builtin::Puts => self.eval_puts(args, state),
            Builtin::Concat => self.eval_concat(args, state),
            Builtin::Str => self.eval_str(args, state),
            Builtin::Add => self.eval_add(args, state),
            Builtin::Max => self.eval_max(args, state),
        }
    }

    /// `(set name expr)` — the target is the identifier token captured at
    /// parse time; it is never evaluated.
    fn eval_set(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let ExprKind::Var(target) = args[0].kind else {
            return Err(
                type_mismatch("an identifier", args[0].kind.describe()).with_span(args[0].span)
            );
        };
        let value = self.evaluate(&args[1], state)?;
        state.symbols.define(target, value.clone());
        Ok(value)
    }

    /// `(puts expr)` — append a text value to the output log.
    fn eval_puts(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let value = self.evaluate(&args[0], state)?;
        let line = expect_text(&value, args[0].span)?.to_owned();
        state.output.push(line);
        Ok(value)
    }

    /// `(concat expr...)` — ordered concatenation of text values.
    fn eval_concat(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let mut out = String::new();
        for arg in args {
            let value = self.evaluate(arg, state)?;
            out.push_str(expect_text(&value, arg.span)?);
        }
        Ok(Value::string(out))
    }

    /// `(str expr)` — number to canonical decimal text; text unchanged.
    fn eval_str(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let value = self.evaluate(&args[0], state)?;
        match value {
            Value::Number(n) => Ok(Value::string(format_number(n))),
            Value::Str(_) => Ok(value),
        }
    }

    /// `(add expr...)` — sum of number values.
    fn eval_add(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let mut sum = 0.0;
        for arg in args {
            let value = self.evaluate(arg, state)?;
            sum += expect_number(&value, arg.span)?;
        }
        Ok(Value::number(sum))
    }

    /// `(max expr...)` — greatest of number values.
    fn eval_max(&self, args: &[Expr], state: &mut ProgramState) -> EvalResult {
        let first = self.evaluate(&args[0], state)?;
        let mut best = expect_number(&first, args[0].span)?;
        for arg in &args[1..] {
            let value = self.evaluate(arg, state)?;
            best = best.max(expect_number(&value, arg.span)?);
        }
        Ok(Value::number(best))
    }
}

/// Require a text value.
fn expect_text(value: &Value, span: Span) -> Result<&str, EvalError> {
    value
        .as_str()
        .ok_or_else(|| type_mismatch("text", value.type_name()).with_span(span))
}

/// Require a number value.
fn expect_number(value: &Value, span: Span) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch("a number", value.type_name()).with_span(span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use crate::Arity;
    use pretty_assertions::assert_eq;
    use rill_parse::parse_source;

    /// Parse and evaluate one line against the given state.
    fn eval_line(
        line: &str,
        interner: &StringInterner,
        state: &mut ProgramState,
    ) -> EvalResult {
        let expr = match parse_source(line, interner) {
            Ok(expr) => expr,
            Err(e) => panic!("{line:?} failed to parse: {e}"),
        };
        Interpreter::new(interner).evaluate(&expr, state)
    }

    fn eval_ok(line: &str, interner: &StringInterner, state: &mut ProgramState) -> Value {
        match eval_line(line, interner, state) {
            Ok(value) => value,
            Err(e) => panic!("{line:?} failed to evaluate: {e}"),
        }
    }

    fn eval_err(line: &str, interner: &StringInterner, state: &mut ProgramState) -> EvalError {
        match eval_line(line, interner, state) {
            Ok(value) => panic!("{line:?} unexpectedly evaluated to {value}"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_set_binds_and_returns_value() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let value = eval_ok("(set x 5)", &interner, &mut state);
        assert_eq!(value, Value::number(5.0));

        let value = eval_ok("(add x 1)", &interner, &mut state);
        assert_eq!(value, Value::number(6.0));
    }

    #[test]
    fn test_set_rebind_is_last_write_wins() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        eval_ok("(set x 1)", &interner, &mut state);
        eval_ok("(set x 2)", &interner, &mut state);
        assert_eq!(eval_ok("(max x)", &interner, &mut state), Value::number(2.0));
        assert_eq!(state.symbols.len(), 1);
    }

    #[test]
    fn test_set_target_must_be_identifier() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(set 1 2)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "an identifier",
                got: "a number literal"
            }
        );
        assert!(state.symbols.is_empty());
    }

    #[test]
    fn test_puts_appends_one_line_and_returns_text() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let value = eval_ok(r#"(puts "hi")"#, &interner, &mut state);
        assert_eq!(value, Value::string("hi"));
        assert_eq!(state.output.lines(), ["hi"]);
    }

    #[test]
    fn test_puts_rejects_number() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(puts 1)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "text",
                got: "a number"
            }
        );
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_concat_joins_in_order() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let value = eval_ok(r#"(concat "a" "b" "c")"#, &interner, &mut state);
        assert_eq!(value, Value::string("abc"));
    }

    #[test]
    fn test_concat_rejects_number_argument() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err(r#"(concat "a" 1)"#, &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "text",
                got: "a number"
            }
        );
    }

    #[test]
    fn test_str_renders_numbers_canonically() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        assert_eq!(
            eval_ok("(str 2)", &interner, &mut state),
            Value::string("2.0")
        );
        assert_eq!(
            eval_ok("(str 5.5)", &interner, &mut state),
            Value::string("5.5")
        );
        assert_eq!(
            eval_ok(r#"(str "already text")"#, &interner, &mut state),
            Value::string("already text")
        );
    }

    #[test]
    fn test_add_sums_numbers() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        assert_eq!(
            eval_ok("(add 1 2 3.5)", &interner, &mut state),
            Value::number(6.5)
        );
    }

    #[test]
    fn test_add_requires_two_arguments() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(add 1)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "add",
                expected: Arity::AtLeast(2),
                got: 1
            }
        );
    }

    #[test]
    fn test_max_picks_greatest() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        assert_eq!(
            eval_ok("(max 1 5.5 3)", &interner, &mut state),
            Value::number(5.5)
        );
        assert_eq!(
            eval_ok("(max -3 -1.5)", &interner, &mut state),
            Value::number(-1.5)
        );
    }

    #[test]
    fn test_max_requires_an_argument() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(max)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "max",
                expected: Arity::AtLeast(1),
                got: 0
            }
        );
    }

    #[test]
    fn test_undefined_variable_leaves_state_unchanged() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(add nope 1)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: String::from("nope")
            }
        );
        assert!(state.symbols.is_empty());
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_unknown_function() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(frobnicate 1)", &interner, &mut state);
        assert_eq!(
            err.kind,
            EvalErrorKind::UnknownFunction {
                name: String::from("frobnicate")
            }
        );
    }

    #[test]
    fn test_arguments_evaluate_left_to_right() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        // The first argument binds x; the second reads it.
        let value = eval_ok("(add (set x 1) x)", &interner, &mut state);
        assert_eq!(value, Value::number(2.0));
    }

    #[test]
    fn test_earlier_side_effects_survive_later_failure() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        // puts runs before add's result fails concat's type check
        let err = eval_err(r#"(concat (puts "kept") (add 1 2))"#, &interner, &mut state);
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
        assert_eq!(state.output.lines(), ["kept"]);
    }

    #[test]
    fn test_first_failure_skips_later_arguments() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        // The undefined reference fails before the later puts can run.
        let err = eval_err(r#"(concat missing (puts "never"))"#, &interner, &mut state);
        assert!(matches!(err.kind, EvalErrorKind::UndefinedVariable { .. }));
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_arity_is_checked_before_arguments_run() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        // set takes exactly 2 args; the puts argument must not run.
        let err = eval_err(r#"(set x 1 (puts "never"))"#, &interner, &mut state);
        assert!(matches!(err.kind, EvalErrorKind::ArityMismatch { .. }));
        assert!(state.output.is_empty());
        assert!(state.symbols.is_empty());
    }

    #[test]
    fn test_error_carries_failing_span() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        let err = eval_err("(add 1 oops)", &interner, &mut state);
        // span of `oops`
        assert_eq!(err.span, Some(rill_ir::Span::new(7, 11)));
    }

    #[test]
    fn test_score_program_end_to_end() {
        let interner = StringInterner::new();
        let mut state = ProgramState::new();

        eval_ok("(set v 3.5)", &interner, &mut state);
        eval_ok("(set a 2.0)", &interner, &mut state);
        eval_ok(
            r#"(puts (concat "Score : " (str (add v a))))"#,
            &interner,
            &mut state,
        );

        assert_eq!(state.output.lines(), ["Score : 5.5"]);
    }
}
