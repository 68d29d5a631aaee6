//! The program driver: feeds source lines through the parser and
//! evaluator, fail-fast on the first error.
//!
//! A `Program` owns the one `StringInterner` and one `ProgramState` for
//! the lifetime of a run. How lines are sourced (file, stdin, literal
//! slice) is the caller's decision; the driver only sees lines in order.

use rill_eval::{Interpreter, ProgramState, Value};
use rill_ir::StringInterner;
use rill_parse::parse_source;
use std::fmt;
use tracing::debug;

/// Error that aborted a run: 1-based source line number plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error on line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for RunError {}

/// One program run: interner + mutable state, fed lines in order.
#[derive(Default)]
pub struct Program {
    interner: StringInterner,
    state: ProgramState,
}

impl Program {
    /// Create a fresh run: empty symbol table, empty output log.
    pub fn new() -> Self {
        Program {
            interner: StringInterner::new(),
            state: ProgramState::new(),
        }
    }

    /// Parse and evaluate one source line.
    ///
    /// `number` is the 1-based line number reported on failure.
    pub fn run_line(&mut self, number: usize, line: &str) -> Result<Value, RunError> {
        debug!(number, "run line");
        let expr = parse_source(line, &self.interner).map_err(|e| RunError {
            line: number,
            message: e.to_string(),
        })?;
        Interpreter::new(&self.interner)
            .evaluate(&expr, &mut self.state)
            .map_err(|e| RunError {
                line: number,
                message: e.to_string(),
            })
    }

    /// Feed lines in order, aborting on the first error.
    ///
    /// Blank lines and `;` comment lines are skipped but still counted,
    /// so reported line numbers match the source file.
    pub fn run<'s>(&mut self, lines: impl IntoIterator<Item = &'s str>) -> Result<(), RunError> {
        for (idx, raw) in lines.into_iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            self.run_line(idx + 1, line)?;
        }
        Ok(())
    }

    /// The output lines buffered so far, in emission order.
    pub fn output(&self) -> &[String] {
        self.state.output.lines()
    }

    /// Consume the run, yielding the buffered output lines for the
    /// final flush.
    pub fn into_output(self) -> Vec<String> {
        self.state.output.into_lines()
    }
}
