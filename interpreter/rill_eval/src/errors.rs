//! Error types for evaluation.
//!
//! `EvalErrorKind` gives each failure a typed category so callers match
//! on the kind instead of parsing message strings. Factory functions
//! populate both `kind` and `message`.

use crate::builtins::{Arity, Builtin};
use rill_ir::Span;
use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Variable reference to an unbound name.
    UndefinedVariable { name: String },
    /// Callee does not name a builtin.
    UnknownFunction { name: String },
    /// Argument count violates the builtin's declared arity.
    ArityMismatch {
        name: &'static str,
        expected: Arity,
        got: usize,
    },
    /// Argument value (or `set` target) has the wrong type.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UnknownFunction { name } => write!(f, "unknown function: {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let (least, n) = match expected {
                    Arity::Exactly(n) => ("", *n),
                    Arity::AtLeast(n) => ("at least ", *n),
                };
                let arg_word = if n == 1 { "argument" } else { "arguments" };
                write!(f, "{name} expects {least}{n} {arg_word}, got {got}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
    /// Source location of the failing expression, when known.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach the failing expression's span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Variable reference to an unbound name.
pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable { name: name.into() })
}

/// Callee does not name a builtin.
pub fn unknown_function(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction { name: name.into() })
}

/// Argument count violates the builtin's declared arity.
pub fn arity_mismatch(builtin: Builtin, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: builtin.name(),
        expected: builtin.arity(),
        got,
    })
}

/// Argument value (or `set` target) has the wrong type.
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}
