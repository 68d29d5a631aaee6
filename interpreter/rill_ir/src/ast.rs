//! The call tree produced by the parser.
//!
//! One `Expr` represents one parsed expression: a literal, a variable
//! reference, or a function call with ordered arguments. Nodes are
//! immutable after parsing and carry no evaluation state; the evaluator
//! borrows program state separately.

use crate::{Name, Span};
use std::fmt;

/// Call tree node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Call tree node variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Number literal: 42, -3.5
    Number(f64),

    /// String literal (interned)
    Str(Name),

    /// Variable reference, resolved at evaluation time
    Var(Name),

    /// Builtin function call with ordered arguments,
    /// evaluated left-to-right
    Call { callee: Name, args: Vec<Expr> },
}

impl ExprKind {
    /// Human-readable description for error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "a number literal",
            ExprKind::Str(_) => "a string literal",
            ExprKind::Var(_) => "a variable reference",
            ExprKind::Call { .. } => "a function call",
        }
    }
}
