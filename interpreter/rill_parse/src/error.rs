//! Parse error types.
//!
//! A `ParseError` means the line is malformed and the whole run aborts.
//! Kinds are structured so callers can match on the failure mode
//! instead of parsing message strings.

use rill_ir::Span;
use std::fmt;

/// Typed syntax error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line contains no tokens.
    EmptyLine,
    /// The top-level statement is not a function call.
    ExpectedCall { found: &'static str },
    /// `(` was not followed by a function identifier.
    ExpectedCallee { found: &'static str },
    /// An argument position holds something that is not an expression.
    ExpectedExpr { found: &'static str },
    /// End of line before the matching `)`.
    UnclosedCall,
    /// Tokens remain after the outermost call's closing `)`.
    TrailingTokens { found: &'static str },
    /// The lexer could not tokenize the input (an unterminated quote).
    InvalidToken,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty line; each line must be a function call"),
            Self::ExpectedCall { found } => {
                write!(f, "expected a function call, found {found}")
            }
            Self::ExpectedCallee { found } => {
                write!(f, "expected a function identifier after `(`, found {found}")
            }
            Self::ExpectedExpr { found } => {
                write!(f, "expected an expression, found {found}")
            }
            Self::UnclosedCall => write!(f, "unclosed call: missing `)`"),
            Self::TrailingTokens { found } => {
                write!(f, "unexpected {found} after the closing `)`")
            }
            Self::InvalidToken => write!(f, "unterminated string literal"),
        }
    }
}

/// Syntax error with the offending token's span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// Create an error from a kind and the offending span.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error: {}", self.kind)
    }
}

impl std::error::Error for ParseError {}
