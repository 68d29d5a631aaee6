//! Recursive descent parser for Rill.
//!
//! One source line is one statement, and a statement must be a function
//! call: `(identifier expr*)`. Literals and variable references are only
//! valid in argument position. The parser consumes a `TokenList` from
//! `rill_lexer` and produces the call tree (`rill_ir::Expr`).

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use rill_ir::{Expr, ExprKind, StringInterner, TokenKind, TokenList};
use tracing::trace;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    /// Parse one statement: a single top-level call spanning the whole line.
    ///
    /// A bare literal or variable at top level, trailing tokens after the
    /// outermost `)`, and an empty line are all syntax errors.
    pub fn parse_statement(mut self) -> Result<Expr, ParseError> {
        if self.cursor.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyLine,
                self.cursor.current_span(),
            ));
        }

        let expr = match self.cursor.current_kind() {
            TokenKind::LParen => self.parse_call()?,
            TokenKind::Error => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidToken,
                    self.cursor.current_span(),
                ));
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedCall {
                        found: other.describe(),
                    },
                    self.cursor.current_span(),
                ));
            }
        };

        if !self.cursor.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingTokens {
                    found: self.cursor.current_kind().describe(),
                },
                self.cursor.current_span(),
            ));
        }

        Ok(expr)
    }

    /// Parse a call: `(` identifier expr* `)`.
    /// The cursor must be at the opening `(`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.current_span();
        self.cursor.advance();

        let callee = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                name
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedCallee {
                        found: other.describe(),
                    },
                    self.cursor.current_span(),
                ));
            }
        };
        trace!(callee = self.cursor.interner().lookup(callee), "parse call");

        let mut args = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RParen => {
                    let close = self.cursor.current_span();
                    self.cursor.advance();
                    return Ok(Expr::new(
                        ExprKind::Call { callee, args },
                        open.merge(close),
                    ));
                }
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnclosedCall,
                        self.cursor.current_span(),
                    ));
                }
                _ => args.push(self.parse_expr()?),
            }
        }
    }

    /// Parse one expression in argument position.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let token = *self.cursor.current();
        match token.kind {
            TokenKind::Number(n) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Number(n), token.span))
            }
            TokenKind::Str(name) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Str(name), token.span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Var(name), token.span))
            }
            TokenKind::LParen => self.parse_call(),
            TokenKind::Error => Err(ParseError::new(ParseErrorKind::InvalidToken, token.span)),
            TokenKind::RParen | TokenKind::Eof => Err(ParseError::new(
                ParseErrorKind::ExpectedExpr {
                    found: token.kind.describe(),
                },
                token.span,
            )),
        }
    }
}

/// Parse one pre-lexed line into a call tree.
pub fn parse_line(tokens: &TokenList, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(tokens, interner).parse_statement()
}

/// Lex and parse one source line.
pub fn parse_source(line: &str, interner: &StringInterner) -> Result<Expr, ParseError> {
    let tokens = rill_lexer::lex(line, interner);
    parse_line(&tokens, interner)
}
