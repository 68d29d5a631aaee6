//! Token cursor for navigating the token stream.

use rill_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends with `Eof` (guaranteed by the lexer),
/// so the cursor position is always valid and `current()` always reads
/// a token. `advance()` never moves past `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            matches!(tokens.get(tokens.len().wrapping_sub(1)).map(|t| t.kind), Some(TokenKind::Eof)),
            "token list must be terminated by Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advance to the next token, stopping at `Eof`.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }
}
