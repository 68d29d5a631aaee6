//! Lexer for Rill using logos with string interning.
//!
//! One source line in, one `TokenList` out. The token set is small:
//! parentheses, number literals, quoted strings, and atoms. Quoted
//! strings take no escape processing beyond matching the closing quote,
//! so embedded spaces and parentheses are not delimiters.

use logos::Logos;
use rill_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace between tokens
enum RawToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Number literal: sign?, digits, optional `.` digits. Priority beats
    // the atom rule on equal-length matches, so `3.5` is a number while
    // `3.5x` falls through to Atom and becomes a variable reference.
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok(), priority = 3)]
    Number(f64),

    // String literal: no escape processing, closed by the next `"`.
    #[regex(r#""[^"]*""#)]
    String,

    // Atom: any other run of non-whitespace, non-paren, non-quote bytes.
    #[regex(r#"[^\s()"]+"#)]
    Atom,
}

/// Lex one source line into a `TokenList`.
///
/// Never fails: unlexable input (an unterminated quote) becomes a
/// `TokenKind::Error` token for the parser to report, and the list is
/// always terminated by `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw, slice, interner);
                result.push(Token::new(kind, span));
            }
            Err(()) => {
                result.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    // Add EOF token
    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source line exceeds {} bytes", u32::MAX));
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(interner.intern(content))
        }
        RawToken::Atom => TokenKind::Ident(interner.intern(slice)),
    }
}
