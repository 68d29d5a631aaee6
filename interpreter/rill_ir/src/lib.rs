//! Rill IR - shared representation types
//!
//! This crate contains the data structures shared by the Rill pipeline:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The call tree (`Expr`) produced by the parser
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: Strings → Name(u32) for O(1) equality
//! - **Immutable trees**: a parsed `Expr` carries no evaluation state;
//!   the evaluator borrows program state, the tree never stores it

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{Expr, ExprKind};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
