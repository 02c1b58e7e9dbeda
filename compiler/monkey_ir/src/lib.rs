//! Monkey IR - shared syntax types for the interpreter.
//!
//! Holds the types every later phase agrees on:
//! - [`Span`]: byte ranges into the source text
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`ast`]: the parsed program tree

pub mod ast;
mod span;
mod token;

pub use span::Span;
pub use token::{lookup_ident, Token, TokenKind};
