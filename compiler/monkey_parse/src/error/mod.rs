//! Parse error types.
//!
//! Every error carries the span of the token that triggered it. The
//! `Display` form is the bare message; callers that want a location
//! prefix resolve the span against the source themselves.

use monkey_ir::{Span, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The lookahead token was not the one the grammar requires next.
    #[error("expected next token to be {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// No expression can start with this token.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// Integer literal outside the `i64` range.
    #[error("could not parse {0} as integer")]
    InvalidInteger(String),
}

/// A syntax error with its source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    /// Render as `line:col: message` against the source it came from.
    pub fn with_location(&self, source: &str) -> String {
        let (line, col) = self.span.line_col(source);
        format!("{line}:{col}: {}", self.kind)
    }
}
