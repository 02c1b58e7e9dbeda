//! Pratt parser for Monkey.
//!
//! The parser pulls tokens from a [`Lexer`] keeping one token of lookahead
//! and builds a [`Program`]. Syntax errors do not stop parsing: a failed
//! statement is recorded and skipped so one pass reports as many errors as
//! possible. A program with errors must not be evaluated.

mod error;
mod grammar;
mod precedence;

pub use error::{ParseError, ParseErrorKind};
pub use precedence::Precedence;

use monkey_ir::ast::Program;
use monkey_ir::{Span, Token, TokenKind};
use monkey_lexer::Lexer;
use tracing::{debug, trace};

/// Result of parsing a whole source text.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse `source` into a program plus any syntax errors.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.errors,
    }
}

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime `current` and `peek`.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse statements until EOF.
    ///
    /// A statement that fails to parse is dropped, its error recorded, and
    /// parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();
        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => program.statements.push(stmt),
                Err(err) => self.record(err),
            }
            self.next_token();
        }
        program
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Error messages as plain strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn record(&mut self, err: ParseError) {
        debug!(error = %err, span = %err.span, "parse error");
        self.errors.push(err);
    }

    // Token navigation

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(token = ?self.current, "advance");
    }

    #[inline]
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.current.span
    }

    /// Advance if the lookahead is `kind`, otherwise fail without moving.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                kind,
                self.peek.kind,
                self.peek.span,
            ))
        }
    }

    /// Skip an optional trailing `;`.
    fn eat_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}

#[cfg(test)]
mod tests;
