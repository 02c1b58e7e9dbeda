//! Statement parsing.
//!
//! Each production starts with `current` on the statement's first token
//! and leaves `current` on its last token (the `;` when present).

use monkey_ir::ast::{BlockStatement, Identifier, Statement};
use monkey_ir::TokenKind;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.as_str());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_semicolon();
        Ok(Statement::Let { name, value })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_semicolon();
        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.eat_semicolon();
        Ok(Statement::Expression(expression))
    }

    /// `{ <statements> }`, entered with `current` on `{`.
    ///
    /// Errors inside the block are recorded and the failing statement is
    /// skipped, the same recovery the top-level loop uses. Reaching EOF
    /// before `}` ends the block.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => block.statements.push(stmt),
                Err(err) => self.record(err),
            }
            self.next_token();
        }
        block
    }
}
