//! Expression parsing.
//!
//! Pratt loop: a prefix production for the current token builds the left
//! operand, then while the lookahead binds tighter than the caller's
//! precedence the matching infix production folds it into a larger
//! expression. Productions leave `current` on their last token.

use std::rc::Rc;

use monkey_ir::ast::{Expression, FunctionLiteral, Identifier, InfixOperator, PrefixOperator};
use monkey_ir::TokenKind;
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    // Prefix position

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        match self.current.kind {
            TokenKind::Ident => Ok(Expression::identifier(self.current.literal.as_str())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Ok(Expression::StringLiteral(self.current.literal.clone())),
            TokenKind::True => Ok(Expression::BooleanLiteral(true)),
            TokenKind::False => Ok(Expression::BooleanLiteral(false)),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expression::ArrayLiteral(elements))
            }
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => match PrefixOperator::from_token(kind) {
                Some(operator) => self.parse_prefix_expression(operator),
                None => Err(ParseError::new(
                    ParseErrorKind::NoPrefixParseFn(kind),
                    self.current_span(),
                )),
            },
        }
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        self.current
            .literal
            .parse::<i64>()
            .map(Expression::IntegerLiteral)
            .map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidInteger(self.current.literal.clone()),
                    self.current_span(),
                )
            })
    }

    fn parse_prefix_expression(
        &mut self,
        operator: PrefixOperator,
    ) -> Result<Expression, ParseError> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(operator, right))
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if (<cond>) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `fn(<params>) { ... }`
    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();
        Ok(Expression::FunctionLiteral(Rc::new(FunctionLiteral {
            parameters,
            body,
        })))
    }

    /// Comma-separated identifiers, entered on `(` and leaving on `)`.
    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.literal.as_str()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// `{ <key>: <value>, ... }`
    fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::HashLiteral(pairs))
    }

    /// Comma-separated expressions up to `end`, entered on the opening
    /// delimiter and leaving on `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Result<Vec<Expression>, ParseError> {
        let mut list = Vec::new();
        if self.peek_is(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }

    // Infix position

    /// Entered with `current` on the infix token and `left` already built.
    fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
        match self.current.kind {
            TokenKind::LParen => {
                let arguments = self.parse_expression_list(TokenKind::RParen)?;
                Ok(Expression::Call {
                    function: Box::new(left),
                    arguments,
                })
            }
            TokenKind::LBracket => {
                self.next_token();
                let index = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(TokenKind::RBracket)?;
                Ok(Expression::Index {
                    left: Box::new(left),
                    index: Box::new(index),
                })
            }
            kind => {
                let Some(operator) = InfixOperator::from_token(kind) else {
                    return Err(ParseError::new(
                        ParseErrorKind::NoPrefixParseFn(kind),
                        self.current_span(),
                    ));
                };
                let precedence = self.current_precedence();
                self.next_token();
                let right = self.parse_expression(precedence)?;
                Ok(Expression::infix(operator, left, right))
            }
        }
    }
}
