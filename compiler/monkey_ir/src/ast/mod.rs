//! Abstract syntax tree.
//!
//! Every node renders back to a canonical, fully parenthesized form via
//! `Display`; parser tests compare against that rendering.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expression, FunctionLiteral, Identifier};
pub use operators::{InfixOperator, PrefixOperator};
pub use stmt::{BlockStatement, Program, Statement};

use std::fmt;

/// Any evaluable node.
///
/// The evaluator dispatches on this to accept a whole program, a single
/// statement or a bare expression.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(p) => write!(f, "{p}"),
            Node::Statement(s) => write!(f, "{s}"),
            Node::Expression(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests;
