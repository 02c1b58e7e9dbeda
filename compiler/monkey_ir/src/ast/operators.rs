//! Prefix and infix operators.

use std::fmt;

use crate::TokenKind;

/// Infix (binary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOperator {
    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperator {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in rendering and in runtime error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Map an operator token to its infix operator.
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Asterisk => Some(Self::Asterisk),
            TokenKind::Slash => Some(Self::Slash),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Eq => Some(Self::Eq),
            TokenKind::NotEq => Some(Self::NotEq),
            _ => None,
        }
    }
}

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOperator {
    /// Logical negation `!`.
    Bang,
    /// Integer negation `-`.
    Minus,
}

impl PrefixOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Minus => "-",
        }
    }

    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Bang),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
