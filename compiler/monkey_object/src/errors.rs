//! Runtime errors.
//!
//! Evaluation propagates these through `EvalResult` with `?`. At the public
//! boundary an error becomes an [`Object::Error`](crate::Object::Error)
//! value, so the `Display` text here is exactly what users see after the
//! `ERROR: ` prefix.

use monkey_ir::ast::{InfixOperator, PrefixOperator};

use crate::{Object, ObjectKind};

/// Result of evaluating a node.
pub type EvalResult = Result<Object, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    // Operators
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectKind,
        operator: InfixOperator,
        right: ObjectKind,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectKind,
        operator: InfixOperator,
        right: ObjectKind,
    },

    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        right: ObjectKind,
    },

    #[error("division by zero")]
    DivisionByZero,

    // Names and calls
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    #[error("not a function: {0}")]
    NotAFunction(ObjectKind),

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },

    #[error("stack overflow: call depth exceeded {limit}")]
    StackOverflow { limit: usize },

    // Collections
    #[error("unusable as hash key: {0}")]
    UnusableAsHashKey(ObjectKind),

    #[error("index operator not supported: {0}")]
    IndexNotSupported(ObjectKind),

    // Builtins
    #[error("argument to '{builtin}' not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectKind,
    },

    #[error("first argument to '{builtin}' must be {expected}, got {got}")]
    WrongFirstArgument {
        builtin: &'static str,
        expected: ObjectKind,
        got: ObjectKind,
    },
}

impl EvalError {
    pub fn type_mismatch(left: &Object, operator: InfixOperator, right: &Object) -> Self {
        EvalError::TypeMismatch {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
    }

    pub fn unknown_infix(left: &Object, operator: InfixOperator, right: &Object) -> Self {
        EvalError::UnknownInfixOperator {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
    }

    pub fn unknown_prefix(operator: PrefixOperator, right: &Object) -> Self {
        EvalError::UnknownPrefixOperator {
            operator,
            right: right.kind(),
        }
    }

    /// Fail unless exactly `want` arguments were passed.
    pub fn check_arity(args: &[Object], want: usize) -> Result<(), EvalError> {
        if args.len() == want {
            Ok(())
        } else {
            Err(EvalError::WrongArgumentCount {
                got: args.len(),
                want,
            })
        }
    }
}
