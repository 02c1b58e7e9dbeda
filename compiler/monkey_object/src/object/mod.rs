//! Runtime values.
//!
//! `Object` is a closed sum type; every evaluator branch matches on it
//! exhaustively. Compound payloads sit behind `Rc` so cloning a value is
//! cheap and never deep-copies a collection.
//!
//! # Booleans and null
//!
//! `true`, `false` and `null` are the constants [`Object::TRUE`],
//! [`Object::FALSE`] and [`Object::NULL`]. Code producing a boolean goes
//! through [`Object::from_bool`]. These variants carry no identity, so
//! comparing them by value is the same as comparing the canonical
//! instances.

use std::fmt;
use std::rc::Rc;

use crate::errors::EvalError;
use crate::function::{Builtin, FunctionObject};
use crate::hash::HashObject;

#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,

    /// Marks a value produced by `return` while it unwinds to the nearest
    /// function call or the program root. Never visible to user code.
    ReturnValue(Box<Object>),

    /// A runtime error carried as a value.
    Error(EvalError),

    Array(Rc<Vec<Object>>),
    Hash(Rc<HashObject>),
    Function(Rc<FunctionObject>),
    Builtin(Builtin),
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);
    pub const NULL: Object = Object::Null;

    #[inline]
    pub const fn from_bool(value: bool) -> Object {
        if value {
            Object::TRUE
        } else {
            Object::FALSE
        }
    }

    pub fn string(value: impl Into<Rc<str>>) -> Object {
        Object::String(value.into())
    }

    pub fn array(elements: Vec<Object>) -> Object {
        Object::Array(Rc::new(elements))
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::String(_) => ObjectKind::String,
            Object::Null => ObjectKind::Null,
            Object::ReturnValue(_) => ObjectKind::ReturnValue,
            Object::Error(_) => ObjectKind::Error,
            Object::Array(_) => ObjectKind::Array,
            Object::Hash(_) => ObjectKind::Hash,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
        }
    }

    /// Everything except `null` and `false` is truthy, including `0`.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Strip a return marker, if present.
    pub fn unwrap_return(self) -> Object {
        match self {
            Object::ReturnValue(inner) => *inner,
            other => other,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b) || a == b,
            (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b) || a == b,
            // Closures are equal only to themselves.
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::from_bool(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}

impl From<EvalError> for Object {
    fn from(err: EvalError) -> Self {
        Object::Error(err)
    }
}

/// Renders the user-facing form printed by the REPL.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::String(s) => f.write_str(s),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(inner) => write!(f, "{inner}"),
            Object::Error(err) => write!(f, "ERROR: {err}"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
            Object::Function(function) => write!(f, "{function}"),
            Object::Builtin(_) => f.write_str("builtin function"),
        }
    }
}

/// Type tag of an object, spelled the way error messages print it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectKind {
    Integer,
    Boolean,
    String,
    Null,
    ReturnValue,
    Error,
    Array,
    Hash,
    Function,
    Builtin,
}

impl ObjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::String => "STRING",
            ObjectKind::Null => "NULL",
            ObjectKind::ReturnValue => "RETURN_VALUE",
            ObjectKind::Error => "ERROR",
            ObjectKind::Array => "ARRAY",
            ObjectKind::Hash => "HASH",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Builtin => "BUILTIN",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
