//! Callable values: user closures and native builtins.

use std::fmt;
use std::rc::Rc;

use monkey_ir::ast::{BlockStatement, FunctionLiteral, Identifier};

use crate::{Environment, EvalResult, Object};

/// A closure: the function's syntax plus the environment it was defined in.
///
/// The literal is shared with the syntax tree, so creating a closure in a
/// loop or recursive call does not copy the body.
#[derive(Clone, Debug)]
pub struct FunctionObject {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionObject {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionObject { literal, env }
    }

    #[inline]
    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    #[inline]
    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }
}

impl fmt::Display for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fn({}) {{ {} }}",
            self.literal.parameter_list(),
            self.literal.body
        )
    }
}

/// Signature shared by every native function.
pub type BuiltinFn = fn(&[Object]) -> EvalResult;

/// A native function exposed under a fixed name.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn call(&self, args: &[Object]) -> EvalResult {
        (self.func)(args)
    }
}

/// Names are unique within the registry, so they identify the builtin.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
