//! Tree-walking evaluator for Monkey.
//!
//! Evaluates the AST from `monkey_ir` directly against an [`Environment`]:
//!
//! ```text
//! let output = monkey_parse::parse(source);
//! let env = Environment::new();
//! let value = monkey_eval::eval(&output.program, &env);
//! println!("{value}");
//! ```
//!
//! Runtime failures never panic. They surface as [`Object::Error`] values
//! whose message is the error's `Display` form.

pub mod builtins;
mod eval_mode;
mod interpreter;
pub mod operators;

pub use eval_mode::EvalMode;
pub use interpreter::{CallStack, Interpreter, InterpreterBuilder};

use monkey_ir::ast::Node;
use monkey_object::{Environment, Object};

/// Evaluate `node` with a fresh [`Interpreter`] in [`EvalMode::Interpret`].
pub fn eval<'a>(node: impl Into<Node<'a>>, env: &Environment) -> Object {
    Interpreter::new().eval(node, env)
}

#[cfg(test)]
mod tests;
