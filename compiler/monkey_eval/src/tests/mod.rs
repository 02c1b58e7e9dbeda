//! Evaluator tests, driven from source text.
//!
//! - `expressions`: literals, operators and conditionals
//! - `statements`: `let`, `return` and block results
//! - `functions`: closures, recursion and arity
//! - `collections`: arrays, hashes and builtins
//! - `errors`: error values and short-circuiting

mod statements;

use monkey_object::{Environment, Object};

use crate::{eval, Interpreter};

/// Parse `source`, failing the test on syntax errors.
pub(crate) fn parse_ok(source: &str) -> monkey_ir::ast::Program {
    let output = monkey_parse::parse(source);
    assert!(
        output.errors.is_empty(),
        "unexpected parse errors for {source:?}: {:?}",
        output.errors
    );
    output.program
}

/// Evaluate `source` in a fresh environment.
fn run(source: &str) -> Object {
    eval(&parse_ok(source), &Environment::new())
}

/// Evaluate `source` with a configured interpreter.
pub(crate) fn run_with(interpreter: &mut Interpreter, source: &str) -> Object {
    interpreter.eval(&parse_ok(source), &Environment::new())
}

/// The message of an error value, or a description of what came back.
pub(crate) fn error_message(object: &Object) -> String {
    match object {
        Object::Error(err) => err.to_string(),
        other => format!("no error object returned, got {other}"),
    }
}
