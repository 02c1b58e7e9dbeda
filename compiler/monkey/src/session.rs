//! Persistent evaluation state for the REPL.

use monkey_eval::{EvalMode, Interpreter};
use monkey_object::{Environment, Object};
use monkey_parse::ParseError;

/// One global environment plus the interpreter that evaluates into it.
///
/// Bindings made by one input are visible to the next.
#[derive(Debug)]
pub struct Session {
    env: Environment,
    interpreter: Interpreter,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(EvalMode::bounded())
    }
}

impl Session {
    pub fn new(mode: EvalMode) -> Self {
        Session {
            env: Environment::new(),
            interpreter: Interpreter::builder().mode(mode).build(),
        }
    }

    /// Parse and evaluate one input. Nothing is evaluated, and the
    /// environment is untouched, when the input has syntax errors.
    pub fn eval(&mut self, source: &str) -> Result<Object, Vec<ParseError>> {
        let output = monkey_parse::parse(source);
        if output.has_errors() {
            return Err(output.errors);
        }
        Ok(self.interpreter.eval(&output.program, &self.env))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn mode(&self) -> EvalMode {
        self.interpreter.mode()
    }
}
