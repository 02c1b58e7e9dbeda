//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{CallStack, Interpreter};
use crate::eval_mode::EvalMode;

/// Builder for [`Interpreter`].
///
/// The default mode is [`EvalMode::Interpret`]; the command-line driver
/// selects [`EvalMode::Bounded`].
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(EvalMode::Bounded { max_depth })`.
    #[must_use]
    pub fn max_depth(self, max_depth: usize) -> Self {
        self.mode(EvalMode::Bounded { max_depth })
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            call_stack: CallStack::new(self.mode.max_call_depth()),
            mode: self.mode,
        }
    }
}
