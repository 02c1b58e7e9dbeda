//! Call depth accounting for user function calls.

use monkey_object::EvalError;
use tracing::debug;

/// Tracks how many user function calls are active.
#[derive(Clone, Debug)]
pub struct CallStack {
    depth: usize,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            depth: 0,
            max_depth,
        }
    }

    /// Enter a call. On overflow the depth is left unchanged.
    pub fn push(&mut self) -> Result<(), EvalError> {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                debug!(limit, "call depth exceeded");
                return Err(EvalError::StackOverflow { limit });
            }
        }
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(self.depth > 0, "CallStack::pop() on empty stack");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Forget all active frames, e.g. after a top-level evaluation ends.
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}
