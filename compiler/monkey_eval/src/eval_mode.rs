//! Evaluation policy.
//!
//! The only policy that differs between modes today is how deep user
//! function calls may nest.

/// How the interpreter treats deep recursion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// No call-depth limit. The native stack grows on demand, so runaway
    /// recursion ends only when memory runs out.
    #[default]
    Interpret,

    /// Calls nested deeper than `max_depth` fail with a stack overflow
    /// error value.
    Bounded { max_depth: usize },
}

impl EvalMode {
    /// Depth used by the command-line driver.
    pub const DEFAULT_MAX_DEPTH: usize = 10_000;

    /// `Bounded` with [`Self::DEFAULT_MAX_DEPTH`].
    pub const fn bounded() -> Self {
        EvalMode::Bounded {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Maximum call depth, `None` for unlimited.
    ///
    /// On wasm the stack cannot grow, so `Interpret` is capped as well.
    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        match self {
            EvalMode::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            EvalMode::Bounded { max_depth } => Some(*max_depth),
        }
    }
}
