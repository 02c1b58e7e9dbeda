//! Stack growth for deeply nested Monkey programs.
//!
//! The parser and the evaluator both recurse once per nesting level of the
//! input. A source like `((((...1...))))` or a deeply recursive Monkey
//! function would otherwise exhaust the native thread stack long before
//! the evaluator's own call-depth limit kicks in.
//!
//! Recursive entry points wrap their body in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn parse_expression(&mut self, prec: Precedence) -> Result<Expression, ParseError> {
//!     ensure_sufficient_stack(|| self.parse_expression_inner(prec))
//! }
//! ```
//!
//! On wasm the closure runs directly.

/// Grow when fewer than this many bytes of stack remain.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
