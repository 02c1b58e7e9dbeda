//! Monkey runtime object model.
//!
//! - [`Object`]: every value a program can produce
//! - [`HashKey`] / [`Hashable`]: the key protocol behind hash literals
//! - [`Environment`]: chained scopes for variable lookup and closures
//! - [`EvalError`]: runtime failures, surfaced to users as error values

mod environment;
mod errors;
mod function;
mod hash;
mod object;

pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use function::{Builtin, BuiltinFn, FunctionObject};
pub use hash::{HashKey, HashObject, HashPair, Hashable};
pub use object::{Object, ObjectKind};
