//! Native functions available in every program.
//!
//! Builtins are resolved after the environment chain, so a user binding
//! named `len` shadows the builtin. Every builtin checks its argument count
//! and types and reports violations as error values. None of them mutate
//! their arguments.

use monkey_object::{Builtin, EvalError, EvalResult, Object, ObjectKind};

/// The fixed registry.
pub const BUILTINS: &[Builtin] = &[
    Builtin::new("len", len),
    Builtin::new("first", first),
    Builtin::new("last", last),
    Builtin::new("rest", rest),
    Builtin::new("push", push),
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

/// `len(string | array)`: character count or element count.
fn len(args: &[Object]) -> EvalResult {
    EvalError::check_arity(args, 1)?;
    match &args[0] {
        Object::String(s) => Ok(count(s.chars().count())),
        Object::Array(elements) => Ok(count(elements.len())),
        other => Err(unsupported("len", other)),
    }
}

/// `first(array)`: the first element, or `null` when empty.
fn first(args: &[Object]) -> EvalResult {
    EvalError::check_arity(args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::NULL)),
        other => Err(unsupported("first", other)),
    }
}

/// `last(array)`: the last element, or `null` when empty.
fn last(args: &[Object]) -> EvalResult {
    EvalError::check_arity(args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::NULL)),
        other => Err(unsupported("last", other)),
    }
}

/// `rest(array)`: a new array without the first element, or `null` when
/// empty.
fn rest(args: &[Object]) -> EvalResult {
    EvalError::check_arity(args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(match elements.split_first() {
            Some((_, tail)) => Object::array(tail.to_vec()),
            None => Object::NULL,
        }),
        other => Err(unsupported("rest", other)),
    }
}

/// `push(array, value)`: a new array with `value` appended.
fn push(args: &[Object]) -> EvalResult {
    EvalError::check_arity(args, 2)?;
    match &args[0] {
        Object::Array(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend(elements.iter().cloned());
            pushed.push(args[1].clone());
            Ok(Object::array(pushed))
        }
        other => Err(EvalError::WrongFirstArgument {
            builtin: "push",
            expected: ObjectKind::Array,
            got: other.kind(),
        }),
    }
}

fn unsupported(builtin: &'static str, got: &Object) -> EvalError {
    EvalError::UnsupportedArgument {
        builtin,
        got: got.kind(),
    }
}

/// Lengths beyond `i64::MAX` cannot be built in memory; saturate anyway.
fn count(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}
