//! Lexically scoped variable bindings.
//!
//! An [`Environment`] is a shared handle to one scope. Scopes form a chain
//! through their `outer` link: a function call gets a fresh scope whose
//! outer scope is the one the function was *defined* in, which is what
//! makes closures see their free variables after the defining call has
//! returned.
//!
//! The outer link is a strong `Rc`. A closure keeps its whole defining
//! chain alive for as long as the closure is reachable. A closure stored in
//! its own defining scope forms a cycle that is never freed; memory is
//! reclaimed only by reference counting.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Object;

/// One scope: its own bindings plus the enclosing scope.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<String, Object>,
    outer: Option<Environment>,
}

/// Shared, mutable handle to a scope. Cloning shares the scope.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create an empty top-level scope.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an empty scope enclosed by `self`.
    pub fn new_enclosed(&self) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(self.clone()),
        })))
    }

    /// Look `name` up here, then in each enclosing scope in turn.
    pub fn get(&self, name: &str) -> Option<Object> {
        let mut current = Some(self.clone());
        while let Some(env) = current {
            let scope = env.0.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            current = scope.outer.clone();
        }
        None
    }

    /// Bind `name` in this scope, shadowing any outer binding, and return
    /// the value.
    pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
        self.0.borrow_mut().bindings.insert(name.into(), value.clone());
        value
    }

    /// Whether `name` is bound in this scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Names bound in this scope itself, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Prints binding names only; values may hold closures over this very
/// scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.local_names())
            .field("has_outer", &self.0.borrow().outer.is_some())
            .finish()
    }
}
