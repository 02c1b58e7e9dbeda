//! Hash keys and the hash object.
//!
//! Only integers, booleans and strings can key a hash. Each reduces to a
//! [`HashKey`] of its type tag plus a 64-bit digest, so two independently
//! built `"abc"` strings land on the same entry. String digests come from
//! `FxHasher`; distinct strings with colliding digests would share a slot.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHasher};

use crate::{EvalError, Object, ObjectKind};

/// Identity of a hash entry: type tag plus digest of the value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashKey {
    pub kind: ObjectKind,
    pub value: u64,
}

/// Values usable as hash keys.
pub trait Hashable {
    fn hash_key(&self) -> HashKey;
}

impl Hashable for i64 {
    fn hash_key(&self) -> HashKey {
        HashKey {
            kind: ObjectKind::Integer,
            value: u64::from_ne_bytes(self.to_ne_bytes()),
        }
    }
}

impl Hashable for bool {
    fn hash_key(&self) -> HashKey {
        HashKey {
            kind: ObjectKind::Boolean,
            value: u64::from(*self),
        }
    }
}

impl Hashable for str {
    fn hash_key(&self) -> HashKey {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        HashKey {
            kind: ObjectKind::String,
            value: hasher.finish(),
        }
    }
}

impl Hashable for Rc<str> {
    fn hash_key(&self) -> HashKey {
        (**self).hash_key()
    }
}

impl Object {
    /// The hashable view of this object, if it has one.
    pub fn hashable(&self) -> Option<&dyn Hashable> {
        match self {
            Object::Integer(n) => Some(n),
            Object::Boolean(b) => Some(b),
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn hash_key(&self) -> Result<HashKey, EvalError> {
        self.hashable()
            .map(Hashable::hash_key)
            .ok_or_else(|| EvalError::UnusableAsHashKey(self.kind()))
    }
}

/// An entry of a hash: the original key object and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Insertion-ordered map from hashable objects to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashObject {
    pairs: Vec<HashPair>,
    index: FxHashMap<HashKey, usize>,
}

impl HashObject {
    pub fn new() -> Self {
        HashObject::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HashObject {
            pairs: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert or overwrite. An existing key keeps its position; only the
    /// value changes.
    pub fn insert(&mut self, key: Object, value: Object) -> Result<(), EvalError> {
        let hash_key = key.hash_key()?;
        match self.index.get(&hash_key) {
            Some(&slot) => self.pairs[slot].value = value,
            None => {
                self.index.insert(hash_key, self.pairs.len());
                self.pairs.push(HashPair { key, value });
            }
        }
        Ok(())
    }

    /// Look up by key object. Fails only if `key` is not hashable.
    pub fn get(&self, key: &Object) -> Result<Option<&Object>, EvalError> {
        let hash_key = key.hash_key()?;
        Ok(self.get_pair(hash_key).map(|pair| &pair.value))
    }

    pub fn get_pair(&self, key: HashKey) -> Option<&HashPair> {
        self.index.get(&key).map(|&slot| &self.pairs[slot])
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, HashPair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a HashObject {
    type Item = &'a HashPair;
    type IntoIter = std::slice::Iter<'a, HashPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str(" }")
    }
}
