//! # Map Entry
//!
//! The shared key/value pair stored by both table disciplines. An entry is
//! **immutable** once constructed: updating a key's value replaces the whole
//! entry, it never mutates `key` or `value` in place.
//!
//! Equality and ordering are **delegated to the key**; the value takes no part
//! in comparisons. This is the only contract entries impose beyond what the
//! tables already require of `K`.

use std::cmp::Ordering;
use std::fmt;

/// An immutable key/value pair.
#[derive(Debug, Clone)]
pub struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> MapEntry<K, V> {
    /// Creates an entry from a key and a value.
    pub fn new(key: K, value: V) -> Self {
        MapEntry { key, value }
    }

    /// Returns a reference to the key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the entry, returning the key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for MapEntry<K, V> {}

impl<K: PartialOrd, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapEntry<K, V> {
    /// Renders the entry as `<key,value>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.key, self.value)
    }
}
