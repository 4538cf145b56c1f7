//! # Separate Chaining (Closed-Bucket) Hash Table
//!
//! A fixed-capacity hash table resolving collisions by **separate chaining**:
//! every bucket owns a sequence of the entries hashing to it. Supports:
//! - **Generic** key-value pairs (`K: Hash + Eq`, `V` arbitrary).
//! - **Insert** (replace on duplicate key), **search** by key, **delete** by
//!   key, all without a failure mode: chains grow unboundedly, so insertion
//!   always succeeds no matter how undersized the bucket count is.
//! - **Configurable** hasher via `BuildHasher`; the default is the crate's
//!   deterministic [`FnvBuildHasher`].
//!
//! The bucket count is fixed at construction and the table never resizes or
//! rehashes. That is a documented design constraint, not an omission: sizing
//! is the caller's job (conventionally at least twice the expected number of
//! records, keeping the load factor at or below 0.5).
//!
//! Within a bucket, a fresh insert places the new entry at the **front**,
//! while replacing an existing key keeps the entry in its current position.
//! Iteration follows bucket order and, within a bucket, that list order;
//! nothing further is guaranteed.
//!
//! ## Example
//! ```rust
//! use hashtab::ChainedTable;
//!
//! let mut table = ChainedTable::with_capacity(11);
//! table.insert("ASPIRIN", 120);
//! table.insert("IBUPROM", 80);
//! assert_eq!(table.get(&"ASPIRIN"), Some(&120));
//! table.delete(&"ASPIRIN");
//! assert_eq!(table.get(&"ASPIRIN"), None);
//! assert_eq!(table.get(&"IBUPROM"), Some(&80));
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

use crate::entry::MapEntry;
use crate::fnv::FnvBuildHasher;

/// A bucket is an owned sequence of the entries hashing to it.
type Bucket<K, V> = Vec<MapEntry<K, V>>;

/// A closed-bucket hash table with a fixed bucket count.
#[derive(Debug, Clone)]
pub struct ChainedTable<K, V, S = FnvBuildHasher> {
    buckets: Vec<Bucket<K, V>>,
    /// Number of live entries across all buckets.
    len: usize,
    build_hasher: S,
}

impl<K: Hash + Eq, V> ChainedTable<K, V> {
    /// Creates an empty table with `capacity` buckets and the default
    /// deterministic hasher. A capacity of zero is clamped to one bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_hasher(capacity, FnvBuildHasher)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedTable<K, V, S> {
    /// Creates an empty table with `capacity` buckets and a caller-supplied
    /// hasher. A capacity of zero is clamped to one bucket.
    pub fn with_hasher(capacity: usize, build_hasher: S) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        ChainedTable {
            buckets,
            len: 0,
            build_hasher,
        }
    }

    /// Returns the fixed bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Finds the entry whose key equals `key`, scanning its bucket
    /// front-to-back. Keys are compared for equality, never just by hash.
    /// No side effects.
    pub fn search(&self, key: &K) -> Option<&MapEntry<K, V>> {
        let b = self.bucket_index(key);
        self.buckets[b].iter().find(|entry| entry.key() == key)
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(MapEntry::value)
    }

    /// Inserts `<key, value>`. If the key is already present its entry is
    /// replaced **in its current list position** and the old value is
    /// returned; otherwise a new entry is prepended to the front of the
    /// bucket and `None` is returned. Never fails: chains grow as needed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let b = self.bucket_index(&key);
        let bucket = &mut self.buckets[b];

        if let Some(slot) = bucket.iter_mut().find(|entry| *entry.key() == key) {
            let old = mem::replace(slot, MapEntry::new(key, value));
            return Some(old.into_value());
        }

        bucket.insert(0, MapEntry::new(key, value));
        self.len += 1;
        None
    }

    /// Deletes the entry whose key equals `key`, returning its value. The
    /// rest of the bucket keeps its order. A no-op if the key is absent, so
    /// repeated deletes are harmless.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let b = self.bucket_index(key);
        let bucket = &mut self.buckets[b];
        let pos = bucket.iter().position(|entry| entry.key() == key)?;
        let entry = bucket.remove(pos);
        self.len -= 1;
        Some(entry.into_value())
    }

    /// Iterates over all entries in bucket order; within a bucket, list
    /// order. No other order is guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Translates a key to an index in `[0, capacity)`: the raw 64-bit hash
    /// is capacity-independent, then reduced modulo the bucket count.
    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ChainedTable<K, V, S> {
    /// Dumps every bucket as `i:<k,v> <k,v> ...`, one line per bucket.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{}:", i)?;
            for entry in bucket {
                write!(f, "{} ", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
