//! # Linear-Probing (Open-Bucket) Hash Table
//!
//! A fixed-capacity hash table resolving collisions by **open addressing**
//! with linear probing and **tombstone** deletion. Supports:
//! - **Generic** key-value pairs (`K: Hash + Eq`, `V` arbitrary).
//! - **Insert** (replace on duplicate key, [`TableError::TableFull`] when
//!   every slot has been probed without finding room), **search** by key
//!   returning the slot index, **delete** by key.
//! - **Configurable** hasher via `BuildHasher`; the default is the crate's
//!   deterministic [`FnvBuildHasher`].
//!
//! Every slot is a three-state tagged variant rather than a nullable entry:
//! `Empty` (never used), `Tombstone` (used then vacated), or `Occupied`.
//! The distinction is load-bearing. A search may stop at an `Empty` slot,
//! because no probe sequence ever crossed it; it must skip a `Tombstone`,
//! because the probe chain of a live key may pass through it. Deletion
//! therefore writes a `Tombstone`, never `Empty`, and `Empty` is entered only
//! at construction.
//!
//! The capacity is fixed at construction and the table never resizes or
//! rehashes. Once every slot has been written at least once the table is
//! *saturated*: probe walks no longer terminate early at an `Empty` slot, so
//! every operation is capped at `capacity` probes, and an insert of a new key
//! can fail with [`TableError::TableFull`] when no tombstone is reusable.
//! Callers size the table up front, conventionally at least twice the
//! expected number of records.
//!
//! ## Example
//! ```rust
//! use hashtab::ProbingTable;
//!
//! let mut table = ProbingTable::with_capacity(7);
//! table.insert("report.txt", "/home/docs").unwrap();
//! let slot = table.search(&"report.txt").unwrap();
//! assert_eq!(table.entry(slot).map(|e| *e.value()), Some("/home/docs"));
//! table.delete(&"report.txt");
//! assert_eq!(table.search(&"report.txt"), None);
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

use log::warn;

use crate::entry::MapEntry;
use crate::error::{Result, TableError};
use crate::fnv::FnvBuildHasher;

/// The three states a slot can be in. `Empty` marks a slot never written;
/// `Tombstone` marks one that held an entry deleted since. Probe walks stop
/// at `Empty` but pass over `Tombstone`.
#[derive(Debug, Clone)]
pub enum Slot<K, V> {
    /// Never occupied.
    Empty,
    /// Formerly occupied by an entry that has been deleted.
    Tombstone,
    /// Holds a live entry.
    Occupied(MapEntry<K, V>),
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

/// An open-bucket hash table with linear probing and a fixed slot count.
#[derive(Debug, Clone)]
pub struct ProbingTable<K, V, S = FnvBuildHasher> {
    slots: Vec<Slot<K, V>>,
    /// Count of slots ever written (Occupied or Tombstone). Never decreases;
    /// used only to flag saturation, not to track live entries.
    occupancy: usize,
    build_hasher: S,
}

impl<K: Hash + Eq, V> ProbingTable<K, V> {
    /// Creates an empty table with `capacity` slots and the default
    /// deterministic hasher. A capacity of zero is clamped to one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_hasher(capacity, FnvBuildHasher)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ProbingTable<K, V, S> {
    /// Creates an empty table with `capacity` slots and a caller-supplied
    /// hasher. A capacity of zero is clamped to one slot.
    pub fn with_hasher(capacity: usize, build_hasher: S) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);
        ProbingTable {
            slots,
            occupancy: 0,
            build_hasher,
        }
    }

    /// Returns the fixed slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots ever written (Occupied plus Tombstone).
    /// Deletion does not decrease this.
    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    /// Returns true once every slot has been written at least once. From
    /// then on probe walks never terminate early at an Empty slot.
    pub fn is_saturated(&self) -> bool {
        self.occupancy == self.capacity()
    }

    /// Finds the index of the slot occupied by an entry whose key equals
    /// `key`. Probes from the key's home slot, skipping tombstones and
    /// non-matching occupants, stopping at an Empty slot or after a full
    /// cycle of `capacity` probes. No side effects.
    pub fn search(&self, key: &K) -> Option<usize> {
        let mut b = self.home_index(key);
        for _ in 0..self.capacity() {
            match &self.slots[b] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.key() == key => return Some(b),
                _ => b = (b + 1) % self.capacity(),
            }
        }
        None
    }

    /// Returns the entry in slot `index`, if that slot is occupied. Pairs
    /// with [`search`](Self::search) for callers that keep the index around.
    pub fn entry(&self, index: usize) -> Option<&MapEntry<K, V>> {
        match self.slots.get(index)? {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        let b = self.search(key)?;
        self.entry(b).map(MapEntry::value)
    }

    /// Inserts `<key, value>` along the key's probe walk:
    /// - an `Empty` slot takes the entry and raises `occupancy` (first use
    ///   of that slot);
    /// - a `Tombstone` slot is reclaimed immediately, `occupancy` unchanged
    ///   (the slot was counted when first occupied);
    /// - an `Occupied` slot with an equal key has its entry replaced, and
    ///   the old value is returned.
    ///
    /// If `capacity` probes are exhausted without placement the insert is
    /// dropped and [`TableError::TableFull`] is returned; the table is left
    /// exactly as it was. When the last never-written slot is first used, a
    /// warning is logged: every insert from then on risks `TableFull`.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut b = self.home_index(&key);
        for _ in 0..self.capacity() {
            match &mut self.slots[b] {
                Slot::Empty => {
                    self.occupancy += 1;
                    if self.is_saturated() {
                        warn!(
                            "probing table saturated: all {} slots have been written",
                            self.capacity()
                        );
                    }
                    self.slots[b] = Slot::Occupied(MapEntry::new(key, value));
                    return Ok(None);
                }
                Slot::Tombstone => {
                    self.slots[b] = Slot::Occupied(MapEntry::new(key, value));
                    return Ok(None);
                }
                Slot::Occupied(entry) if *entry.key() == key => {
                    let old = mem::replace(entry, MapEntry::new(key, value));
                    return Ok(Some(old.into_value()));
                }
                _ => b = (b + 1) % self.capacity(),
            }
        }
        Err(TableError::table_full(self.capacity()))
    }

    /// Deletes the entry whose key equals `key`, returning its value. The
    /// slot is marked `Tombstone`, never `Empty`: other keys' probe chains
    /// may run through it, and an `Empty` here would cut them short. A no-op
    /// if the key is absent, so repeated deletes are harmless.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let b = self.search(key)?;
        match mem::replace(&mut self.slots[b], Slot::Tombstone) {
            Slot::Occupied(entry) => Some(entry.into_value()),
            _ => unreachable!(),
        }
    }

    /// Iterates over the live entries in slot order. No other order is
    /// guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        })
    }

    /// Translates a key to its home slot in `[0, capacity)`: the raw 64-bit
    /// hash is capacity-independent, then reduced modulo the slot count.
    /// Identical scheme to the chained table, so key types are
    /// interchangeable between the two disciplines.
    fn home_index(&self, key: &K) -> usize {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.capacity()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ProbingTable<K, V, S> {
    /// Dumps every slot, one line each: `i:` for Empty, `i:tombstone`, or
    /// `i:<k,v>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{}:", i)?,
                Slot::Tombstone => writeln!(f, "{}:tombstone", i)?,
                Slot::Occupied(entry) => writeln!(f, "{}:{}", i, entry)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hashes every key to 0, forcing all keys into one probe chain.
    #[derive(Debug, Clone, Copy, Default)]
    struct Collide;

    struct CollideHasher;

    impl Hasher for CollideHasher {
        fn finish(&self) -> u64 {
            0
        }
        fn write(&mut self, _bytes: &[u8]) {}
    }

    impl BuildHasher for Collide {
        type Hasher = CollideHasher;
        fn build_hasher(&self) -> CollideHasher {
            CollideHasher
        }
    }

    #[test]
    fn insert_search_delete() {
        let mut table = ProbingTable::with_capacity(7);
        assert_eq!(table.insert("hello", 1), Ok(None));
        assert_eq!(table.insert("world", 2), Ok(None));

        assert_eq!(table.get(&"hello"), Some(&1));
        assert_eq!(table.get(&"missing"), None);

        let slot = table.search(&"world").unwrap();
        assert_eq!(table.entry(slot).map(|e| *e.value()), Some(2));

        assert_eq!(table.delete(&"world"), Some(2));
        assert_eq!(table.get(&"world"), None);
        assert_eq!(table.get(&"hello"), Some(&1));
    }

    #[test]
    fn replace_returns_old_value() {
        let mut table = ProbingTable::with_capacity(4);
        assert_eq!(table.insert("k", 1), Ok(None));
        assert_eq!(table.insert("k", 2), Ok(Some(1)));
        assert_eq!(table.get(&"k"), Some(&2));
    }

    #[test]
    fn tombstone_does_not_hide_later_keys() {
        // All keys home to slot 0: a at 0, b probes to 1, c probes to 2.
        let mut table = ProbingTable::with_hasher(3, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        assert_eq!(table.search(&"a"), Some(0));
        assert_eq!(table.search(&"b"), Some(1));
        assert_eq!(table.search(&"c"), Some(2));

        // Deleting a leaves a tombstone at slot 0; b and c sit further
        // along the same probe chain and must remain reachable.
        table.delete(&"a");
        assert_eq!(table.get(&"b"), Some(&2));
        assert_eq!(table.get(&"c"), Some(&3));
    }

    #[test]
    fn insert_reuses_tombstone() {
        let mut table = ProbingTable::with_hasher(3, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        assert_eq!(table.occupancy(), 3);

        table.delete(&"a");
        // d reclaims a's slot; the slot was already counted, so occupancy
        // stays put.
        table.insert("d", 4).unwrap();
        assert_eq!(table.search(&"d"), Some(0));
        assert_eq!(table.occupancy(), 3);
        assert_eq!(table.get(&"b"), Some(&2));
        assert_eq!(table.get(&"c"), Some(&3));
    }

    #[test]
    fn full_table_rejects_new_key() {
        let mut table = ProbingTable::with_hasher(3, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        assert!(table.is_saturated());

        // A fourth distinct key finds no room; the table is untouched.
        assert_eq!(table.insert("d", 4), Err(TableError::table_full(3)));
        assert_eq!(table.get(&"a"), Some(&1));
        assert_eq!(table.get(&"b"), Some(&2));
        assert_eq!(table.get(&"c"), Some(&3));
        assert_eq!(table.get(&"d"), None);

        // Replacing an existing key still works at saturation.
        assert_eq!(table.insert("b", 20), Ok(Some(2)));
        assert_eq!(table.get(&"b"), Some(&20));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut table = ProbingTable::with_hasher(3, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();

        assert_eq!(table.delete(&"a"), Some(1));
        assert_eq!(table.delete(&"a"), None);
        assert_eq!(table.delete(&"a"), None);
        assert_eq!(table.get(&"b"), Some(&2));
    }

    #[test]
    fn search_terminates_on_all_tombstones() {
        // Saturate then delete everything: no Empty slot remains, so the
        // probe cap is the only thing stopping the walk.
        let mut table = ProbingTable::with_hasher(2, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.delete(&"a");
        table.delete(&"b");

        assert_eq!(table.search(&"zzz"), None);
        assert_eq!(table.occupancy(), 2);

        // Tombstones are still reusable.
        table.insert("c", 3).unwrap();
        assert_eq!(table.get(&"c"), Some(&3));
    }

    #[test]
    fn occupancy_never_decreases() {
        let mut table = ProbingTable::with_capacity(8);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        assert_eq!(table.occupancy(), 2);

        table.delete(&"a");
        assert_eq!(table.occupancy(), 2);
        table.delete(&"b");
        assert_eq!(table.occupancy(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let mut table = ProbingTable::with_capacity(5);
        table.insert("a", 1).unwrap();
        let copy = table.clone();

        table.insert("b", 2).unwrap();
        table.delete(&"a");

        assert_eq!(copy.get(&"a"), Some(&1));
        assert_eq!(copy.get(&"b"), None);
    }

    #[test]
    fn display_marks_slot_states() {
        let mut table = ProbingTable::with_hasher(3, Collide);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.delete(&"a");

        let dump = table.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines, vec!["0:tombstone", "1:<b,2>", "2:"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut table = ProbingTable::with_capacity(0);
        assert_eq!(table.capacity(), 1);
        table.insert("k", 1).unwrap();
        assert_eq!(table.get(&"k"), Some(&1));
        assert_eq!(table.insert("other", 2), Err(TableError::table_full(1)));
    }

    #[test]
    fn matches_std_hashmap_model_without_deletes() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        use std::collections::HashMap;

        // Insert-and-replace only: with no tombstones in play the table
        // behaves exactly like a map, so the return values must agree too.
        let mut rng = StdRng::seed_from_u64(0xf00d);
        let mut table = ProbingTable::with_capacity(131);
        let mut model: HashMap<u32, u32> = HashMap::new();

        for _ in 0..1000 {
            let key = rng.gen_range(0..64);
            let value = rng.gen();
            assert_eq!(table.insert(key, value).unwrap(), model.insert(key, value));
        }
        for key in 0..64 {
            assert_eq!(table.get(&key), model.get(&key));
        }
        assert_eq!(table.occupancy(), model.len());
    }
}
