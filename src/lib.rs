//! # hashtab
//!
//! Fixed-capacity hash tables built from scratch, one per collision-resolution
//! discipline:
//!
//! - [`ChainedTable`] — separate chaining (closed-bucket): each bucket owns
//!   the list of entries hashing to it. No capacity ceiling; chains grow as
//!   needed.
//! - [`ProbingTable`] — open addressing (open-bucket) with linear probing and
//!   tombstone deletion. Bounded by its fixed slot count; a saturated table
//!   reports [`TableError::TableFull`] instead of resizing.
//!
//! Both store immutable [`MapEntry`] pairs, require only `Hash + Eq` of keys
//! (entries additionally delegate ordering to keys that carry one), and share
//! the same hash reduction: a capacity-independent 64-bit hash from a
//! `BuildHasher` (the deterministic [`fnv::FnvBuildHasher`] by default),
//! reduced modulo the capacity chosen at construction.
//!
//! Neither table resizes, persists, or synchronizes: capacity is fixed for
//! the table's lifetime, and a multi-threaded host must serialize access to a
//! table instance itself.

pub mod chained;
pub mod entry;
pub mod error;
pub mod fnv;
pub mod probing;

pub use chained::ChainedTable;
pub use entry::MapEntry;
pub use error::{Result, TableError};
pub use probing::{ProbingTable, Slot};
