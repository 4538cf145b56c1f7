//! Error taxonomy for the table operations.
//!
//! Absence of a key is **not** an error anywhere in this crate: `search`,
//! `get`, and `delete` communicate "not found" through `Option`. The only
//! failure an operation can report is a probing insert that finds no room,
//! which callers should treat as an undersized-capacity configuration
//! problem rather than a data error.

use thiserror::Error;

/// Convenience alias used by fallible table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors produced by the hash tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A probing insert walked all `capacity` slots without finding an
    /// Empty or Tombstone slot to place into, or an equal key to replace.
    /// The insert was dropped; the table is unchanged.
    #[error("table full: probed all {capacity} slots without finding room")]
    TableFull {
        /// Fixed capacity of the table that rejected the insert.
        capacity: usize,
    },
}

impl TableError {
    /// Creates a [`TableError::TableFull`] for a table of the given capacity.
    pub fn table_full(capacity: usize) -> Self {
        TableError::TableFull { capacity }
    }
}
