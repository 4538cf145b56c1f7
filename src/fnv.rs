//! # Default Hash Function
//!
//! A 64-bit **FNV-1a** hasher used as the default `BuildHasher` for both table
//! disciplines. FNV-1a is deterministic and seed-free, which is what the
//! tables need: the raw hash of a key is **capacity-independent**, and each
//! table reduces it modulo its own bucket count. Two tables of different
//! capacities therefore agree on the raw hash of any key.
//!
//! FNV is not cryptographically secure and offers no protection against
//! adversarial key sets; callers that need a keyed hash can supply any other
//! `BuildHasher` through `with_hasher`.

use std::hash::{BuildHasher, Hasher};

const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Streaming 64-bit FNV-1a state implementing `std::hash::Hasher`.
#[derive(Debug, Clone)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates a hasher seeded with the FNV-1a offset basis.
    pub fn new() -> Self {
        FnvHasher {
            state: FNV64_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u64::from(b);
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
    }
}

/// A `BuildHasher` producing [`FnvHasher`] instances. Stateless, so every
/// build yields an identical hasher and hashing is fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> FnvHasher {
        FnvHasher::new()
    }
}
