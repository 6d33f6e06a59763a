//! The sending side of a chain: derives any element from the seed on demand.

use crate::crypto::{ChainHash, Seed};
use crate::derive::{derive_from_seed, Element};
use crate::error::ChainError;
use crate::index::Index;

/// Holds the seed and hands out chain elements.
///
/// Stateless apart from the seed: every call is at most 48 SHA-256 steps,
/// so nothing is cached.
#[derive(Clone, Debug)]
pub struct Producer {
    seed: Seed,
}

impl Producer {
    /// Create a producer from raw seed bytes.
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            seed: Seed::from_bytes(seed),
        }
    }

    /// Create a producer from an existing seed.
    pub fn from_seed(seed: Seed) -> Self {
        Self { seed }
    }

    /// The hash at `index`.
    pub fn at_index(&self, index: Index) -> ChainHash {
        derive_from_seed(&self.seed, index)
    }

    /// The element at `index`.
    pub fn element(&self, index: Index) -> Element {
        Element::new(index, self.at_index(index))
    }

    /// The hash of the `n`-th reveal (0-based), i.e. index `START_INDEX - n`.
    pub fn at_reveal(&self, n: u64) -> Result<ChainHash, ChainError> {
        Ok(self.at_index(Index::from_reveal_count(n)?))
    }

    /// The root element (the seed itself). Whoever holds it can derive the
    /// whole chain.
    pub fn root(&self) -> Element {
        Element::root(&self.seed)
    }
}
