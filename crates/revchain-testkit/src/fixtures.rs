//! Test fixtures and helpers.
//!
//! Common setup code for store tests: a producer wired to a store, with a
//! record of what was accepted.

use revchain_core::{ChainHash, Index, Producer};
use revchain_store::{Store, StoreConfig, StoreError};

use crate::generators::RevealScript;

/// A producer, a store receiving its chain, and the indices accepted so far.
pub struct ChainFixture {
    pub producer: Producer,
    pub store: Store,
    /// Counterfeit chain used to forge inconsistent elements.
    pub forger: Producer,
    pub accepted: Vec<Index>,
}

impl ChainFixture {
    /// Create a new fixture with a random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create with a deterministic seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_config(seed, StoreConfig::default())
    }

    /// Create with a deterministic seed and store configuration.
    pub fn with_config(seed: [u8; 32], config: StoreConfig) -> Self {
        let mut forged = seed;
        forged.iter_mut().for_each(|b| *b = !*b);
        Self {
            producer: Producer::new(seed),
            store: Store::with_config(config),
            forger: Producer::new(forged),
            accepted: Vec::new(),
        }
    }

    /// The genuine hash at `index`.
    pub fn genuine(&self, index: Index) -> ChainHash {
        self.producer.at_index(index)
    }

    /// A well-formed but wrong hash at `index`.
    pub fn forged(&self, index: Index) -> ChainHash {
        self.forger.at_index(index)
    }

    /// Offer the genuine element at `index`, recording it if accepted.
    pub fn offer(&mut self, index: Index) -> Result<(), StoreError> {
        let hash = self.genuine(index);
        self.offer_hash(index, hash)
    }

    /// Offer an arbitrary hash at `index`, recording it if accepted.
    pub fn offer_hash(&mut self, index: Index, hash: ChainHash) -> Result<(), StoreError> {
        self.store.add(index, hash)?;
        self.accepted.push(index);
        Ok(())
    }

    /// Feed the next `count` reveals in sequence.
    pub fn feed(&mut self, count: u64) -> Result<(), StoreError> {
        for _ in 0..count {
            let index = self.store.next_index().ok_or(StoreError::Exhausted)?;
            self.offer(index)?;
        }
        Ok(())
    }

    /// Offer every index in a script, returning each outcome.
    pub fn run_script(&mut self, script: &RevealScript) -> Vec<(Index, Result<(), StoreError>)> {
        script
            .indices
            .iter()
            .map(|&index| (index, self.offer(index)))
            .collect()
    }

    /// Whether every accepted index still looks up to its genuine hash.
    pub fn verify_lookups(&self) -> bool {
        self.accepted
            .iter()
            .all(|&index| self.store.lookup(index) == Some(self.genuine(index)))
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}
