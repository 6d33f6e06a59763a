//! A session: one party's side of a pair of chains.
//!
//! Each party reveals its own chain to the other and keeps the other's
//! reveals. The session owns the local [`Producer`] together with a cursor
//! of how far it has revealed, and a [`Store`] for the counterpart's chain.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use revchain_core::{ChainHash, Element, Index, Producer, Seed};
use revchain_store::{Store, StoreConfig};

use crate::error::{Error, Result};

/// Configuration for a [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Configuration of the store holding the counterpart's reveals.
    pub store: StoreConfig,
}

/// The local producer plus the store for the remote chain.
#[derive(Debug)]
pub struct Session {
    producer: Producer,
    /// Next local index to reveal; `None` once the root has gone out.
    cursor: Option<Index>,
    remote: Store,
}

impl Session {
    /// Create a session from the local seed.
    pub fn new(seed: [u8; 32], config: SessionConfig) -> Self {
        Self::from_seed(Seed::from_bytes(seed), config)
    }

    /// Create a session from an existing seed.
    pub fn from_seed(seed: Seed, config: SessionConfig) -> Self {
        Self {
            producer: Producer::from_seed(seed),
            cursor: Some(Index::START),
            remote: Store::with_config(config.store),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local chain
    // ─────────────────────────────────────────────────────────────────────────

    /// Reveal the next local element and advance the cursor.
    pub fn reveal_next(&mut self) -> Result<Element> {
        let index = self.cursor.ok_or(Error::Exhausted)?;
        let element = self.producer.element(index);
        self.cursor = index.pred();

        debug!(index = %index, "revealed local element");
        Ok(element)
    }

    /// The local hash at `index`, whether revealed yet or not.
    pub fn local_at(&self, index: Index) -> ChainHash {
        self.producer.at_index(index)
    }

    /// How many local elements have been revealed.
    pub fn revealed(&self) -> u64 {
        match self.cursor {
            Some(next) => next.reveal_count(),
            None => Index::ROOT.reveal_count() + 1,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Remote chain
    // ─────────────────────────────────────────────────────────────────────────

    /// Accept a counterpart element at `index`.
    pub fn receive(&mut self, index: Index, hash: ChainHash) -> Result<()> {
        self.remote.add(index, hash).map_err(|e| {
            warn!(index = %index, error = %e, "counterpart element rejected");
            Error::from(e)
        })
    }

    /// Accept a counterpart element at the next index in sequence.
    pub fn receive_next(&mut self, hash: ChainHash) -> Result<Index> {
        self.remote.add_next(hash).map_err(|e| {
            warn!(error = %e, "counterpart element rejected");
            Error::from(e)
        })
    }

    /// A counterpart hash previously revealed at `index`.
    pub fn remote_lookup(&self, index: Index) -> Option<ChainHash> {
        self.remote.lookup(index)
    }

    /// The store holding the counterpart's chain.
    pub fn remote(&self) -> &Store {
        &self.remote
    }
}
