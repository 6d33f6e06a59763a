//! The checkpoint store.
//!
//! Each accepted element is filed under its bucket (trailing zero count).
//! A higher bucket means a more general element: it derives every index
//! that agrees with it on the bits at and above its bucket. When a new
//! element arrives, every lower-bucket checkpoint it can derive must match
//! what it derives, and then becomes redundant.
//!
//! ```text
//!   reveal  index(low bits)  bucket   retained after add
//!   1st     ...1111          0        {0: ...1111}
//!   2nd     ...1110          1        {1: ...1110}            evicts ...1111
//!   3rd     ...1101          0        {0: ...1101, 1: ...1110}
//!   4th     ...1100          2        {2: ...1100}            evicts both
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use revchain_core::{ChainHash, Element, Index, MAX_HEIGHT};

use crate::config::{OrderingPolicy, StoreConfig};
use crate::error::{Result, StoreError};

/// Number of buckets: one per possible trailing zero count, 0 through 48.
pub const BUCKET_COUNT: usize = MAX_HEIGHT as usize + 1;

/// A retained element together with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub bucket: u8,
    pub index: Index,
    pub hash: ChainHash,
}

/// Receives chain elements and keeps the minimal set needed to re-derive them.
#[derive(Debug, Clone)]
pub struct Store {
    buckets: [Option<Element>; BUCKET_COUNT],
    last: Option<Index>,
    config: StoreConfig,
}

impl Store {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            buckets: [None; BUCKET_COUNT],
            last: None,
            config,
        }
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add the next element from the counterpart.
    ///
    /// On any error the store is left exactly as it was.
    pub fn add(&mut self, index: Index, hash: ChainHash) -> Result<()> {
        self.check_order(index)?;

        let element = Element::new(index, hash);
        let bucket = element.bucket();

        // Everything this element can derive must agree with it.
        for existing in self.buckets[..usize::from(bucket)].iter().flatten() {
            let Ok(derived) = element.derive(existing.index) else {
                continue;
            };
            if derived.hash != existing.hash {
                warn!(
                    index = %index,
                    checkpoint = %existing.index,
                    "rejecting element inconsistent with retained checkpoint"
                );
                return Err(StoreError::InconsistentElement {
                    index,
                    checkpoint: existing.index,
                });
            }
        }

        if let Some(occupant) = &self.buckets[usize::from(bucket)] {
            warn!(
                index = %index,
                occupant = %occupant.index,
                bucket,
                "rejecting element that would displace an underived checkpoint"
            );
            return Err(StoreError::BucketOccupied {
                index,
                occupant: occupant.index,
                bucket,
            });
        }

        let mut evicted = 0usize;
        for slot in &mut self.buckets[..usize::from(bucket)] {
            if slot.is_some_and(|existing| index.can_derive(existing.index)) {
                *slot = None;
                evicted += 1;
            }
        }

        self.buckets[usize::from(bucket)] = Some(element);
        self.last = Some(index);

        debug!(index = %index, bucket, evicted, retained = self.len(), "accepted chain element");
        Ok(())
    }

    /// Add an element at [`next_index`](Self::next_index).
    pub fn add_next(&mut self, hash: ChainHash) -> Result<Index> {
        let index = self.next_index().ok_or(StoreError::Exhausted)?;
        self.add(index, hash)?;
        Ok(index)
    }

    /// Look up the hash at `index`, deriving it from the most specific
    /// checkpoint that covers it.
    pub fn lookup(&self, index: Index) -> Option<ChainHash> {
        let found = self
            .buckets
            .iter()
            .flatten()
            .find_map(|checkpoint| checkpoint.derive(index).ok());

        trace!(index = %index, found = found.is_some(), "chain lookup");
        found.map(|element| element.hash)
    }

    /// Look up the hash of the `n`-th reveal (0-based).
    pub fn lookup_reveal(&self, n: u64) -> Result<Option<ChainHash>> {
        Ok(self.lookup(Index::from_reveal_count(n)?))
    }

    /// Whether some retained checkpoint can derive `index`.
    pub fn covers(&self, index: Index) -> bool {
        self.buckets
            .iter()
            .flatten()
            .any(|checkpoint| checkpoint.index.can_derive(index))
    }

    /// The most recently accepted index.
    pub fn last_index(&self) -> Option<Index> {
        self.last
    }

    /// The index the next reveal is expected at in a gap-free sequence,
    /// or `None` once the root has been accepted.
    pub fn next_index(&self) -> Option<Index> {
        match self.last {
            None => Some(Index::START),
            Some(last) => last.pred(),
        }
    }

    /// Snapshot of the retained checkpoints, in ascending bucket order.
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        self.buckets
            .iter()
            .flatten()
            .map(|element| Checkpoint {
                bucket: element.bucket(),
                index: element.index,
                hash: element.hash,
            })
            .collect()
    }

    /// Number of retained checkpoints.
    pub fn len(&self) -> usize {
        self.buckets.iter().flatten().count()
    }

    /// Whether nothing has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    fn check_order(&self, index: Index) -> Result<()> {
        match (self.config.ordering, self.last) {
            (OrderingPolicy::Decreasing, Some(last)) if index >= last => {
                Err(StoreError::OutOfOrder { index, last })
            }
            (OrderingPolicy::Decreasing, _) => Ok(()),
            (OrderingPolicy::Sequential, _) => {
                let expected = self.next_index().ok_or(StoreError::Exhausted)?;
                if index == expected {
                    Ok(())
                } else {
                    Err(StoreError::UnexpectedIndex { index, expected })
                }
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
