//! The one-way derivation function.
//!
//! Starting from a base element, walk the target's bits from high to low
//! below the base's bucket. For every set bit `p`, flip bit `p % 8` of byte
//! `p / 8` in the 32-byte buffer, then replace the buffer with its SHA-256.
//!
//! ```text
//!   base  = 1 0 1 1 0 0 0 0      bucket 4: bits 7..4 are fixed
//!   to    = 1 0 1 1 0 1 0 1      flips at positions 2 and 0
//!   steps : flip(2) sha256, flip(0) sha256
//! ```
//!
//! Starting from the seed at index 0, every index is reachable; this is what
//! the [`Producer`](crate::Producer) does.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::crypto::{ChainHash, Seed};
use crate::error::ChainError;
use crate::index::{Index, MAX_HEIGHT};

/// A chain element: an index and the hash at that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub index: Index,
    pub hash: ChainHash,
}

impl Element {
    /// Create an element.
    pub const fn new(index: Index, hash: ChainHash) -> Self {
        Self { index, hash }
    }

    /// The root element of a chain: the seed itself at index 0.
    pub fn root(seed: &Seed) -> Self {
        Self {
            index: Index::ROOT,
            hash: ChainHash::from_bytes(*seed.expose_secret()),
        }
    }

    /// Bucket this element is stored in.
    pub fn bucket(&self) -> u8 {
        self.index.bucket()
    }

    /// Derive the element at `to` from this one.
    ///
    /// Fails with [`ChainError::NotDerivable`] unless `to` agrees with this
    /// element's index on every bit at or above its bucket.
    pub fn derive(&self, to: Index) -> Result<Element, ChainError> {
        if !self.index.can_derive(to) {
            return Err(ChainError::NotDerivable {
                from: self.index,
                to,
            });
        }

        Ok(Element::new(to, walk(self.hash.0, to, self.bucket())))
    }
}

/// Derive the hash at `target` from `base_hash` sitting at `base_index`.
pub fn derive(
    base_hash: &ChainHash,
    base_index: Index,
    target: Index,
) -> Result<ChainHash, ChainError> {
    Element::new(base_index, *base_hash)
        .derive(target)
        .map(|element| element.hash)
}

/// Derive the hash at `index` directly from the seed.
///
/// The seed sits at the root, which covers every index, so this cannot fail.
pub fn derive_from_seed(seed: &Seed, index: Index) -> ChainHash {
    walk(*seed.expose_secret(), index, MAX_HEIGHT)
}

/// Apply the flip-and-hash steps for every set bit of `target` below `top`.
///
/// Bit `p` of the index maps to bit `p % 8` of byte `p / 8` of the buffer.
fn walk(mut buf: [u8; 32], target: Index, top: u8) -> ChainHash {
    for position in (0..top).rev() {
        if target.bit(position) == 1 {
            buf[usize::from(position / 8)] ^= 1 << (position % 8);
            buf = Sha256::digest(buf).into();
        }
    }
    ChainHash(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::START_INDEX;
    use proptest::prelude::*;

    fn index(v: u64) -> Index {
        Index::new(v).unwrap()
    }

    #[test]
    fn test_root_is_identity() {
        let seed = Seed::from_bytes([0x17; 32]);
        assert_eq!(derive_from_seed(&seed, Index::ROOT), ChainHash([0x17; 32]));
    }

    #[test]
    fn test_single_step_matches_manual_hash() {
        let seed = Seed::from_bytes([0u8; 32]);
        let mut buf = [0u8; 32];
        buf[0] ^= 1;
        assert_eq!(derive_from_seed(&seed, index(1)), ChainHash::hash(&buf));

        let mut buf = [0u8; 32];
        buf[5] ^= 1 << 7; // position 47
        assert_eq!(derive_from_seed(&seed, index(1 << 47)), ChainHash::hash(&buf));
    }

    #[test]
    fn test_walk_stops_below_top_bit() {
        let target = index(0b1011);
        // Only positions below the top take part: bit 3 is ignored at top 3.
        assert_eq!(walk([0u8; 32], target, 3), walk([0u8; 32], index(0b0011), 3));
        assert_eq!(walk([0x09; 32], target, 0), ChainHash([0x09; 32]));
        assert_ne!(walk([0u8; 32], target, 4), walk([0u8; 32], target, 3));
    }

    #[test]
    fn test_root_element_matches_seed_derivation() {
        let seed = Seed::from_bytes([0xff; 32]);
        let root = Element::root(&seed);
        let target = index(0xaaaa_aaaa_aaa);
        assert_eq!(root.derive(target).unwrap().hash, derive_from_seed(&seed, target));
    }

    #[test]
    fn test_derive_to_self_is_identity() {
        let element = Element::new(index(0b1100), ChainHash([0x33; 32]));
        assert_eq!(element.derive(element.index).unwrap(), element);
    }

    #[test]
    fn test_derive_rejects_non_descendants() {
        let element = Element::new(index(0b1100), ChainHash([0x33; 32]));
        assert_eq!(
            element.derive(index(0b1011)),
            Err(ChainError::NotDerivable {
                from: index(0b1100),
                to: index(0b1011),
            })
        );
        assert!(derive(&ChainHash::ZERO, index(0b1101), index(0b1111)).is_err());
    }

    #[test]
    fn test_start_index_from_checkpoint() {
        let seed = Seed::from_bytes([0x01; 32]);
        let checkpoint_index = index(START_INDEX - 1);
        let checkpoint = derive_from_seed(&seed, checkpoint_index);
        assert_eq!(
            derive(&checkpoint, checkpoint_index, Index::START).unwrap(),
            derive_from_seed(&seed, Index::START)
        );
    }

    proptest! {
        #[test]
        fn test_checkpoint_derivability(
            seed in any::<[u8; 32]>(),
            base in 1u64..=START_INDEX,
            low in any::<u64>(),
        ) {
            let seed = Seed::from_bytes(seed);
            let base = index(base);
            let zeros = base.bucket();
            let target = index(base.value() | (low & ((1u64 << zeros) - 1)));

            let checkpoint = derive_from_seed(&seed, base);
            prop_assert_eq!(
                derive(&checkpoint, base, target).unwrap(),
                derive_from_seed(&seed, target)
            );
        }

        #[test]
        fn test_derivation_is_deterministic(seed in any::<[u8; 32]>(), target in 0u64..=START_INDEX) {
            let seed = Seed::from_bytes(seed);
            let target = index(target);
            prop_assert_eq!(derive_from_seed(&seed, target), derive_from_seed(&seed, target));
        }
    }
}
