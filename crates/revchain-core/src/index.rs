//! Validated chain positions.
//!
//! All indices are newtypes over `u64` restricted to the 48-bit chain width,
//! so an out-of-range position is rejected at construction time instead of
//! being silently truncated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bits::{count_trailing_zeros, get_bit, prefix};
use crate::error::ChainError;

/// Number of index bits; the chain has `2^MAX_HEIGHT` elements.
pub const MAX_HEIGHT: u8 = 48;

/// The highest valid index, and the first one revealed.
pub const START_INDEX: u64 = (1 << MAX_HEIGHT) - 1;

/// A position in the chain, `0 ..= 2^48 - 1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Index(u64);

impl Index {
    /// The root: no bits set, derivable into every other index.
    pub const ROOT: Self = Self(0);

    /// The first index revealed.
    pub const START: Self = Self(START_INDEX);

    /// Create an index, rejecting values wider than 48 bits.
    pub const fn new(value: u64) -> Result<Self, ChainError> {
        if value > START_INDEX {
            return Err(ChainError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Map the `n`-th reveal (0-based) to its index: `START_INDEX - n`.
    pub const fn from_reveal_count(n: u64) -> Result<Self, ChainError> {
        if n > START_INDEX {
            return Err(ChainError::OutOfRange(n));
        }
        Ok(Self(START_INDEX - n))
    }

    /// How many elements precede this one in reveal order.
    pub const fn reveal_count(self) -> u64 {
        START_INDEX - self.0
    }

    /// The raw value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Bucket of this index: its trailing zero count, 48 for the root.
    pub fn bucket(self) -> u8 {
        count_trailing_zeros(self.0)
    }

    /// Bit at `position`.
    pub fn bit(self, position: u8) -> u8 {
        get_bit(self.0, position)
    }

    /// This index with the `position` low-order bits cleared.
    pub fn prefix(self, position: u8) -> Self {
        Self(prefix(self.0, position))
    }

    /// Whether an element at `self` can derive the element at `to`.
    ///
    /// True when `to` agrees with `self` on every bit at or above
    /// `self.bucket()`; the differing low bits of `to` are the flips applied
    /// during derivation.
    pub fn can_derive(self, to: Index) -> bool {
        to.prefix(self.bucket()) == self
    }

    /// The next index in reveal order, or `None` once the root is reached.
    pub const fn pred(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl TryFrom<u64> for Index {
    type Error = ChainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Index> for u64 {
    fn from(index: Index) -> Self {
        index.0
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index({:#014x})", self.0)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_range() {
        assert!(Index::new(0).is_ok());
        assert!(Index::new(START_INDEX).is_ok());
        assert!(matches!(
            Index::new(START_INDEX + 1),
            Err(ChainError::OutOfRange(v)) if v == 1 << 48
        ));
        assert!(Index::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_reveal_count_mapping() {
        assert_eq!(Index::from_reveal_count(0).unwrap(), Index::START);
        assert_eq!(Index::from_reveal_count(START_INDEX).unwrap(), Index::ROOT);
        assert!(Index::from_reveal_count(START_INDEX + 1).is_err());

        let index = Index::from_reveal_count(1234).unwrap();
        assert_eq!(index.reveal_count(), 1234);
    }

    #[test]
    fn test_bucket() {
        assert_eq!(Index::START.bucket(), 0);
        assert_eq!(Index::new(START_INDEX - 1).unwrap().bucket(), 1);
        assert_eq!(Index::ROOT.bucket(), MAX_HEIGHT);
    }

    #[test]
    fn test_can_derive() {
        let twelve = Index::new(0b1100).unwrap();
        for v in 0b1100..=0b1111 {
            assert!(twelve.can_derive(Index::new(v).unwrap()), "12 -> {v}");
        }
        assert!(!twelve.can_derive(Index::new(0b1011).unwrap()));
        assert!(!twelve.can_derive(Index::new(0b10000).unwrap()));

        // Odd indices only derive themselves
        let odd = Index::new(0b1101).unwrap();
        assert!(odd.can_derive(odd));
        assert!(!odd.can_derive(Index::new(0b1111).unwrap()));

        assert!(Index::ROOT.can_derive(Index::START));
    }

    #[test]
    fn test_pred() {
        assert_eq!(Index::START.pred(), Some(Index::new(START_INDEX - 1).unwrap()));
        assert_eq!(Index::ROOT.pred(), None);
    }

    #[test]
    fn test_index_serde_rejects_wide_values() {
        let json = serde_json::to_string(&Index::START).unwrap();
        assert_eq!(json, START_INDEX.to_string());
        let back: Index = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Index::START);

        let wide = (1u64 << 48).to_string();
        assert!(serde_json::from_str::<Index>(&wide).is_err());
    }

    #[test]
    fn test_index_display() {
        assert_eq!(format!("{}", Index::new(42).unwrap()), "42");
        assert_eq!(format!("{:?}", Index::START), "Index(0xffffffffffff)");
    }
}
