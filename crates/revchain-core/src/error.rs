//! Error types for Revchain Core.

use thiserror::Error;

use crate::index::Index;

/// Errors from index construction and derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A value does not fit the 48-bit index space.
    #[error("index {0} is outside the 48-bit chain range")]
    OutOfRange(u64),

    /// `to` does not share the bits of `from` at and above its bucket.
    #[error("element {to} cannot be derived from element {from}")]
    NotDerivable { from: Index, to: Index },
}
