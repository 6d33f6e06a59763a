//! Error types for the store module.

use revchain_core::{ChainError, Index};
use thiserror::Error;

/// Errors that can occur when adding elements to a store.
///
/// Every variant leaves the store exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Index construction or derivation failed.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The index does not continue the reveal order.
    #[error("element {index} is out of order: last accepted element is {last}")]
    OutOfOrder { index: Index, last: Index },

    /// Sequential ordering expected a specific index.
    #[error("element {index} is out of order: expected {expected}")]
    UnexpectedIndex { index: Index, expected: Index },

    /// The hash does not derive a retained checkpoint.
    #[error("element {index} is inconsistent with checkpoint {checkpoint}")]
    InconsistentElement { index: Index, checkpoint: Index },

    /// The bucket is held by a checkpoint the new element cannot derive.
    #[error("element {index} would displace checkpoint {occupant} in bucket {bucket}")]
    BucketOccupied {
        index: Index,
        occupant: Index,
        bucket: u8,
    },

    /// The root has been accepted; there is nothing left to reveal.
    #[error("chain exhausted: the root element has already been accepted")]
    Exhausted,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
