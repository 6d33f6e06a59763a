//! Error types for sessions.

use revchain_core::ChainError;
use revchain_store::StoreError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Index or derivation error.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// The counterpart's element was rejected.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Every local element has been revealed.
    #[error("local chain exhausted")]
    Exhausted,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
