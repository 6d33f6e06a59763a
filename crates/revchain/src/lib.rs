//! # Revchain
//!
//! Reverse hash chains with compact receiver storage.
//!
//! ## Overview
//!
//! A chain has `2^48` elements. The producer holds a 32-byte seed and can
//! derive any element; elements are revealed from the highest index
//! downward. The receiver validates each reveal against what it already
//! holds and retains at most one checkpoint per trailing-zero bucket, from
//! which every earlier reveal can be re-derived.
//!
//! ## Key Concepts
//!
//! - **Index**: a position in `0 ..= 2^48 - 1`, revealed high to low.
//! - **Bucket**: the trailing zero count of an index. Higher buckets derive more.
//! - **Checkpoint**: a retained `(index, hash)` pair standing in for its descendants.
//! - **Session**: one party's view: its own producer plus a store for the peer.
//!
//! ## Usage
//!
//! ```rust
//! use revchain::{Session, SessionConfig};
//!
//! let mut alice = Session::new([0x01; 32], SessionConfig::default());
//! let mut bob = Session::new([0x02; 32], SessionConfig::default());
//!
//! for _ in 0..4 {
//!     let element = alice.reveal_next().unwrap();
//!     bob.receive(element.index, element.hash).unwrap();
//! }
//!
//! let first = revchain::Index::START;
//! assert_eq!(bob.remote_lookup(first), Some(alice.local_at(first)));
//! ```
//!
//! ## Re-exports
//!
//! - `revchain::core` - Index algebra, derivation, producer
//! - `revchain::store` - Checkpoint store

pub mod error;
pub mod session;

// Re-export component crates
pub use revchain_core as core;
pub use revchain_store as store;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use session::{Session, SessionConfig};

// Re-export commonly used types
pub use revchain_core::{
    derive, derive_from_seed, ChainError, ChainHash, Element, Index, Producer, Seed, MAX_HEIGHT,
    START_INDEX,
};
pub use revchain_store::{
    Checkpoint, OrderingPolicy, SharedStore, Store, StoreConfig, StoreError,
};
