//! # Revchain Store
//!
//! The receiving side of a reverse hash chain. Elements arrive from the
//! counterpart in decreasing index order; the [`Store`] checks each one
//! against what it already holds and keeps at most one checkpoint per
//! bucket, from which every accepted element can be re-derived.
//!
//! ## Key Types
//!
//! - [`Store`] - Single-owner checkpoint store
//! - [`SharedStore`] - The same store behind a lock, for concurrent callers
//! - [`StoreConfig`] / [`OrderingPolicy`] - How strictly reveals must be ordered
//! - [`Checkpoint`] - A retained element and its bucket
//!
//! ## Usage
//!
//! ```rust
//! use revchain_core::{Index, Producer};
//! use revchain_store::Store;
//!
//! let producer = Producer::new([0x42; 32]);
//! let mut store = Store::new();
//!
//! for n in 0..8 {
//!     let index = Index::from_reveal_count(n).unwrap();
//!     store.add(index, producer.at_index(index)).unwrap();
//! }
//!
//! // Eight reveals collapse into a single checkpoint.
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.lookup(Index::START), Some(producer.at_index(Index::START)));
//! ```
//!
//! ## Design Notes
//!
//! - **Validate, then mutate**: a rejected element leaves the store untouched
//! - **Eviction**: a new element evicts every lower-bucket checkpoint it can derive
//! - **Bounded**: at most 49 checkpoints (buckets 0..=48) are ever retained

pub mod config;
pub mod error;
pub mod shared;
pub mod store;

pub use config::{OrderingPolicy, StoreConfig};
pub use error::{Result, StoreError};
pub use shared::SharedStore;
pub use store::{Checkpoint, Store, BUCKET_COUNT};
