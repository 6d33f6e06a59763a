//! # Revchain Core
//!
//! Pure primitives for reverse hash chains: the 48-bit index algebra, the
//! one-way derivation function, and the seed-holding [`Producer`].
//!
//! This crate contains no I/O, no storage, no locking. It is pure computation
//! over 32-byte chain elements.
//!
//! ## Key Types
//!
//! - [`Index`] - A validated position in the chain (`0 ..= 2^48 - 1`)
//! - [`ChainHash`] - A 32-byte chain element (SHA-256 output)
//! - [`Seed`] - The producer's secret root, zeroized on drop
//! - [`Element`] - An `(index, hash)` pair that can derive its descendants
//! - [`Producer`] - Derives any element directly from the seed
//!
//! ## Derivation
//!
//! Elements are revealed from [`START_INDEX`] downward. An element whose index
//! has `z` trailing zero bits can derive every index that agrees with it on
//! bits `z` and above. See [`derive`] for the exact bit-to-buffer mapping.

pub mod bits;
pub mod crypto;
pub mod derive;
pub mod error;
pub mod index;
pub mod producer;

pub use bits::{count_trailing_zeros, get_bit, prefix};
pub use crypto::{ChainHash, Seed};
pub use derive::{derive, derive_from_seed, Element};
pub use error::ChainError;
pub use index::{Index, MAX_HEIGHT, START_INDEX};
pub use producer::Producer;
