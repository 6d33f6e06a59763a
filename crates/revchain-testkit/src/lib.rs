//! # Revchain Testkit
//!
//! Testing utilities for reverse hash chains.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Conformance vectors**: Known seeds and indices with expected hashes
//! - **Generators**: Proptest strategies for indices, seeds, and reveal scripts
//! - **Fixtures**: A producer wired to a store, with corruption helpers
//!
//! ## Conformance Vectors
//!
//! The derivation's bit-to-buffer mapping is a wire detail; these vectors
//! pin it down:
//!
//! ```rust
//! use revchain_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{name}: got {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use revchain_testkit::generators::{descendant, index};
//!
//! proptest! {
//!     #[test]
//!     fn checkpoint_covers_descendants((base, target) in index().prop_flat_map(descendant)) {
//!         prop_assert!(base.can_derive(target));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use revchain_testkit::fixtures::ChainFixture;
//!
//! let mut fixture = ChainFixture::with_seed([0x42; 32]);
//! fixture.feed(100).unwrap();
//! assert!(fixture.verify_lookups());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::ChainFixture;
pub use generators::{descendant, index, seed, RevealScript};
pub use vectors::{all_vectors, verify_all_vectors, DerivationVector};
