//! Conformance vectors for the derivation function.
//!
//! The first five are the published BOLT #3 `generate_from_seed` vectors.
//! The checkpoint vectors derive from an intermediate element rather than
//! the seed, pinning the same mapping from the receiver's side.

use revchain_core::{derive, derive_from_seed, ChainHash, Index, Seed};
use serde::Serialize;

/// A single derivation vector.
#[derive(Debug, Clone)]
pub struct DerivationVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Producer seed.
    pub seed: [u8; 32],
    /// Index of the element derivation starts from (0 = the seed itself).
    pub base: u64,
    /// Index being derived.
    pub target: u64,
    /// Expected hash (hex).
    pub expected: &'static str,
}

/// Hex-encoded form of a vector, for sharing with other implementations.
#[derive(Debug, Serialize)]
pub struct VectorRecord {
    pub name: String,
    pub seed: String,
    pub base: u64,
    pub target: u64,
    pub expected: String,
}

/// Get all derivation vectors.
pub fn all_vectors() -> Vec<DerivationVector> {
    vec![
        DerivationVector {
            name: "generate_from_seed 0 final node",
            seed: [0x00; 32],
            base: 0,
            target: 0xffff_ffff_ffff,
            expected: "02a40c85b6f28da08dfdbe0926c53fab2de6d28c10301f8f7c4073d5e42e3148",
        },
        DerivationVector {
            name: "generate_from_seed FF final node",
            seed: [0xff; 32],
            base: 0,
            target: 0xffff_ffff_ffff,
            expected: "7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc",
        },
        DerivationVector {
            name: "generate_from_seed FF alternate bits 1",
            seed: [0xff; 32],
            base: 0,
            target: 0x0aaa_aaaa_aaaa,
            expected: "56f4008fb007ca9acf0e15b054d5c9fd12ee06cea347914ddbaed70d1c13a528",
        },
        DerivationVector {
            name: "generate_from_seed FF alternate bits 2",
            seed: [0xff; 32],
            base: 0,
            target: 0x5555_5555_5555,
            expected: "9015daaeb06dba4ccc05b91b2f73bd54405f2be9f217fbacd3c5ac2e62327d31",
        },
        DerivationVector {
            name: "generate_from_seed 01 last nontrivial node",
            seed: [0x01; 32],
            base: 0,
            target: 1,
            expected: "915c75942a26bb3a433a8ce2cb0427c29ec6c1775cfc78328b57f6ba7bfeaa9c",
        },
        DerivationVector {
            name: "root is the seed",
            seed: [0x00; 32],
            base: 0,
            target: 0,
            expected: "0000000000000000000000000000000000000000000000000000000000000000",
        },
        DerivationVector {
            name: "checkpoint bucket 16",
            seed: [0xff; 32],
            base: 0xffff_ffff_0000,
            target: 0xffff_ffff_1234,
            expected: "6495d280454eed81220090d101eaac92efbe1115c49c3efc2873cb32fd2c7767",
        },
        DerivationVector {
            name: "checkpoint bucket 47",
            seed: [0x00; 32],
            base: 0x8000_0000_0000,
            target: 0x8000_0000_ffff,
            expected: "e7b43392add25947f9413ae7ba6656a32cdb389e95c08016a06df1e85ccd76f1",
        },
    ]
}

/// Compute a vector's hash: derive the base from the seed, then the target
/// from the base.
pub fn compute(vector: &DerivationVector) -> Option<ChainHash> {
    let seed = Seed::from_bytes(vector.seed);
    let base = Index::new(vector.base).ok()?;
    let target = Index::new(vector.target).ok()?;
    let base_hash = derive_from_seed(&seed, base);
    derive(&base_hash, base, target).ok()
}

/// Verify all vectors against this implementation.
///
/// Returns `(name, matches, computed_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = compute(v).map(|h| h.to_hex()).unwrap_or_default();
            (v.name.to_string(), hex == v.expected, hex)
        })
        .collect()
}

/// Export all vectors as JSON.
pub fn vectors_json() -> String {
    let records: Vec<VectorRecord> = all_vectors()
        .iter()
        .map(|v| VectorRecord {
            name: v.name.to_string(),
            seed: hex::encode(v.seed),
            base: v.base,
            target: v.target,
            expected: v.expected.to_string(),
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap_or_default()
}
