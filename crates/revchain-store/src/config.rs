//! Store configuration.

use serde::{Deserialize, Serialize};

/// How strictly incoming indices must follow each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Any index strictly below the last accepted one. The first element may
    /// start anywhere in the chain.
    #[default]
    Decreasing,
    /// Exactly one below the last accepted index, starting at `START_INDEX`.
    Sequential,
}

/// Configuration for a [`Store`](crate::Store).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Ordering rule applied on every add.
    pub ordering: OrderingPolicy,
}

impl StoreConfig {
    /// Configuration requiring gap-free reveals from the start of the chain.
    pub fn sequential() -> Self {
        Self {
            ordering: OrderingPolicy::Sequential,
        }
    }
}
