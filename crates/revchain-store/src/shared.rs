//! A [`Store`] behind a lock, for callers on several threads.
//!
//! `add` holds the write lock for the whole validate/insert/evict sequence,
//! so readers never observe a half-evicted bucket set.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use revchain_core::{ChainHash, Index};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::{Checkpoint, Store};

/// Thread-safe wrapper around [`Store`].
///
/// Adds validate completely before mutating, so a panic can never leave the
/// inner store half-updated; a poisoned lock is simply taken over.
#[derive(Debug, Default)]
pub struct SharedStore {
    inner: RwLock<Store>,
}

impl SharedStore {
    /// Create an empty shared store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared store.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: RwLock::new(Store::with_config(config)),
        }
    }

    /// See [`Store::add`].
    pub fn add(&self, index: Index, hash: ChainHash) -> Result<()> {
        self.write().add(index, hash)
    }

    /// See [`Store::add_next`].
    pub fn add_next(&self, hash: ChainHash) -> Result<Index> {
        self.write().add_next(hash)
    }

    /// See [`Store::lookup`].
    pub fn lookup(&self, index: Index) -> Option<ChainHash> {
        self.read().lookup(index)
    }

    /// See [`Store::checkpoints`].
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        self.read().checkpoints()
    }

    /// See [`Store::last_index`].
    pub fn last_index(&self) -> Option<Index> {
        self.read().last_index()
    }

    /// A copy of the current store state.
    pub fn snapshot(&self) -> Store {
        self.read().clone()
    }

    /// Unwrap the inner store.
    pub fn into_inner(self) -> Store {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }
}
