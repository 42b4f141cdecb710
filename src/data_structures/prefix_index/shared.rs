// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shareable handle around a [`PrefixIndex`].
//!
//! The index itself is single-owner. This wrapper serializes access with a
//! read-write lock: inserts take the write lock for their whole duration and
//! searches share the read lock, so a search never observes a partial insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{CanonicalForm, PrefixIndex, PrefixIndexConfig, PrefixIndexResult};

/// A cloneable, lock-protected handle to a [`PrefixIndex`].
#[derive(Debug)]
pub struct SharedPrefixIndex<T> {
    inner: Arc<RwLock<PrefixIndex<T>>>,
}

impl<T> SharedPrefixIndex<T> {
    /// Creates a new empty shared index with default configuration.
    pub fn new() -> Self {
        Self::from_index(PrefixIndex::new())
    }

    /// Creates a new empty shared index with the specified configuration.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        Self::from_index(PrefixIndex::with_config(config))
    }

    /// Wraps an existing index.
    pub fn from_index(index: PrefixIndex<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Inserts `value` under `key` while holding the write lock.
    ///
    /// See [`PrefixIndex::add`].
    pub fn add(&self, key: &str, value: T) -> PrefixIndexResult<bool>
    where
        T: CanonicalForm,
    {
        self.inner.write().add(key, value)
    }

    /// Runs a prefix search while holding the read lock.
    ///
    /// See [`PrefixIndex::search`].
    pub fn search(&self, prefix: &str) -> PrefixIndexResult<Vec<T>>
    where
        T: CanonicalForm + Clone,
    {
        self.inner.read().search(prefix)
    }

    /// Runs `f` against the index under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&PrefixIndex<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Number of values stored across all nodes.
    pub fn value_count(&self) -> usize {
        self.inner.read().value_count()
    }

    /// Number of distinct key strings inserted.
    pub fn key_count(&self) -> usize {
        self.inner.read().key_count()
    }
}

impl<T> Clone for SharedPrefixIndex<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedPrefixIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
