// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Case-insensitive prefix index.
//!
//! Maps textual keys to values and returns every value whose key starts with
//! a given prefix. Keys are lower-cased and spelled over a fixed 256-symbol
//! alphabet (one symbol per byte value); characters outside it are rejected.
//!
//! # Features
//!
//! - Case-insensitive insertion and lookup.
//! - Full-key ledger that rejects repeated inserts of the same key string.
//! - Value deduplication by canonical serialization, both at insert time and
//!   across the results of a prefix search.
//! - Iterative traversal, so key length is never bounded by the call stack.
//!
//! # Example
//!
//! ```
//! use prefix_index_lib::data_structures::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! assert!(index.add("Carleton", "MN").unwrap());
//! assert!(index.add("Carnegie Mellon", "PA").unwrap());
//! assert!(index.add("Caltech", "CA").unwrap());
//!
//! let mut found = index.search("CAR").unwrap();
//! found.sort();
//! assert_eq!(found, vec!["MN", "PA"]);
//! assert!(index.search("dartmouth").unwrap().is_empty());
//! ```
//!
//! # Concurrency
//!
//! `PrefixIndex` has no internal synchronization; `add` takes `&mut self`.
//! Use [`SharedPrefixIndex`] when the index must be reached from several
//! threads.

mod canonical;
mod config;
mod error;
mod node;
mod shared;
mod symbol;

#[cfg(test)]
mod tests;

use fnv::FnvHashSet;
use tracing::{debug, trace};

pub use canonical::CanonicalForm;
pub use config::PrefixIndexConfig;
pub use error::{PrefixIndexError, PrefixIndexResult};
pub use node::TrieNode;
pub use shared::SharedPrefixIndex;
pub use symbol::{Symbol, ALPHABET_SIZE};

/// An in-memory prefix index over case-insensitive keys.
///
/// The index owns the root node, which owns its children recursively. It
/// only ever grows: there is no removal.
#[derive(Debug)]
pub struct PrefixIndex<T> {
    /// Root vertex, standing for the empty prefix
    root: TrieNode<T>,

    /// Lower-cased keys that have been fully inserted
    inserted_keys: FnvHashSet<String>,

    /// Configuration options
    config: PrefixIndexConfig,

    /// Values stored across all nodes
    value_count: usize,

    /// Vertices in the tree, root included
    node_count: usize,
}

impl<T> PrefixIndex<T> {
    /// Creates a new empty `PrefixIndex` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixIndexConfig::default())
    }

    /// Creates a new empty `PrefixIndex` with the specified configuration.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        debug!(
            key_ledger = config.key_ledger(),
            max_key_length = ?config.max_key_length(),
            "Creating prefix index"
        );
        Self {
            root: TrieNode::new(),
            inserted_keys: FnvHashSet::default(),
            config,
            value_count: 0,
            node_count: 1,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The value was stored.
    /// * `Ok(false)` - The insert was rejected: the key is empty, the key
    ///   string was already inserted (when the ledger is enabled), or an equal
    ///   value is already stored under this exact key.
    /// * `Err(PrefixIndexError)` - The key contains a character outside the
    ///   alphabet, exceeds the configured maximum length, or a value has no
    ///   canonical form. The index is left untouched.
    pub fn add(&mut self, key: &str, value: T) -> PrefixIndexResult<bool>
    where
        T: CanonicalForm,
    {
        if key.is_empty() {
            trace!("Rejected insert with empty key");
            return Ok(false);
        }

        let key = key.to_lowercase();
        if self.config.key_ledger() && self.inserted_keys.contains(&key) {
            trace!(key = %key, "Rejected insert of previously inserted key");
            return Ok(false);
        }

        // Every fallible step runs before the tree is touched.
        let symbols = self.key_symbols(&key)?;
        let candidate = value.canonical_form()?;
        if let Some(terminal) = self.locate(&symbols) {
            for existing in terminal.values() {
                if existing.canonical_form()? == candidate {
                    trace!(key = %key, "Rejected insert of duplicate value");
                    return Ok(false);
                }
            }
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for symbol in symbols {
            let (child, is_new) = node.child_or_insert_default(symbol);
            if is_new {
                created += 1;
            }
            node = child;
        }
        self.node_count += created;

        node.add_value(value);
        self.value_count += 1;
        debug!(key = %key, new_nodes = created, "Inserted value");
        self.inserted_keys.insert(key);
        Ok(true)
    }

    /// Same as [`add`](Self::add), with an absent key treated like an empty
    /// one.
    pub fn add_opt(&mut self, key: Option<&str>, value: T) -> PrefixIndexResult<bool>
    where
        T: CanonicalForm,
    {
        match key {
            Some(key) => self.add(key, value),
            None => Ok(false),
        }
    }

    /// Returns every value stored at or below the node spelled by `prefix`.
    ///
    /// Values are collected depth-first in ascending symbol order, then
    /// deduplicated by canonical form keeping the first occurrence. Callers
    /// should not rely on the ordering.
    ///
    /// An empty prefix, or one that leaves the tree, yields an empty vector.
    /// The prefix is converted one character at a time while walking, so
    /// characters past the point where the walk leaves the tree are never
    /// examined.
    ///
    /// # Errors
    ///
    /// Fails if the walk reaches a character outside the alphabet.
    pub fn search(&self, prefix: &str) -> PrefixIndexResult<Vec<T>>
    where
        T: CanonicalForm + Clone,
    {
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_lowercase();
        let start = match self.walk(&prefix)? {
            Some(node) => node,
            None => {
                trace!(prefix = %prefix, "No node for prefix");
                return Ok(Vec::new());
            }
        };

        let mut seen = FnvHashSet::default();
        let mut results = Vec::new();
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            for value in node.values() {
                if seen.insert(value.canonical_form()?) {
                    results.push(value.clone());
                }
            }
            // Reversed so the smallest symbol is popped first.
            pending.extend(node.children().rev().map(|(_, child)| child));
        }

        trace!(prefix = %prefix, results = results.len(), "Prefix search complete");
        Ok(results)
    }

    /// Same as [`search`](Self::search), with an absent prefix treated like
    /// an empty one.
    pub fn search_opt(&self, prefix: Option<&str>) -> PrefixIndexResult<Vec<T>>
    where
        T: CanonicalForm + Clone,
    {
        match prefix {
            Some(prefix) => self.search(prefix),
            None => Ok(Vec::new()),
        }
    }

    /// Returns a copy of the values stored under exactly `key`, without
    /// descending into longer keys.
    pub fn get(&self, key: &str) -> PrefixIndexResult<Vec<T>>
    where
        T: Clone,
    {
        if key.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .walk(&key.to_lowercase())?
            .map(TrieNode::values_snapshot)
            .unwrap_or_default())
    }

    /// Whether `key` (case-insensitive) has been inserted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inserted_keys.contains(&key.to_lowercase())
    }

    /// Number of distinct key strings inserted.
    pub fn key_count(&self) -> usize {
        self.inserted_keys.len()
    }

    /// Number of values stored across all nodes.
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Number of vertices in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether no value has been inserted.
    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }

    /// Returns the configuration this index was built with.
    pub fn config(&self) -> &PrefixIndexConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    /// Maps an already lower-cased key to symbols, enforcing the configured
    /// length bound and the alphabet over the whole key.
    fn key_symbols(&self, key: &str) -> PrefixIndexResult<Vec<Symbol>> {
        if let Some(max_length) = self.config.max_key_length() {
            let length = key.chars().count();
            if length > max_length {
                return Err(PrefixIndexError::KeyTooLong { length, max_length });
            }
        }
        symbol::symbols_of(key)
    }

    /// Follows an already lower-cased `path` from the root, converting each
    /// character only when it is reached.
    fn walk(&self, path: &str) -> PrefixIndexResult<Option<&TrieNode<T>>> {
        let mut node = &self.root;
        for c in path.chars() {
            match node.child_at(Symbol::from_char(c)?) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Follows `symbols` from the root.
    fn locate(&self, symbols: &[Symbol]) -> Option<&TrieNode<T>> {
        symbols
            .iter()
            .try_fold(&self.root, |node, symbol| node.child_at(*symbol))
    }
}

impl<T> Default for PrefixIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
