// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! A node is one trie vertex: at most one child per alphabet symbol, plus the
//! values of every key that terminates here. Children are owned exclusively
//! by their parent, so the structure is a strict tree.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::error::PrefixIndexResult;
use super::symbol::Symbol;

/// A vertex in the prefix index.
#[derive(Debug)]
pub struct TrieNode<T> {
    /// Child vertices keyed by edge symbol, iterated in ascending order
    children: BTreeMap<Symbol, TrieNode<T>>,

    /// Values of keys terminating at this vertex, in insertion order
    values: Vec<T>,
}

impl<T> TrieNode<T> {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            values: Vec::new(),
        }
    }

    /// Returns the child reached through `symbol`, if any.
    pub fn child_at(&self, symbol: Symbol) -> Option<&TrieNode<T>> {
        self.children.get(&symbol)
    }

    /// Mutable variant of [`child_at`](Self::child_at).
    pub fn child_at_mut(&mut self, symbol: Symbol) -> Option<&mut TrieNode<T>> {
        self.children.get_mut(&symbol)
    }

    /// Looks up the child for the first character of `character`,
    /// lower-casing it first.
    ///
    /// # Errors
    ///
    /// * `EmptyCharacter` if `character` is empty.
    /// * `InvalidCharacter` if the character is outside the alphabet.
    pub fn child_for_character(&self, character: &str) -> PrefixIndexResult<Option<&TrieNode<T>>> {
        let symbol = Symbol::from_character(character)?;
        Ok(self.child_at(symbol))
    }

    /// Installs `node` at `symbol` unconditionally, returning any child it
    /// displaced.
    pub fn set_child(&mut self, symbol: Symbol, node: TrieNode<T>) -> Option<TrieNode<T>> {
        self.children.insert(symbol, node)
    }

    /// Installs `node` at `symbol` only if the slot is vacant.
    ///
    /// Returns `true` if the node was installed, `false` if a child already
    /// occupied the slot (the existing child is kept).
    pub fn insert_child(&mut self, symbol: Symbol, node: TrieNode<T>) -> bool {
        match self.children.entry(symbol) {
            Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the child at `symbol`, creating an empty one first if the
    /// slot is vacant, along with whether it was created. Never replaces an
    /// existing child.
    pub fn child_or_insert_default(&mut self, symbol: Symbol) -> (&mut TrieNode<T>, bool) {
        match self.children.entry(symbol) {
            Entry::Vacant(slot) => (slot.insert(TrieNode::new()), true),
            Entry::Occupied(slot) => (slot.into_mut(), false),
        }
    }

    /// Appends `value` to this node. No deduplication happens here.
    pub fn add_value(&mut self, value: T) {
        self.values.push(value);
    }

    /// Borrowed view of the values stored at this node.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an owned copy of the values stored at this node.
    pub fn values_snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Iterates over `(symbol, child)` pairs in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, &TrieNode<T>)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TrieNode<T> {
    // Tear down iteratively; a recursive drop would use one stack frame per
    // key character.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<T>> = Vec::new();
        pending.extend(std::mem::take(&mut self.children).into_values());
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
