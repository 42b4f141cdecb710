//! Prefix Index Library
//!
//! This library contains an in-memory, case-insensitive prefix index together
//! with the configuration, error handling and dataset loading used by the
//! `prefix_index` binary. The index can also be used on its own as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_index`] holds the trie: nodes, the index,
//!   the canonical value contract and a lock-protected shared handle.
//! - [`config`] loads and validates application settings.
//! - [`dataset`] fills an index from JSON-lines files.
//! - [`error`] gathers component errors into one application error.

pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the prefix index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
