//! Data structures for the prefix index application.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types, no panics on invalid input
//! - Iterative traversal where depth depends on input

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixIndexError, PrefixIndexResult, SharedPrefixIndex};
