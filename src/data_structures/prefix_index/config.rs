// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the prefix index.

/// Configuration for a [`PrefixIndex`](super::PrefixIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndexConfig {
    /// Whether a key string that was already inserted rejects every later
    /// insert under the same key, before value deduplication is consulted.
    ///
    /// When disabled, only an equal value at the terminal node rejects an
    /// insert, so one key can carry several distinct values.
    key_ledger: bool,

    /// Maximum number of characters accepted in an inserted key, if any.
    /// Prefixes are never bounded.
    max_key_length: Option<usize>,
}

impl PrefixIndexConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - key_ledger: true
    /// - max_key_length: None (unbounded)
    pub fn new() -> Self {
        Self {
            key_ledger: true,
            max_key_length: None,
        }
    }

    /// Enable or disable the full-key ledger check.
    pub fn with_key_ledger(mut self, key_ledger: bool) -> Self {
        self.key_ledger = key_ledger;
        self
    }

    /// Bound the length of inserted keys, in characters.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        if max_key_length == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_length = Some(max_key_length);
        self
    }

    /// Get whether the full-key ledger rejects repeated keys
    pub fn key_ledger(&self) -> bool {
        self.key_ledger
    }

    /// Get the maximum inserted key length, `None` when unbounded
    pub fn max_key_length(&self) -> Option<usize> {
        self.max_key_length
    }
}

impl Default for PrefixIndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrefixIndexConfig::default();
        assert!(config.key_ledger());
        assert_eq!(config.max_key_length(), None);
    }

    #[test]
    fn test_config_builder() {
        let config = PrefixIndexConfig::new()
            .with_key_ledger(false)
            .with_max_key_length(16);

        assert!(!config.key_ledger());
        assert_eq!(config.max_key_length(), Some(16));
    }

    #[test]
    #[should_panic(expected = "Maximum key length must be greater than 0")]
    fn test_invalid_max_key_length() {
        let _config = PrefixIndexConfig::new().with_max_key_length(0);
    }
}
