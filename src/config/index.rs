//! Index configuration module.
//!
//! This module defines the policy settings applied to every prefix index
//! built by the application.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_index::PrefixIndexConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexSettings {
    /// Whether a repeated key string rejects later inserts regardless of value
    pub key_ledger: bool,

    /// Maximum inserted key length in characters; unbounded when absent
    pub max_key_length: Option<usize>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            key_ledger: true,
            max_key_length: None,
        }
    }
}

impl IndexSettings {
    /// Builds the index configuration described by these settings.
    ///
    /// Call [`Validate::validate`] first; a zero `max_key_length` is not a
    /// valid index configuration.
    pub fn to_index_config(&self) -> PrefixIndexConfig {
        let config = PrefixIndexConfig::new().with_key_ledger(self.key_ledger);
        match self.max_key_length {
            Some(max_key_length) => config.with_max_key_length(max_key_length),
            None => config,
        }
    }
}

impl Validate for IndexSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_key_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_index_defaults() {
        let settings = IndexSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.to_index_config(), PrefixIndexConfig::default());
    }

    #[test]
    fn test_to_index_config() {
        let settings = IndexSettings {
            key_ledger: false,
            max_key_length: Some(32),
        };
        let config = settings.to_index_config();
        assert!(!config.key_ledger());
        assert_eq!(config.max_key_length(), Some(32));
    }

    #[test]
    fn test_zero_length_rejected() {
        let settings = IndexSettings {
            max_key_length: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
