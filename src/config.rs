//! Engine configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Files are JSON.

use crate::core::MAX_WORD_LENGTH;
use crate::error::{EngineError, Result};
use crate::query::MIN_GROUP_SIZE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits and defaults applied at the engine boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Longest accepted word, in characters
    pub max_word_length: usize,
    /// Page size used when the caller does not pick one
    pub default_page_size: usize,
    /// Upper bound for caller-supplied page sizes
    pub max_page_size: usize,
    /// Minimum group size used when the caller does not pick one
    pub default_min_group_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_word_length: MAX_WORD_LENGTH,
            default_page_size: 10,
            max_page_size: 100,
            default_min_group_size: MIN_GROUP_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for this
    /// struct, or fails [`EngineConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Check the values are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for zero lengths or page sizes, a default page
    /// size above the maximum, or a default min group size below 2.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(EngineError::invalid("max_word_length must be at least 1"));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(EngineError::invalid("page sizes must be at least 1"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(EngineError::invalid(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        if self.default_min_group_size < MIN_GROUP_SIZE {
            return Err(EngineError::invalid(format!(
                "default_min_group_size must be at least {MIN_GROUP_SIZE}"
            )));
        }
        Ok(())
    }

    /// Resolve a caller's page size: default when absent, capped at the maximum
    #[must_use]
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}
