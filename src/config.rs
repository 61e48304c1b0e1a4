//! Splitter configuration.
//!
//! Settings can be built in code or read from TOML:
//!
//! ```toml
//! chunk_size = 500
//! overlap = 50
//! separators = ["\n\n", "\n", "。", "！", "？", "，", "、"]
//! ```
//!
//! Missing keys fall back to [`SplitterConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recursive::{validate, CHINESE_SEPARATORS};
use crate::Result;

/// Splitter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Maximum chunk size in characters
    pub chunk_size: usize,
    /// Characters repeated at the start of the next chunk
    pub overlap: usize,
    /// Separator tiers, coarsest first
    pub separators: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
            separators: CHINESE_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SplitterConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the values are invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            chunk_size = config.chunk_size,
            overlap = config.overlap,
            "loaded splitter config"
        );
        Ok(config)
    }

    /// Check that the chunk size is positive, the overlap is smaller than
    /// the chunk size, and no separator is empty.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<()> {
        validate(self.chunk_size, self.overlap, self.separators.as_slice())
    }
}
