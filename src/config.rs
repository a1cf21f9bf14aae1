//! Collector configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! root = "/sdcard/Documents/pathcollector"
//! touch_tolerance = 4.0
//! tag_cycle = 10
//! ```
//!
//! `root` is required; the other keys fall back to the defaults below.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Minimum per-axis movement before a move sample is recorded
pub const DEFAULT_TOUCH_TOLERANCE: f32 = 4.0;

/// Number of rotating numeric tags
pub const DEFAULT_TAG_CYCLE: u32 = 10;

/// Settings for capture and storage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    /// Repository root directory
    pub root: PathBuf,

    /// Minimum |dx| or |dy| between recorded move samples
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f32,

    /// Tags rotate through `0..tag_cycle`
    #[serde(default = "default_tag_cycle")]
    pub tag_cycle: u32,
}

fn default_touch_tolerance() -> f32 {
    DEFAULT_TOUCH_TOLERANCE
}

fn default_tag_cycle() -> u32 {
    DEFAULT_TAG_CYCLE
}

impl CollectorConfig {
    /// Configuration with default capture settings for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CollectorConfig {
            root: root.into(),
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            tag_cycle: DEFAULT_TAG_CYCLE,
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: CollectorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Set the repository root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the touch tolerance.
    pub fn with_touch_tolerance(mut self, tolerance: f32) -> Self {
        self.touch_tolerance = tolerance;
        self
    }

    /// Set the tag cycle length.
    pub fn with_tag_cycle(mut self, cycle: u32) -> Self {
        self.tag_cycle = cycle;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.touch_tolerance.is_finite() || self.touch_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "touch_tolerance must be a non-negative number, got {}",
                self.touch_tolerance
            )));
        }
        if self.tag_cycle == 0 {
            return Err(Error::Config("tag_cycle must be at least 1".to_string()));
        }
        Ok(())
    }
}
