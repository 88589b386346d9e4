//! Configuration for jotjot (stored in ~/.config/jotjot/config.toml)
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JotError, Result};
use crate::merge::{DEFAULT_PREVIEW_LENGTH, DEFAULT_SEPARATOR};

const CONFIG_DIR: &str = "jotjot";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "JOTJOT_CONFIG_DIR";

/// Threshold used for merge suggestions when none is configured
pub const DEFAULT_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JotConfig {
    #[serde(default)]
    pub similarity: SimilarityConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Minimum score for a pair to be reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Text inserted between the contents of merged jots
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            separator: default_separator(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Characters shown per jot in suggestions
    #[serde(default = "default_preview_length")]
    pub length: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            length: default_preview_length(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

/// Reject thresholds that would make every comparison meaningless
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if !threshold.is_finite() {
        crate::bail_invalid!("threshold", threshold);
    }
    Ok(threshold)
}

impl JotConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| JotError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| JotError::io_operation("read config", path.display(), e))?;
        let config: JotConfig = toml::from_str(&content)?;
        validate_threshold(config.similarity.threshold)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| JotError::io_operation("create config directory", dir.display(), e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| JotError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| JotError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
