//! Extractor configuration
//!
//! Every field has a serde default so a config file only needs to name the
//! values it changes.

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory
pub const CONFIG_DIR_NAME: &str = "codeharvest";

/// Configuration for an extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Root directory that receives one subdirectory per topic
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Detector and namer thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Numeric limits used by the detectors, merger and topic namer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Fenced bodies at or below this many characters are dropped
    #[serde(default = "default_fenced_min_chars")]
    pub fenced_min_chars: usize,

    /// Indented groups need more than this many lines
    #[serde(default = "default_indented_min_lines")]
    pub indented_min_lines: usize,

    /// Indented groups need more than this many trimmed characters
    #[serde(default = "default_indented_min_chars")]
    pub indented_min_chars: usize,

    /// Distinct code signatures required before an indented group counts as code
    #[serde(default = "default_code_signal_min")]
    pub code_signal_min: usize,

    /// Indented blocks starting closer than this to a fenced block may be duplicates
    #[serde(default = "default_duplicate_line_window")]
    pub duplicate_line_window: usize,

    /// Maximum topic slug length in characters
    #[serde(default = "default_topic_max_len")]
    pub topic_max_len: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("extracted_code")
}

fn default_fenced_min_chars() -> usize {
    20
}

fn default_indented_min_lines() -> usize {
    3
}

fn default_indented_min_chars() -> usize {
    50
}

fn default_code_signal_min() -> usize {
    2
}

fn default_duplicate_line_window() -> usize {
    5
}

fn default_topic_max_len() -> usize {
    50
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fenced_min_chars: default_fenced_min_chars(),
            indented_min_lines: default_indented_min_lines(),
            indented_min_chars: default_indented_min_chars(),
            code_signal_min: default_code_signal_min(),
            duplicate_line_window: default_duplicate_line_window(),
            topic_max_len: default_topic_max_len(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            thresholds: Thresholds::default(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from an explicit path, the user config, or defaults
    ///
    /// An explicit path must exist. The user config
    /// (`<config_dir>/codeharvest/config.toml`) is only read when present.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ExtractError::Config {
                    path: path.to_path_buf(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Self::load(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|reason| ExtractError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Location of the per-user config file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Override the output root
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
