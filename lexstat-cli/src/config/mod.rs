//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use lexstat_core::DEFAULT_WINDOW;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Co-occurrence configuration
    #[serde(default)]
    pub cooccurrence: CooccurrenceConfig,

    /// Word frequency configuration
    #[serde(default)]
    pub frequency: FrequencyConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }
}

/// Co-occurrence settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CooccurrenceConfig {
    /// Forward window in token positions
    pub window: usize,
}

impl Default for CooccurrenceConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

/// Word frequency settings
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Keep only words longer than this many characters (0 = keep all)
    pub min_length: usize,

    /// Print only the most common N words (0 = all)
    pub top: usize,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}
