//! Serializable replay configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a replay config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to reproduce a replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayConfig {
    pub ledger: LedgerConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ledger construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerConfig {
    /// Flat fee charged once per applied fill.
    pub brokerage_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// CSV fill stream. Relative paths resolve against the config file.
    pub fills: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            pretty: default_pretty(),
        }
    }
}

impl ReplayConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ReplayConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; relative input/output paths are rebased onto
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            if config.input.fills.is_relative() {
                config.input.fills = base.join(&config.input.fills);
            }
            if config.output.dir.is_relative() {
                config.output.dir = base.join(&config.output.dir);
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.ledger.brokerage_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "brokerage_rate must be a finite, non-negative number, got {rate}"
            )));
        }
        if self.input.fills.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input.fills must not be empty".into()));
        }
        Ok(())
    }
}
