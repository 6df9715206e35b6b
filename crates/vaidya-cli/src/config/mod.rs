//! Configuration loading for the Vaidya console.
//! Reads vaidya.toml from the current directory or the path in VAIDYA_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vaidya_common::{Result, VaidyaError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/diseases.csv".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}


impl Config {
    /// Load configuration from vaidya.toml.
    /// Checks VAIDYA_CONFIG env var first, then the current directory; a
    /// missing file yields the defaults, a malformed one is an error.
    pub fn load() -> Result<Self> {
        let path = std::env::var("VAIDYA_CONFIG").unwrap_or_else(|_| "vaidya.toml".to_string());
        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| VaidyaError::Config(format!("{path}: {e}")))?;
        Ok(config)
    }
}
