//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};
use crate::spam::PatternSet;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Trigger vocabulary
    #[serde(default)]
    pub patterns: PatternsConfig,
    /// Batch processing
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatternsConfig {
    /// Lowercase trigger substrings, in matching order
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Number of concurrent workers for batch runs
    #[serde(default = "default_workers")]
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive (e.g., "info", "spam_rs=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_vocabulary() -> Vec<String> {
    PatternSet::default().into()
}

fn default_workers() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            vocabulary: default_vocabulary(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Build the validated pattern set
    pub fn pattern_set(&self) -> Result<PatternSet> {
        PatternSet::new(self.patterns.vocabulary.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.pattern_set()?;

        if self.batch.workers == 0 {
            return Err(SpamError::Config("batch.workers must be at least 1".to_string()));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SpamError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: PatternsConfig::default(),
            batch: BatchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
