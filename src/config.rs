//! Configuration loading and management for condense.
//!
//! Loads settings from `condense.toml` in the current directory or
//! `~/.config/condense/`, falling back to built-in defaults when no file
//! exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Summary defaults, overridable on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Default summary length in sentences.
    #[serde(default = "default_sentences")]
    pub sentences: usize,
    /// Maximum chunk size in words for long documents.
    #[serde(default = "default_max_chunk_words")]
    pub max_chunk_words: usize,
}

/// HTTP client settings for web and transcript fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_sentences() -> usize {
    6
}

fn default_max_chunk_words() -> usize {
    500
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentences: default_sentences(),
            max_chunk_words: default_max_chunk_words(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations, or defaults when no
    /// file is present.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("condense.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("condense").join("condense.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.summary.sentences, 6);
        assert_eq!(config.summary.max_chunk_words, 500);
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[summary]\nsentences = 10").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.summary.sentences, 10);
        assert_eq!(config.summary.max_chunk_words, 500);
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "summary = \"not a table\"").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
