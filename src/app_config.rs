use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::store::column_index;
use crate::translation::{MAX_CHARS_PER_REQUEST, MAX_TEXTS_PER_REQUEST};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default source language code (DeepL style, e.g. "DE")
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Default target language code (DeepL style, e.g. "FR")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// DeepL API key; the DEEPL_API_KEY environment variable takes
    /// precedence over this value
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL, empty for the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Spreadsheet-style letters of the columns to translate, in order
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,

    /// Zero-based offset of the first data row below the header
    #[serde(default)]
    pub start_row: usize,

    /// Max concurrent requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    /// Max texts per request
    #[serde(default = "default_max_items_per_request")]
    pub max_items_per_request: usize,

    /// Max total characters per request
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate filter for this level
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    // DeepL upstream default language pair
    "DE".to_string()
}

fn default_target_language() -> String {
    "FR".to_string()
}

fn default_columns() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_concurrent_requests() -> usize {
    4
}

fn default_max_items_per_request() -> usize {
    MAX_TEXTS_PER_REQUEST
}

fn default_max_chars_per_request() -> usize {
    MAX_CHARS_PER_REQUEST
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when it does not
    /// exist
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write a default configuration file
    pub fn create_default_at(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        let content = serde_json::to_string_pretty(&config)?;
        std::fs::write(path.as_ref(), content).with_context(|| {
            format!("failed to write config file: {}", path.as_ref().display())
        })?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("source_language must not be empty"));
        }
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("target_language must not be empty"));
        }
        if self.concurrent_requests == 0 {
            return Err(anyhow!("concurrent_requests must be at least 1"));
        }
        if self.max_items_per_request == 0 || self.max_items_per_request > MAX_TEXTS_PER_REQUEST {
            return Err(anyhow!(
                "max_items_per_request must be between 1 and {}",
                MAX_TEXTS_PER_REQUEST
            ));
        }
        if self.max_chars_per_request == 0 || self.max_chars_per_request > MAX_CHARS_PER_REQUEST {
            return Err(anyhow!(
                "max_chars_per_request must be between 1 and {}",
                MAX_CHARS_PER_REQUEST
            ));
        }
        for column in &self.columns {
            column_index(column)?;
        }

        Ok(())
    }

    /// The credential to use: environment variable first, config value as
    /// fallback. May be empty, in which case the client refuses to send.
    pub fn resolved_api_key(&self) -> String {
        match std::env::var("DEEPL_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => self.api_key.clone(),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            api_key: String::new(),
            endpoint: String::new(),
            columns: default_columns(),
            start_row: 0,
            concurrent_requests: default_concurrent_requests(),
            max_items_per_request: default_max_items_per_request(),
            max_chars_per_request: default_max_chars_per_request(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
