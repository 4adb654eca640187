//! Configuration management for the plotmarket engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{MarketError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// Which similarity strategy the search service runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Structural when the store reports it reachable, else substring
    #[default]
    Auto,
    /// Always trigram similarity
    Structural,
    /// Always case-insensitive substring matching
    Substring,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoringMode::Auto => "auto",
            ScoringMode::Structural => "structural",
            ScoringMode::Substring => "substring",
        };
        f.write_str(name)
    }
}

impl FromStr for ScoringMode {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ScoringMode::Auto),
            "structural" | "trigram" => Ok(ScoringMode::Structural),
            "substring" => Ok(ScoringMode::Substring),
            other => Err(MarketError::ConfigError(format!(
                "Unknown scoring mode '{other}' (expected auto, structural or substring)"
            ))),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Page size used when the request gives none (or a non-positive one)
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Optional ceiling on requested page sizes, off unless configured.
    ///
    /// With a ceiling set, paging with a larger size than the ceiling
    /// no longer walks the whole result.
    #[serde(default)]
    pub max_page_size: Option<u64>,

    /// Queries are truncated to this many characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    #[serde(default)]
    pub scoring: ScoringMode,

    /// Minimum trigram similarity for a structural match
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the listing snapshot
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Media host credentials
///
/// The engine only stores image references; these are handed to
/// whatever renders or uploads images.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaConfig {
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl MediaConfig {
    /// True when enough is set to sign uploads
    pub fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Secret-free copy for display
    pub fn redacted(&self) -> Self {
        Self {
            cloud_name: self.cloud_name.clone(),
            api_key: self.api_key.as_ref().map(|_| "<redacted>".to_string()),
            api_secret: self.api_secret.as_ref().map(|_| "<redacted>".to_string()),
        }
    }
}

// Default value functions
fn default_page_size() -> u64 {
    10
}

fn default_max_query_length() -> usize {
    200
}

fn default_similarity_threshold() -> f64 {
    0.3
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: None,
            max_query_length: default_max_query_length(),
            scoring: ScoringMode::default(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MarketError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PLOTMARKET_CONFIG env var
    /// 2. XDG config file (~/.config/plotmarket/config.toml)
    /// 3. ./plotmarket.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PLOTMARKET_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("plotmarket.toml").exists() {
                Self::from_file("plotmarket.toml")?
            } else {
                Self::default()
            }
        };

        // Keep the snapshot under XDG data unless placed explicitly
        if env::var("PLOTMARKET_DATA_DIR").is_err() && config.storage.data_dir == default_data_dir()
        {
            config.storage.data_dir = xdg.data_dir.clone();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparseable numbers are ignored; an unknown scoring mode is an error.
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(data_dir) = env::var("PLOTMARKET_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(size) = env::var("PLOTMARKET_DEFAULT_PAGE_SIZE") {
            if let Ok(n) = size.parse() {
                self.search.default_page_size = n;
            }
        }
        if let Ok(size) = env::var("PLOTMARKET_MAX_PAGE_SIZE") {
            if let Ok(n) = size.parse() {
                self.search.max_page_size = Some(n);
            }
        }
        if let Ok(len) = env::var("PLOTMARKET_MAX_QUERY_LENGTH") {
            if let Ok(n) = len.parse() {
                self.search.max_query_length = n;
            }
        }
        if let Ok(mode) = env::var("PLOTMARKET_SCORING") {
            self.search.scoring = mode.parse()?;
        }
        if let Ok(threshold) = env::var("PLOTMARKET_SIMILARITY_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.search.similarity_threshold = t;
            }
        }

        // Media host credentials keep their conventional names
        if let Ok(name) = env::var("CLOUDINARY_CLOUD_NAME") {
            self.media.cloud_name = Some(name);
        }
        if let Ok(key) = env::var("CLOUDINARY_API_KEY") {
            self.media.api_key = Some(key);
        }
        if let Ok(secret) = env::var("CLOUDINARY_API_SECRET") {
            self.media.api_secret = Some(secret);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_page_size == 0 {
            return Err(MarketError::ConfigError(
                "Default page size must be non-zero".to_string(),
            ));
        }

        if let Some(max) = self.search.max_page_size {
            if max == 0 {
                return Err(MarketError::ConfigError(
                    "Max page size must be non-zero when set".to_string(),
                ));
            }
            if self.search.default_page_size > max {
                return Err(MarketError::ConfigError(
                    "Default page size cannot exceed max page size".to_string(),
                ));
            }
        }

        if self.search.max_query_length == 0 {
            return Err(MarketError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        let threshold = self.search.similarity_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(MarketError::ConfigError(format!(
                "Similarity threshold must be in (0, 1], got {threshold}"
            )));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        let media = self.media.redacted();
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data dir: {:?}", self.storage.data_dir);
        tracing::info!("  Default page size: {}", self.search.default_page_size);
        tracing::info!("  Max page size: {:?}", self.search.max_page_size);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Scoring: {}", self.search.scoring);
        tracing::info!(
            "  Similarity threshold: {}",
            self.search.similarity_threshold
        );
        tracing::info!("  Media cloud: {:?}", media.cloud_name);
        tracing::info!("  Media api key: {:?}", media.api_key);
    }
}
