//! Configuration loading and dataset path resolution
//!
//! Settings come from a small TOML file. Every field has a built-in default,
//! and a missing file is not an error: the service logs a warning and starts
//! with defaults.
//!
//! # Config file location
//! 1. `--config` command-line argument
//! 2. `TSD_CONFIG` environment variable
//! 3. `<config dir>/tsd/config.toml` (e.g. `~/.config/tsd/config.toml`)
//!
//! # Dataset path priority
//! 1. `--dataset` command-line argument
//! 2. `TSD_DATASET` environment variable
//! 3. `dataset_path` in the TOML file
//! 4. `./Data/twitter_dataset.csv`

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "TSD_CONFIG";

/// Environment variable naming the dataset CSV
pub const DATASET_ENV: &str = "TSD_DATASET";

/// Dataset location used when nothing else is configured
pub const DEFAULT_DATASET_PATH: &str = "./Data/twitter_dataset.csv";

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 5790;

/// Settings loaded from the TOML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Dataset CSV (optional, see module docs for priority)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub rewriter: RewriterConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Tone rewriter configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RewriterConfig {
    /// TOML file replacing some or all built-in tone tables
    #[serde(default)]
    pub tables_path: Option<PathBuf>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
            rewriter: RewriterConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Read and parse a config file
    ///
    /// # Errors
    /// [`Error::Io`] if the file cannot be read, [`Error::Config`] if it is
    /// not valid config TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, without logging
    ///
    /// For callers that read config before a subscriber is installed.
    /// `Ok(None)` means the file is absent; a file that exists but fails to
    /// parse is an error.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load `path`, falling back to defaults when the file does not exist
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_if_exists(path)? {
            Some(config) => {
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => {
                warn!(
                    "Config file {} not found, using built-in defaults",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }
}

/// Locate the config file (see module docs for priority)
///
/// Returns `None` only when no argument or variable is given and the
/// platform has no config directory.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|d| d.join("tsd").join("config.toml"))
}

/// Locate the dataset CSV (see module docs for priority)
pub fn resolve_dataset_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.dataset_path {
        return path.clone();
    }

    PathBuf::from(DEFAULT_DATASET_PATH)
}
