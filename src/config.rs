//! Configuration System
//!
//! Loads configuration from a TOML file. Command-line flags are applied on
//! top by the binary; every field has a default so an empty or missing file
//! is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./avocado.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Development mode: debug logging for the app and HTTP requests
    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
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
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load an explicit file, or the first one found in the default locations
    ///
    /// An explicit path that cannot be loaded is an error. Default locations
    /// that exist but fail to load are skipped and reported in
    /// [`ResolvedConfig::skipped`].
    pub fn resolve(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        match explicit {
            Some(path) => Ok(ResolvedConfig {
                config: Self::load(path)?,
                source: Some(path.to_path_buf()),
                skipped: Vec::new(),
            }),
            None => Ok(Self::load_first(&Self::default_paths())),
        }
    }

    /// Standard config locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("avocado-analytics").join("config.toml"))
            .into_iter()
            .chain(std::iter::once(PathBuf::from("./config.toml")))
            .collect()
    }

    /// Load the first existing file that parses, falling back to defaults
    pub fn load_first(paths: &[PathBuf]) -> ResolvedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    return ResolvedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        ResolvedConfig {
            config: Self::default(),
            source: None,
            skipped,
        }
    }
}

/// Outcome of config lookup
///
/// Lookup runs before logging is installed, so failures are returned to
/// the caller instead of logged here.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: Config,
    /// File the config came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Default-location files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Avocado Analytics Configuration
#
# Command-line flags (--data, --host, --port, --debug) override these settings.
# RUST_LOG, when set, overrides the logging level.

[dataset]
# CSV file with Date, AveragePrice, Total Volume, type and region columns
path = "./avocado.csv"

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

# Development mode: debug logging for the app and HTTP requests
debug = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
