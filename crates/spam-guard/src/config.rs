//! Configuration for spam-guard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GuardError, Result};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:5000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Paths to the fitted model artifacts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_vectorizer")]
    pub vectorizer: PathBuf,
    #[serde(default = "default_classifier")]
    pub classifier: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_vectorizer() -> PathBuf {
    PathBuf::from("artifacts/vectorizer.json")
}

fn default_classifier() -> PathBuf {
    PathBuf::from("artifacts/classifier.json")
}

fn default_filter() -> String {
    "spam_guard=info,spam_classifier=info,tower_http=info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            vectorizer: default_vectorizer(),
            classifier: default_classifier(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl GuardConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuardError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| GuardError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load `path` if given, otherwise development defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| {
                GuardError::Config(format!(
                    "Invalid listen address '{}': {}",
                    self.server.listen_addr, e
                ))
            })?;
        Ok(())
    }
}
