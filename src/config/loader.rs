use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{NamespaceError, ResourceNamespace};
use crate::config::types::{ApiConfig, Config};

/// Why a config file could not be turned into a usable [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Cannot read config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the `[api]` / `[logging]` layout.
    #[error("Invalid TOML in config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid recipebox settings: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config_dir>/recipebox/config.toml`, or `./recipebox/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebox")
            .join("config.toml")
    }

    /// Loads the implicit config file; absent means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&Self::config_path())
    }

    /// Like [`Config::load_from`], but a file that does not exist yields
    /// `Config::default()`.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Reads, parses and validates `path`. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an http(s) URL
    /// - `api.namespace`, when set, is a valid resource namespace
    /// - `api.connect_timeout_seconds` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", self.api.base_url, e),
            }
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https",
                    self.api.base_url
                ),
            });
        }

        if let Some(namespace) = &self.api.namespace {
            namespace
                .parse::<ResourceNamespace>()
                .map_err(|e| ConfigError::ValidationError {
                    message: e.to_string(),
                })?;
        }

        if self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl ApiConfig {
    /// The configured namespace, or a freshly generated one.
    ///
    /// Call once at startup and pass the result to every API client.
    pub fn resolve_namespace(&self) -> Result<ResourceNamespace, ConfigError> {
        match &self.namespace {
            Some(namespace) => namespace.parse().map_err(|e: NamespaceError| {
                ConfigError::ValidationError {
                    message: e.to_string(),
                }
            }),
            None => {
                let generated = ResourceNamespace::generate();
                tracing::debug!(namespace = %generated, "Generated resource namespace");
                Ok(generated)
            }
        }
    }
}
