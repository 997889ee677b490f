use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/stepform/config.toml` on Unix/macOS, or the platform
    /// equivalent from `dirs::config_dir()`. Falls back to the current
    /// directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stepform").join("config.toml")
    }

    /// Load from `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

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

    /// Checks:
    /// - tick rate is non-zero
    /// - organization names are non-empty and unique
    /// - collaborator ids are non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wizard.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "wizard.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for org in &self.wizard.organizations {
            if org.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Organization names must not be empty".to_string(),
                });
            }
            if !seen.insert(org.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Organization '{}' listed more than once", org),
                });
            }
        }

        let mut seen = HashSet::new();
        for collaborator in &self.wizard.collaborators {
            if collaborator.id.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Collaborator '{}' has an empty id", collaborator.login),
                });
            }
            if !seen.insert(collaborator.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Collaborator id '{}' listed more than once", collaborator.id),
                });
            }
        }

        Ok(())
    }

    /// Replace the organization list when any are given on the command line.
    pub fn override_organizations(&mut self, organizations: Vec<String>) {
        if !organizations.is_empty() {
            self.wizard.organizations = organizations;
        }
    }
}
