//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::directive::DEFAULT_MAX_LINE_LENGTH;

/// Name of the project-level config file in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".argsfile.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Longest accepted args file line in bytes.
    pub max_line_length: usize,

    /// Suffix of the default args file (`<app><auto_suffix>`).
    pub auto_suffix: String,

    /// Suffix of selectable args files (`<app>*<args_suffix>`).
    pub args_suffix: String,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            auto_suffix: ".auto.args".to_string(),
            args_suffix: ".args".to_string(),
            audit: AuditConfig::default(),
        }
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// A config file as written; unset fields stay `None` so merging can tell
/// them apart from defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct PartialConfig {
    max_line_length: Option<usize>,
    auto_suffix: Option<String>,
    args_suffix: Option<String>,
    audit: AuditConfig,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = Self::user_config_path()
            && let Some(user_config) = Self::load_file(&path)?
        {
            config.merge(user_config);
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_file(&cwd.join(PROJECT_CONFIG_FILE))?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(toml::from_str(content)?);
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Option<PartialConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Get user config path.
    /// Respects ARGSFILE_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARGSFILE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("argsfile/config.toml"))
    }

    /// Merge a config file into this one (set fields take precedence).
    fn merge(&mut self, other: PartialConfig) {
        if let Some(max) = other.max_line_length {
            self.max_line_length = max;
        }
        if let Some(suffix) = other.auto_suffix {
            self.auto_suffix = suffix;
        }
        if let Some(suffix) = other.args_suffix {
            self.args_suffix = suffix;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
        }
        if other.audit.path.is_some() {
            self.audit.path = other.audit.path;
        }
    }

    /// Audit log path, if audit logging is enabled.
    pub fn audit_path(&self) -> Option<&Path> {
        if !self.audit.enabled {
            return None;
        }
        self.audit.path.as_deref().map(Path::new)
    }
}
