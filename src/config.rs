//! Runtime configuration.
//!
//! Values come from an optional TOML file, then `TASKBOARD__*` environment
//! variables (double underscore separates nested keys, for example
//! `TASKBOARD__DATABASE__URL`).

use crate::task::domain::{StatusName, TaskDomainError};
use crate::task::services::ReferenceSeed;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "taskboard.toml";

const ENV_PREFIX: &str = "TASKBOARD";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or did not match the schema.
    #[error("invalid configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// The default status name is not a valid status name.
    #[error("invalid default status: {0}")]
    DefaultStatus(#[from] TaskDomainError),
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskboardConfig {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Status assigned to tasks created without one.
    #[serde(default = "default_status")]
    pub default_status: String,
    /// Reference data inserted by the seed command.
    #[serde(default)]
    pub seed: ReferenceSeed,
}

fn default_status() -> String {
    StatusName::TO_DO.to_owned()
}

impl TaskboardConfig {
    /// Loads configuration from `file` (if it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a source is malformed, a required
    /// value such as `database.url` is missing, or the default status name
    /// is invalid.
    pub fn load(file: &Path) -> Result<Self, ConfigLoadError> {
        let settings = Config::builder()
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Self::validated(settings.try_deserialize()?)
    }

    /// Parses configuration from TOML text without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] under the same conditions as
    /// [`TaskboardConfig::load`].
    pub fn from_toml(contents: &str) -> Result<Self, ConfigLoadError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Self::validated(settings.try_deserialize()?)
    }

    /// Returns the configured default status as a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the name is empty or too long.
    pub fn default_status_name(&self) -> Result<StatusName, TaskDomainError> {
        StatusName::new(self.default_status.as_str())
    }

    fn validated(config: Self) -> Result<Self, ConfigLoadError> {
        config.default_status_name()?;
        Ok(config)
    }
}
