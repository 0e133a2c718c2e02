//! Configuration management for the lead router
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, then `config/{env}`)
//! - Environment variables (`LEAD_ROUTER__` prefix, `__` separator)
//!
//! The team section carries the seed roster used at startup and restored
//! by the team `reset` action.

pub mod settings;
pub mod team;

pub use settings::{
    load_settings, load_settings_from, BucketConfig, ObservabilityConfig, RuntimeEnvironment,
    ServerConfig, Settings,
};
pub use team::{default_roster, SeedMember, TeamConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::FileNotFound(key),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
