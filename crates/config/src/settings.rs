//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::{ConfigError, TeamConfig};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Team defaults and seed roster
    #[serde(default)]
    pub team: TeamConfig,

    #[serde(default)]
    pub buckets: BucketConfig,
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_team()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_production() && server.cors_enabled && server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 Only the localhost fallback will be allowed."
            );
        }

        Ok(())
    }

    fn validate_team(&self) -> Result<(), ConfigError> {
        let team = &self.team;

        if team.default_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "team.default_capacity".to_string(),
                message: "Default capacity must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (idx, member) in team.roster.iter().enumerate() {
            if member.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("team.roster[{}].name", idx),
                    message: "Name cannot be empty".to_string(),
                });
            }
            if !seen.insert(member.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("team.roster[{}].id", idx),
                    message: format!("Duplicate member id '{}'", member.id),
                });
            }
        }

        if self.environment.is_strict() && team.roster.is_empty() {
            tracing::warn!("Seed roster is empty; every lead will stay unassigned until a team is set");
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Expose Prometheus metrics on `/metrics`
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Bucket configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Color given to buckets created without one
    #[serde(default = "default_bucket_color")]
    pub default_color: String,
}

fn default_bucket_color() -> String {
    "blue".to_string()
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            default_color: default_bucket_color(),
        }
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (LEAD_ROUTER__ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings with an explicit config directory
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_path = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("LEAD_ROUTER")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        port = settings.server.port,
        roster = settings.team.roster.len(),
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeedMember;
    use lead_router_core::RepType;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.timeout_seconds, 30);
        assert_eq!(settings.team.default_capacity, 10);
        assert_eq!(settings.team.default_weekly_limit, 50);
        assert_eq!(settings.buckets.default_color, "blue");
        assert!(settings.observability.metrics_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();

        settings.server.port = 0;
        assert!(settings.validate_server().is_err());
        settings.server.port = 8080;

        settings.server.timeout_seconds = 0;
        assert!(settings.validate_server().is_err());
        settings.server.timeout_seconds = 30;

        assert!(settings.validate_server().is_ok());
    }

    #[test]
    fn test_production_cors_without_origins_is_allowed() {
        let mut settings = Settings::default();
        settings.environment = RuntimeEnvironment::Production;
        settings.server.cors_origins.clear();
        assert!(settings.validate_server().is_ok());
    }

    #[test]
    fn test_team_validation() {
        let mut settings = Settings::default();

        settings.team.default_capacity = 0;
        assert!(settings.validate_team().is_err());
        settings.team.default_capacity = 10;

        let dup = settings.team.roster[0].clone();
        settings.team.roster.push(dup);
        match settings.validate_team() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "team.roster[5].id"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
        settings.team.roster.pop();

        settings.team.roster.push(SeedMember {
            id: "blank".to_string(),
            name: "  ".to_string(),
            role: RepType::JuniorRep,
            capacity: None,
            weekly_limit: None,
        });
        assert!(settings.validate_team().is_err());
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            r#"
server:
  port: 9001
team:
  default_capacity: 4
  roster:
    - id: a
      name: Ana
      role: Enterprise Sales
    - id: b
      name: Bo
      role: Junior Rep / SDR
      capacity: 2
buckets:
  default_color: green
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.yaml"),
            "environment: staging\nserver:\n  timeout_seconds: 5\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.environment, RuntimeEnvironment::Staging);
        assert_eq!(settings.server.port, 9001);
        assert_eq!(settings.server.timeout_seconds, 5);
        assert_eq!(settings.buckets.default_color, "green");

        let members = settings.team.seed_members();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].capacity, 4);
        assert_eq!(members[1].capacity, 2);
        assert_eq!(members[1].role, RepType::JuniorRep);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), "server:\n  port: 0\n").unwrap();
        assert!(matches!(
            load_settings_from(dir.path(), None),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.team.roster.len(), 5);
    }
}
