use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::lists::DomainListConfig;
use super::logging::LoggingConfig;
use super::maintenance::MaintenanceConfig;
use super::routing::RoutingConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-route.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-route/config.toml";

/// One week; longer penalties are better expressed as an always-blocked entry.
pub const MAX_TRANSIENT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Main configuration structure for Ferrous Route
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Learning behaviour of the classifier
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Domain list files and seed lists
    #[serde(default)]
    pub lists: DomainListConfig,

    /// Background flush and sweep intervals
    #[serde(default)]
    pub maintenance: MaintenanceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-route.toml in current directory
    /// 3. /etc/ferrous-route/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.data_dir {
            self.lists.dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routing.transient_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "transient_ttl_secs cannot be 0".to_string(),
            ));
        }

        if self.routing.transient_ttl_secs > MAX_TRANSIENT_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "transient_ttl_secs cannot exceed {}",
                MAX_TRANSIENT_TTL_SECS
            )));
        }

        if self.routing.transient_max_entries == 0 {
            return Err(ConfigError::Validation(
                "transient_max_entries cannot be 0".to_string(),
            ));
        }

        if self.maintenance.flush_interval_secs == 0 || self.maintenance.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Maintenance intervals cannot be 0".to_string(),
            ));
        }

        if self.lists.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Domain list directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
}
