//! # Configuration Management for Tablehaus
//!
//! This crate provides the configuration structures used to provision a
//! database connection and to set up query logging.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, SslMode};
//!
//! let db_config = DatabaseConfig::new(
//!     "localhost".to_string(), 5432, "myapp".to_string(),
//!     "postgres".to_string(), "password".to_string(),
//! )
//! .with_ssl_mode(SslMode::Require);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "myapp"
//! username = "postgres"
//! password = "password"
//! ssl_mode = "disable"
//! min_connections = 1
//! max_connections = 10
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//!
//! [logging]
//! log_queries = true
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from TABLEHAUS_CONFIG or ./tablehaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./tablehaus.toml";
const CONFIG_PATH_ENV: &str = "TABLEHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// TLS negotiation with the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    #[default]
    Disable,
    Prefer,
    Require,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub ssl_mode: SslMode,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_seconds: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    #[serde(default)]
    pub max_lifetime_seconds: u64,
}

/// Query logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log every statement and its arguments through a connection hook
    #[serde(default)]
    pub log_queries: bool,
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    5
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or .env), or the default path
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with default pool settings
    pub fn new(
        host: String,
        port: u16,
        database: String,
        username: String,
        password: String,
    ) -> Self {
        Self {
            host,
            port,
            database,
            username,
            password,
            ssl_mode: SslMode::default(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            connection_timeout_seconds: default_connection_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            max_lifetime_seconds: 0,
        }
    }

    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    pub fn with_pool_size(mut self, min_connections: u32, max_connections: u32) -> Self {
        self.min_connections = min_connections;
        self.max_connections = max_connections;
        self
    }

    /// Validate database settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid(
                "Database host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "Database port cannot be zero".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Invalid(
                "Database name cannot be empty".to_string(),
            ));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Invalid(
                "Database username cannot be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(
                "Database min_connections cannot be greater than max_connections".to_string(),
            ));
        }
        if self.connection_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Database connection_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [database]
        host = "localhost"
        port = 5432
        database = "mads"
        username = "mads"
        password = "secret"
        ssl_mode = "require"
        min_connections = 2
        max_connections = 8
        connection_timeout_seconds = 10
        idle_timeout_seconds = 60
        max_lifetime_seconds = 120

        [logging]
        log_queries = true
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml_str(FULL).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.ssl_mode, SslMode::Require);
        assert_eq!(config.database.max_connections, 8);
        assert!(config.logging.log_queries);
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [database]
            host = "db"
            port = 5432
            database = "app"
            username = "app"
            password = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.database.ssl_mode, SslMode::Disable);
        assert_eq!(config.database.min_connections, 1);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.connection_timeout_seconds, 30);
        assert!(!config.logging.log_queries);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = AppConfig::from_toml_str(&FULL.replace("port = 5432", "port = 0")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("port")));

        let err = AppConfig::from_toml_str(&FULL.replace("min_connections = 2", "min_connections = 9"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("min_connections")));

        let err = AppConfig::from_toml_str(&FULL.replace("host = \"localhost\"", "host = \"\""))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_ssl_mode() {
        let err = AppConfig::from_toml_str(&FULL.replace("\"require\"", "\"enable\"")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_builder_style_database_config() {
        let config = DatabaseConfig::new(
            "localhost".into(),
            666,
            "mads".into(),
            "mads".into(),
            "mads".into(),
        )
        .with_ssl_mode(SslMode::Prefer)
        .with_pool_size(1, 3);

        assert!(config.validate().is_ok());
        assert_eq!(config.ssl_mode, SslMode::Prefer);
        assert_eq!(config.max_connections, 3);
    }
}
