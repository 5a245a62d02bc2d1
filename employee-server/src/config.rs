//! Server configuration

use std::collections::HashMap;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("{name} must be set in {environment} environment")]
    Missing {
        name: &'static str,
        environment: String,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; the in-memory store is used when unset
    pub database_url: Option<String>,
    /// sqlx pool size
    pub database_max_connections: u32,
    /// Bind address
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Directory for daily-rolling log files
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 5,
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an in-memory map of variables
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        // Empty values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT").unwrap_or(defaults.environment);
        let database_url = var("DATABASE_URL");
        if database_url.is_none() && environment == "production" {
            return Err(ConfigError::Missing {
                name: "DATABASE_URL",
                environment,
            });
        }

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            http_host: var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), defaults.http_port)?,
            environment,
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_or("LOG_JSON", var("LOG_JSON"), defaults.log_json)?,
            log_dir: var("LOG_DIR"),
        })
    }

    /// `host:port` to bind the HTTP listener to
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
