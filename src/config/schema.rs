//! Configuration schema types
//!
//! This module defines the configuration structure for the country explorer.
//! Every section has defaults, so an empty file (or no file) is a working
//! configuration pointing at the public directories.

use serde::{Deserialize, Serialize};
use url::Url;

/// Public GraphQL country directory
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://countries.trevorblades.com/";

/// Public REST country directory, full listing
pub const DEFAULT_REST_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Upstream country directories
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExplorerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.sources.graphql.validate("sources.graphql")?;
        self.sources.rest.validate("sources.rest")?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Both upstream directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// GraphQL directory (source A)
    #[serde(default = "default_graphql_source")]
    pub graphql: SourceConfig,

    /// REST directory (source B)
    #[serde(default = "default_rest_source")]
    pub rest: SourceConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            graphql: default_graphql_source(),
            rest: default_rest_source(),
        }
    }
}

/// Connection settings for one upstream directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint URL (GraphQL endpoint or REST listing URL)
    pub endpoint: String,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl SourceConfig {
    /// Creates a source config with the default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    fn validate(&self, section: &str) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err(format!("{section}.endpoint cannot be empty"));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("{section}.endpoint is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!("{section}.endpoint must start with http:// or https://"));
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(format!(
                "{section}.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".into());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_graphql_source() -> SourceConfig {
    SourceConfig::new(DEFAULT_GRAPHQL_ENDPOINT)
}

fn default_rest_source() -> SourceConfig {
    SourceConfig::new(DEFAULT_REST_ENDPOINT)
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
