//! Configuration management for the country explorer.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `COUNTRY_EXPLORER_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use country_explorer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("country-explorer.toml")?;
//! println!("GraphQL source: {}", config.sources.graphql.endpoint);
//! println!("REST source: {}", config.sources.rest.endpoint);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [sources.graphql]
//! endpoint = "https://countries.trevorblades.com/"
//! timeout_seconds = 30
//!
//! [sources.rest]
//! endpoint = "https://restcountries.com/v3.1/all"
//! timeout_seconds = 30
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, ExplorerConfig, LoggingConfig, SourceConfig, SourcesConfig,
    DEFAULT_GRAPHQL_ENDPOINT, DEFAULT_REST_ENDPOINT,
};
