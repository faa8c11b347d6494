//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the country explorer configuration file.

use super::EXIT_CONFIG;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  GraphQL Source: {} (timeout {}s)",
            config.sources.graphql.endpoint, config.sources.graphql.timeout_seconds
        );
        println!(
            "  REST Source: {} (timeout {}s)",
            config.sources.rest.endpoint, config.sources.rest.timeout_seconds
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let args = ValidateArgs {};
        let code = args
            .execute("/nonexistent/country-explorer.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_valid_file_exits_zero() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[sources.rest]\nendpoint = \"http://localhost:8080/all\"\ntimeout_seconds = 5"
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sources.graphql]\nendpoint = \"ftp://example.com\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }
}
