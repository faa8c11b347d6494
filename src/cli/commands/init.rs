//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL};
use crate::config::{DEFAULT_GRAPHQL_ENDPOINT, DEFAULT_REST_ENDPOINT};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "country-explorer.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing country explorer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} if you mirror either directory", self.output);
                println!("  2. Validate configuration: country-explorer validate-config");
                println!("  3. Browse: country-explorer list --continent Europe");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> String {
        format!(
            r#"# Country Explorer Configuration File
#
# Values may reference environment variables with ${{VAR_NAME}}, and any
# setting can be overridden with COUNTRY_EXPLORER_<SECTION>_<KEY>, for example
# COUNTRY_EXPLORER_SOURCES_REST_ENDPOINT.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# GraphQL country directory: codes, names, languages, states
[sources.graphql]
endpoint = "{DEFAULT_GRAPHQL_ENDPOINT}"
timeout_seconds = 30

# REST country directory: population, area, flags, demographics
[sources.rest]
endpoint = "{DEFAULT_REST_ENDPOINT}"
timeout_seconds = 30

[logging]
# JSON log files next to the console output
local_enabled = false
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        )
    }
}
