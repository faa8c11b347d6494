//! Continents command implementation

use super::{open_catalog, EXIT_FATAL};
use clap::Args;

/// Arguments for the continents command
#[derive(Args, Debug)]
pub struct ContinentsArgs {}

impl ContinentsArgs {
    /// Execute the continents command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let catalog = match open_catalog(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        match catalog.continents().await {
            Ok(continents) => {
                for continent in continents {
                    println!("{continent}");
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to load countries");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}
