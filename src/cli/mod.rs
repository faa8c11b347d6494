//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the country explorer
//! using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Country Explorer - unified view over two public country directories
#[derive(Parser, Debug)]
#[command(name = "country-explorer")]
#[command(version, about, long_about = None)]
#[command(author = "Country Explorer Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "country-explorer.toml",
        env = "COUNTRY_EXPLORER_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COUNTRY_EXPLORER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List countries, optionally searched, filtered and sorted
    List(commands::list::ListArgs),

    /// Show one country by its 2- or 3-letter code
    Show(commands::show::ShowArgs),

    /// List the continents present in the catalog
    Continents(commands::continents::ContinentsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
