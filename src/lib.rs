// Country Explorer - unified country data from two public directories
// Copyright (c) 2025 Country Explorer Contributors
// Licensed under the MIT License

//! # Country Explorer - unified country data
//!
//! Country Explorer joins two public country directories into one catalog:
//! a GraphQL directory (codes, names, languages, states) and a REST directory
//! (population, area, flags, demographics).
//!
//! ## Overview
//!
//! This library provides:
//! - **Fetching** both directories concurrently, each fail-soft to an empty list
//! - **Reconciling** them by ISO code into [`domain::UnifiedCountry`] records
//! - **Caching** the merged catalog behind a single-flight load
//! - **Querying** the catalog by search term, continent and sort order
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (catalog, reconciliation, queries)
//! - [`adapters`] - GraphQL and REST directory clients
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and catalog notices
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use country_explorer::config::ExplorerConfig;
//! use country_explorer::core::catalog::CountryCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = CountryCatalog::from_config(&ExplorerConfig::default())?;
//!
//!     let countries = catalog.get_all_countries().await?;
//!     println!("Loaded {} countries", countries.len());
//!
//!     let japan = catalog.get_country_by_code("JPN").await?;
//!     println!("{} - capital {}", japan.name, japan.capital);
//!     Ok(())
//! }
//! ```
//!
//! ## Queries
//!
//! Query functions are pure and never touch the cache:
//!
//! ```rust,no_run
//! use country_explorer::core::query::{filter_by_continent, search_countries, sort_countries, SortKey, SortOrder};
//! use country_explorer::domain::UnifiedCountry;
//!
//! # fn example(countries: &[UnifiedCountry]) {
//! let europe = filter_by_continent("Europe", countries);
//! let lands = search_countries("land", &europe);
//! let by_population = sort_countries(&lands, SortKey::Population, SortOrder::Desc);
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Source failures are logged and degrade to empty lists. The catalog itself
//! surfaces [`domain::CatalogError`], which separates a failed load from a
//! lookup miss:
//!
//! ```rust,no_run
//! use country_explorer::core::catalog::CountryCatalog;
//! use country_explorer::domain::CatalogError;
//!
//! # async fn example(catalog: &CountryCatalog) {
//! match catalog.get_country_by_code("XX").await {
//!     Ok(country) => println!("{}", country.name),
//!     Err(CatalogError::NotFound(code)) => println!("no country {code}"),
//!     Err(e) => eprintln!("catalog unavailable: {e}"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
