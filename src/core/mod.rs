//! Core business logic for the country explorer.
//!
//! # Modules
//!
//! - [`catalog`] - Cached, single-flight unified data service
//! - [`reconcile`] - Joining and merging the two source listings
//! - [`query`] - Search, continent filter and sort over the unified list
//!
//! # Example
//!
//! ```rust,no_run
//! use country_explorer::config::load_config_or_default;
//! use country_explorer::core::catalog::CountryCatalog;
//! use country_explorer::core::query::{CountryView, SortKey, SortOrder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("country-explorer.toml")?;
//! let catalog = CountryCatalog::from_config(&config)?;
//!
//! let view = CountryView::new()
//!     .with_continent("Europe")
//!     .with_sort(SortKey::Population, SortOrder::Desc);
//! for country in catalog.query(&view).await? {
//!     println!("{} {}", country.code, country.population);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod query;
pub mod reconcile;
