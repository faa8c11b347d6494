//! External integrations.
//!
//! - [`graphql`] - GraphQL country directory (source A)
//! - [`rest`] - REST country directory (source B)
//! - [`traits`] - Source traits the catalog is written against
//!
//! # Design Pattern
//!
//! Adapters isolate the wire formats and HTTP details of each directory. The
//! catalog only sees [`GraphCountrySource`] and [`RestCountrySource`], which
//! lets tests substitute in-memory sources.
//!
//! ```rust,no_run
//! use country_explorer::adapters::{GraphQlCountryClient, RestCountryClient};
//! use country_explorer::config::ExplorerConfig;
//!
//! # fn example() -> country_explorer::domain::Result<()> {
//! let config = ExplorerConfig::default();
//! let graph = GraphQlCountryClient::new(&config.sources.graphql)?;
//! let rest = RestCountryClient::new(&config.sources.rest)?;
//! # Ok(())
//! # }
//! ```

pub mod graphql;
mod nullable;
pub mod rest;
pub mod traits;

pub use graphql::{GraphQlCountryClient, GraphSourceCountry};
pub use rest::{RestCountryClient, RestSourceCountry};
pub use traits::{GraphCountrySource, RestCountrySource};
