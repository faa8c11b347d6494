//! GraphQL country directory adapter (source A)
//!
//! Provides linguistic and administrative detail: native names, languages,
//! states, dialing codes and currencies.

pub mod client;
pub mod models;

pub use client::GraphQlCountryClient;
pub use models::{GraphSourceCountry, ALL_COUNTRIES_QUERY};
