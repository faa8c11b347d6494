//! REST country directory adapter (source B)
//!
//! Provides demographic and geographic detail: population, area, coordinates,
//! flags, timezones and the alpha-3 codes.

pub mod client;
pub mod models;

pub use client::RestCountryClient;
pub use models::{RestName, RestSourceCountry};
