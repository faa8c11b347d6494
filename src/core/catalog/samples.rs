//! Tabular samples of each source listing, emitted as notices at load

use crate::adapters::{GraphSourceCountry, RestSourceCountry};
use serde_json::{json, Value};

/// Rows per sample table
pub const SAMPLE_SIZE: usize = 5;

/// First rows of the GraphQL listing
pub fn graph_sample(countries: &[GraphSourceCountry]) -> Vec<Value> {
    countries
        .iter()
        .take(SAMPLE_SIZE)
        .map(|c| {
            json!({
                "code": c.code,
                "name": c.name,
                "native": c.native,
                "capital": c.capital,
                "currency": c.currency,
                "emoji": c.emoji,
            })
        })
        .collect()
}

/// First rows of the REST listing
pub fn rest_sample(countries: &[RestSourceCountry]) -> Vec<Value> {
    countries
        .iter()
        .take(SAMPLE_SIZE)
        .map(|c| {
            json!({
                "code": c.cca2,
                "name": c.name.common,
                "population": c.population,
                "area": c.area,
                "region": c.region,
                "independent": c.independent,
            })
        })
        .collect()
}
