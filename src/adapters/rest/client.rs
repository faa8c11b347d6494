//! REST directory client
//!
//! One unfiltered GET returning the full country list.

use super::models::RestSourceCountry;
use crate::adapters::traits::RestCountrySource;
use crate::config::SourceConfig;
use crate::domain::{ExplorerError, Result, SourceError};
use crate::log_source_degraded;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;

const SOURCE_NAME: &str = "rest";

/// Client for the REST country directory (source B)
#[derive(Debug, Clone)]
pub struct RestCountryClient {
    endpoint: String,
    client: Client,
}

impl RestCountryClient {
    /// Create a new client from source configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(10)))
            .user_agent(concat!("country-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ExplorerError::Configuration(format!("Failed to build REST HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Listing URL this client fetches
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the listing, surfacing every failure as a [`SourceError`]
    pub async fn try_fetch(&self) -> std::result::Result<Vec<RestSourceCountry>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching REST country listing");

        let resp = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::from_transport(SOURCE_NAME, &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::from_status(status.as_u16(), body));
        }

        let records = resp
            .json::<Vec<Value>>()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        Ok(decode_listing(records))
    }
}

/// Decode each listing entry on its own; malformed entries are dropped.
fn decode_listing(records: Vec<Value>) -> Vec<RestSourceCountry> {
    let total = records.len();
    let countries: Vec<RestSourceCountry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let code = record
                .get("cca3")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string();
            serde_json::from_value(record)
                .map_err(|e| {
                    tracing::warn!(
                        position,
                        code = %code,
                        error = %e,
                        "Skipping malformed REST record"
                    );
                })
                .ok()
        })
        .collect();

    if countries.len() < total {
        tracing::warn!(
            kept = countries.len(),
            dropped = total - countries.len(),
            "REST listing contained malformed records"
        );
    }
    countries
}

#[async_trait]
impl RestCountrySource for RestCountryClient {
    async fn fetch(&self) -> Vec<RestSourceCountry> {
        match self.try_fetch().await {
            Ok(countries) => {
                tracing::debug!(count = countries.len(), "REST directory returned countries");
                countries
            }
            Err(e) => {
                log_source_degraded!(SOURCE_NAME, self.endpoint, e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}
