//! GraphQL directory client
//!
//! Issues [`ALL_COUNTRIES_QUERY`] against the configured endpoint and returns
//! the countries in the directory's native shape.

use super::models::{CountriesData, GraphQlRequest, GraphQlResponse, GraphSourceCountry};
use super::ALL_COUNTRIES_QUERY;
use crate::adapters::traits::GraphCountrySource;
use crate::config::SourceConfig;
use crate::domain::{ExplorerError, Result, SourceError};
use crate::log_source_degraded;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const SOURCE_NAME: &str = "graphql";

/// Client for the GraphQL country directory (source A)
///
/// # Example
///
/// ```no_run
/// use country_explorer::adapters::graphql::GraphQlCountryClient;
/// use country_explorer::adapters::GraphCountrySource;
/// use country_explorer::config::SourceConfig;
///
/// # async fn example() -> country_explorer::domain::Result<()> {
/// let client = GraphQlCountryClient::new(&SourceConfig::new("https://countries.trevorblades.com/"))?;
/// let countries = client.fetch().await;
/// println!("{} countries", countries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphQlCountryClient {
    endpoint: String,
    client: Client,
}

impl GraphQlCountryClient {
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
                ExplorerError::Configuration(format!("Failed to build GraphQL HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the query, surfacing every failure as a [`SourceError`]
    ///
    /// `fetch()` is the fail-soft wrapper around this.
    pub async fn try_fetch(&self) -> std::result::Result<Vec<GraphSourceCountry>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "Querying GraphQL country directory");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query: ALL_COUNTRIES_QUERY,
            })
            .send()
            .await
            .map_err(|e| SourceError::from_transport(SOURCE_NAME, &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::from_status(status.as_u16(), body));
        }

        let body: GraphQlResponse<CountriesData> = resp
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let messages: Vec<&str> = body.errors.iter().map(|e| e.message.as_str()).collect();
        match body.data {
            Some(data) => {
                if !messages.is_empty() {
                    tracing::warn!(
                        endpoint = %self.endpoint,
                        errors = %messages.join("; "),
                        "GraphQL response carried errors alongside data"
                    );
                }
                Ok(data.countries)
            }
            None if !messages.is_empty() => Err(SourceError::QueryFailed(messages.join("; "))),
            None => Err(SourceError::InvalidResponse(
                "GraphQL response has neither data nor errors".to_string(),
            )),
        }
    }
}

#[async_trait]
impl GraphCountrySource for GraphQlCountryClient {
    async fn fetch(&self) -> Vec<GraphSourceCountry> {
        match self.try_fetch().await {
            Ok(countries) => {
                tracing::debug!(count = countries.len(), "GraphQL directory returned countries");
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
