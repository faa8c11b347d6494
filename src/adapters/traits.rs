//! Source traits
//!
//! The catalog depends on these traits rather than on the HTTP clients, so it
//! can be driven by in-memory sources in tests.
//!
//! Implementations must be fail-soft: `fetch()` never errors outward. Any
//! failure is logged and reported as an empty list, so one degraded source
//! cannot abort the joined fetch.

use super::graphql::GraphSourceCountry;
use super::rest::RestSourceCountry;
use async_trait::async_trait;

/// Source A: the GraphQL country directory
#[async_trait]
pub trait GraphCountrySource: Send + Sync {
    /// Fetch every country; empty on failure
    async fn fetch(&self) -> Vec<GraphSourceCountry>;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "graphql"
    }
}

/// Source B: the REST country directory
#[async_trait]
pub trait RestCountrySource: Send + Sync {
    /// Fetch every country; empty on failure
    async fn fetch(&self) -> Vec<RestSourceCountry>;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "rest"
    }
}
