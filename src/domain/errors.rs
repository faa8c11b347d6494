//! Domain error types
//!
//! This module defines the error hierarchy for the country explorer.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source client errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Catalog errors (batch failure or lookup miss)
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while talking to one of the upstream country directories
///
/// These never cross the source client boundary: `fetch()` downgrades
/// every variant to an empty list after logging it.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to connect to the upstream service
    #[error("Failed to connect to {source_name}: {message}")]
    ConnectionFailed {
        source_name: &'static str,
        message: String,
    },

    /// Request exceeded the configured timeout
    #[error("Request to {0} timed out")]
    Timeout(&'static str),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Body could not be decoded into the native shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// GraphQL response carried errors and no data
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl SourceError {
    /// Maps a reqwest transport error onto a domain error without leaking the type.
    pub fn from_transport(source_name: &'static str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout(source_name)
        } else if err.is_decode() {
            SourceError::InvalidResponse(err.to_string())
        } else {
            SourceError::ConnectionFailed {
                source_name,
                message: err.to_string(),
            }
        }
    }

    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            SourceError::ServerError { status, message }
        } else {
            SourceError::ClientError { status, message }
        }
    }
}

/// Per-record reconciliation failure
///
/// The record is dropped from the merged catalog and the batch continues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MergeError {
    /// The source-A record has no usable country code
    #[error("Country record has no code (name: {0:?})")]
    MissingCode(String),
}

/// Errors surfaced by the unified catalog
///
/// `Clone` because one result is shared by every caller waiting on the same
/// fetch-and-merge cycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The fetch-and-merge cycle failed as a whole; the cache was reset
    #[error("Failed to load country catalog: {0}")]
    Batch(String),

    /// No country matched the requested code
    #[error("Country with code {0} not found")]
    NotFound(String),
}

impl CatalogError {
    /// Whether this is a lookup miss rather than a load failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        ExplorerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExplorerError {
    fn from(err: toml::de::Error) -> Self {
        ExplorerError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_error_display() {
        let err = ExplorerError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_source_error_conversion() {
        let source_err = SourceError::Timeout("graphql");
        let err: ExplorerError = source_err.into();
        assert!(matches!(err, ExplorerError::Source(_)));
    }

    #[test]
    fn test_catalog_error_conversion() {
        let err: ExplorerError = CatalogError::NotFound("XX".to_string()).into();
        assert!(matches!(err, ExplorerError::Catalog(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_catalog_error_not_found_is_distinguishable() {
        assert!(CatalogError::NotFound("XX".to_string()).is_not_found());
        assert!(!CatalogError::Batch("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_source_error_from_status() {
        assert!(matches!(
            SourceError::from_status(503, "unavailable"),
            SourceError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            SourceError::from_status(404, "missing"),
            SourceError::ClientError { status: 404, .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExplorerError = io_err.into();
        assert!(matches!(err, ExplorerError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ExplorerError = json_err.into();
        assert!(matches!(err, ExplorerError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExplorerError = toml_err.into();
        assert!(matches!(err, ExplorerError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
