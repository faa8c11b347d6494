//! Logging and observability
//!
//! This module provides:
//! - Structured logging via `tracing` with an optional JSON file layer
//! - Catalog notices ([`NoticeSink`]) for presentation layers
//!
//! # Example
//!
//! ```no_run
//! use country_explorer::logging::init_logging;
//! use country_explorer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod notices;
pub mod structured;

// Re-export commonly used items
pub use notices::{
    MemoryNoticeSink, Notice, NoticeKind, NoticeLevel, NoticeSink, TracingNoticeSink,
    DEFAULT_NOTICE_CAPACITY,
};
pub use structured::{init_logging, LoggingGuard};

/// Log a source that degraded to an empty list
///
/// # Example
///
/// ```no_run
/// use country_explorer::log_source_degraded;
/// use country_explorer::domain::SourceError;
///
/// let error = SourceError::Timeout("rest");
/// log_source_degraded!("rest", "https://restcountries.com/v3.1/all", &error);
/// ```
#[macro_export]
macro_rules! log_source_degraded {
    ($source:expr, $endpoint:expr, $error:expr) => {
        tracing::error!(
            source = $source,
            endpoint = %$endpoint,
            error = %$error,
            "Source fetch failed, continuing with an empty list"
        );
    };
}

/// Log the completion of a fetch-and-merge cycle
///
/// # Example
///
/// ```no_run
/// use country_explorer::log_catalog_loaded;
/// use std::time::Duration;
///
/// log_catalog_loaded!(250, 248, 245, Duration::from_millis(900));
/// ```
#[macro_export]
macro_rules! log_catalog_loaded {
    ($graph_count:expr, $rest_count:expr, $merged_count:expr, $duration:expr) => {
        tracing::info!(
            graph_count = $graph_count,
            rest_count = $rest_count,
            merged_count = $merged_count,
            duration_ms = $duration.as_millis() as u64,
            "Country catalog loaded"
        );
    };
}
