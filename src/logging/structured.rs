//! Subscriber installation
//!
//! Human-readable lines go to stderr. When `logging.local_enabled` is set, the
//! same events are also written as JSON to a rolling file under
//! `logging.local_path`.
//!
//! # Example
//!
//! ```no_run
//! use country_explorer::logging::init_logging;
//! use country_explorer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{ExplorerError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_PREFIX: &str = "country-explorer.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Holds the file writer's worker; pending lines are flushed when dropped
#[derive(Debug)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns an error for an unknown level, an unusable log directory, or when a
/// subscriber is already installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("country_explorer={level}")));

    let console: BoxedLayer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed();

    let mut layers = vec![console];
    let guard = if config.local_enabled {
        let (file, guard) = json_file_layer(config, filter)?;
        layers.push(file);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ExplorerError::Other(format!("Failed to install log subscriber: {e}")))?;

    tracing::debug!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard { _file: guard })
}

fn json_file_layer(
    config: &LoggingConfig,
    filter: EnvFilter,
) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        ExplorerError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let rotation = if config.local_rotation == "hourly" {
        Rotation::HOURLY
    } else {
        Rotation::DAILY
    };
    let appender = RollingFileAppender::new(rotation, &config.local_path, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ExplorerError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
