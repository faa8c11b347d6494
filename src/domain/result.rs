//! Result type alias
//!
//! This module provides a convenient Result type alias that uses
//! `ExplorerError` as the error type.

use super::errors::ExplorerError;

/// Result type alias for country explorer operations
///
/// # Examples
///
/// ```
/// use country_explorer::domain::result::Result;
/// use country_explorer::domain::errors::ExplorerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExplorerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExplorerError>;
