//! Domain models and types for the country explorer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Country codes** ([`CountryCode`]) normalized for case-insensitive lookups
//! - **The unified record** ([`UnifiedCountry`]) and its value types
//! - **Error types** ([`ExplorerError`], [`SourceError`], [`MergeError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Library operations return [`Result<T, ExplorerError>`]. Catalog queries
//! return [`CatalogError`] directly so callers can tell a missing country from
//! a failed load:
//!
//! ```rust
//! use country_explorer::domain::CatalogError;
//!
//! let err = CatalogError::NotFound("XX".to_string());
//! assert!(err.is_not_found());
//! ```

pub mod country;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use country::{
    Car, CoatOfArms, Continent, CountryMetadata, CurrencyDetail, Demonym, Flags, Language,
    LocalizedName, Maps, PostalCode, State, UnifiedCountry, NOT_AVAILABLE,
};
pub use errors::{CatalogError, ExplorerError, MergeError, SourceError};
pub use ids::CountryCode;
pub use result::Result;
