//! The unified data service
//!
//! [`CountryCatalog`] fetches both directories concurrently, reconciles them
//! and caches the merged list. The cache moves through three states:
//!
//! ```text
//! Empty --get_all_countries--> Fetching --success--> Ready
//!   ^                             |                    |
//!   +-------batch failure---------+                    |
//!   +-----------------------clear_cache----------------+
//! ```
//!
//! Source failures never reach this layer: each client degrades to an empty
//! list, so a dead source shrinks or empties the catalog rather than failing it.

pub mod samples;
pub mod service;

pub use service::{CatalogResult, CatalogState, CountryCatalog};
