//! Reconciliation of the two directories into unified records
//!
//! 1. [`RestIndex`] keys every REST record by alpha-2 and alpha-3 code.
//! 2. Each GraphQL record is looked up by its alpha-2 code.
//! 3. [`merge_country`] combines the pair field by field.
//!
//! Merging is synchronous and pure; it runs after both fetches have resolved.

pub mod index;
pub mod merge;

pub use index::RestIndex;
pub use merge::{merge_countries, merge_country};
