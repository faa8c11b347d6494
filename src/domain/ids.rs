//! Country code identifier type
//!
//! Both directories identify countries by ISO 3166-1 codes: alpha-2 ("MX")
//! everywhere, alpha-3 ("MEX") additionally in the REST directory. This module
//! provides a newtype that normalizes either form for lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized ISO 3166-1 country code (alpha-2 or alpha-3)
///
/// Input is trimmed and upper-cased, so comparisons are case-insensitive.
///
/// # Examples
///
/// ```
/// use country_explorer::domain::ids::CountryCode;
/// use std::str::FromStr;
///
/// let code = CountryCode::from_str(" mx ").unwrap();
/// assert_eq!(code.as_str(), "MX");
/// assert!(code.is_alpha2());
/// assert!(code.matches("mx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a new CountryCode
    ///
    /// # Returns
    ///
    /// Returns `Err` if the code is empty, not 2-3 characters long, or contains
    /// anything other than ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        let code = code.trim();
        if code.is_empty() {
            return Err("Country code cannot be empty".to_string());
        }
        if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Invalid country code '{code}'. Expected a 2- or 3-letter ISO code"
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True for the 2-letter form
    pub fn is_alpha2(&self) -> bool {
        self.0.len() == 2
    }

    /// Case-insensitive comparison against a raw code
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
