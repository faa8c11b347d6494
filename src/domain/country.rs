//! Unified country record and its value types
//!
//! `UnifiedCountry` is the canonical record produced by reconciliation. The
//! small value types (flags, currencies, demonyms, ...) are shared with the
//! source models so merged fields move across without conversion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder used when neither directory knows a capital or continent
pub const NOT_AVAILABLE: &str = "N/A";

/// Continent reference as published by the GraphQL directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub code: String,
    pub name: String,
}

/// Language record (ISO 639 code, English name, endonym)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub native: Option<String>,
}

/// First-level administrative subdivision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
}

/// Currency name and symbol, keyed by ISO 4217 code in the owning map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Official and common name in one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

/// Feminine and masculine demonym forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonym {
    #[serde(default)]
    pub f: String,
    #[serde(default)]
    pub m: String,
}

/// Flag image URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Coat-of-arms image URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoatOfArms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// Map links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub open_street_maps: String,
}

/// Driving side and international vehicle registration codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signs: Option<Vec<String>>,
    #[serde(default)]
    pub side: String,
}

/// Postal code format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode {
    #[serde(default)]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

/// Disambiguation data, present only when both directories know the country
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMetadata {
    pub cca2: String,
    pub cca3: String,
    pub official_name: String,
    pub native_name: String,
    pub region: String,
    pub subregion: String,
    pub continent: Continent,
    pub states: Vec<String>,
    pub emoji: String,
    pub flag_emoji: String,
}

/// Canonical merged country record
///
/// `code`, `name`, `capital`, `continent`, `languages`, `population`,
/// `timezones` and `flag` are always populated (possibly with defaults);
/// everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedCountry {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca3: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    pub capital: String,

    pub continent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latlng: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landlocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub area: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_details: Option<IndexMap<String, CurrencyDetail>>,

    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_details: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_u: Option<String>,

    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demonyms: Option<IndexMap<String, Demonym>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_member: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fifa: Option<String>,

    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat_of_arms: Option<CoatOfArms>,

    pub timezones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_of_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<Car>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<State>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<Maps>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CountryMetadata>,
}

impl UnifiedCountry {
    /// Case-insensitive match against the 2-letter or 3-letter code
    pub fn has_code(&self, code: &str) -> bool {
        let code = code.trim();
        self.code.eq_ignore_ascii_case(code)
            || self
                .cca3
                .as_deref()
                .is_some_and(|cca3| cca3.eq_ignore_ascii_case(code))
    }

    /// Whether the REST directory contributed to this record
    pub fn is_enriched(&self) -> bool {
        self.metadata.is_some()
    }
}
