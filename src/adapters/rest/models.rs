//! REST directory API models
//!
//! The REST directory returns its full schema for every country. Everything
//! except the codes and the name block defaults when absent or `null`.

use crate::domain::{
    Car, CoatOfArms, CurrencyDetail, Demonym, Flags, LocalizedName, Maps, PostalCode,
};
use crate::adapters::nullable::null_as_default;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Country name block; per-locale entries keep wire order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub native_name: Option<IndexMap<String, LocalizedName>>,
}

/// International direct dialing root and suffixes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Option<Vec<String>>,
}

/// Capital coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalInfo {
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
}

/// Country in the REST directory's native shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestSourceCountry {
    pub name: RestName,
    /// ISO 3166-1 alpha-2 code
    pub cca2: String,
    /// ISO 3166-1 alpha-3 code
    pub cca3: String,
    #[serde(default)]
    pub ccn3: Option<String>,
    #[serde(default)]
    pub cioc: Option<String>,
    #[serde(default)]
    pub independent: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub un_member: bool,
    #[serde(default)]
    pub currencies: Option<IndexMap<String, CurrencyDetail>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub idd: Idd,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt_spellings: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub languages: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latlng: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub landlocked: bool,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default)]
    pub demonyms: Option<IndexMap<String, Demonym>>,
    /// Flag emoji
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maps: Maps,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default)]
    pub gini: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub fifa: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub car: Car,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezones: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Flags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coat_of_arms: CoatOfArms,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_of_week: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital_info: CapitalInfo,
    #[serde(default)]
    pub postal_code: Option<PostalCode>,
}

impl RestSourceCountry {
    /// Native name from the first per-locale entry: common form, else official
    pub fn first_native_name(&self) -> Option<String> {
        let (_, first) = self.name.native_name.as_ref()?.first()?;
        [&first.common, &first.official]
            .into_iter()
            .find(|name| !name.is_empty())
            .cloned()
    }

    /// Flag image URL: vector, else raster, else empty
    pub fn flag_image(&self) -> String {
        if !self.flags.svg.is_empty() {
            self.flags.svg.clone()
        } else {
            self.flags.png.clone()
        }
    }

    /// Coordinates as a pair, when the directory publishes exactly two values
    pub fn coordinates(&self) -> Option<[f64; 2]> {
        match self.latlng.as_slice() {
            [lat, lng] => Some([*lat, *lng]),
            _ => None,
        }
    }

    /// First listed capital
    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()?
            .iter()
            .map(String::as_str)
            .find(|c| !c.is_empty())
    }
}
