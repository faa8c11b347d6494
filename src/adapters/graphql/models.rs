//! GraphQL directory API models
//!
//! Request and response structures for the GraphQL country directory. These
//! mirror the wire format and are kept separate from the unified domain record.

use crate::adapters::nullable::null_as_default;
use crate::domain::{Continent, Language, State};
use serde::{Deserialize, Serialize};

/// The one query issued against the directory. No variables, no pagination.
pub const ALL_COUNTRIES_QUERY: &str = r#"query GetAllCountries {
  countries {
    code
    name
    native
    phone
    phones
    continent {
      code
      name
    }
    capital
    currency
    currencies
    emoji
    emojiU
    languages {
      code
      name
      native
    }
    states {
      code
      name
    }
    awsRegion
  }
}"#;

/// Country in the GraphQL directory's native shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSourceCountry {
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<String>,
    #[serde(default)]
    pub continent: Option<Continent>,
    #[serde(default)]
    pub capital: Option<String>,
    /// Primary currency code
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default, rename = "emojiU")]
    pub emoji_u: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub states: Vec<State>,
    #[serde(default)]
    pub aws_region: Option<String>,
}

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// GraphQL response envelope
///
/// A response may carry `data` and `errors` together; partial data is used.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of [`ALL_COUNTRIES_QUERY`]
#[derive(Debug, Clone, Deserialize)]
pub struct CountriesData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<GraphSourceCountry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_requests_expected_fields() {
        for field in [
            "code", "native", "phones", "continent", "currencies", "emojiU", "languages",
            "states", "awsRegion",
        ] {
            assert!(ALL_COUNTRIES_QUERY.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_deserialize_full_country() {
        let country: GraphSourceCountry = serde_json::from_value(json!({
            "code": "MX",
            "name": "Mexico",
            "native": "México",
            "phone": "52",
            "phones": ["52"],
            "continent": {"code": "NA", "name": "North America"},
            "capital": "Mexico City",
            "currency": "MXN",
            "currencies": ["MXN"],
            "emoji": "🇲🇽",
            "emojiU": "U+1F1F2 U+1F1FD",
            "languages": [{"code": "es", "name": "Spanish", "native": "Español"}],
            "states": [{"code": "JAL", "name": "Jalisco"}],
            "awsRegion": "us-east-1"
        }))
        .unwrap();

        assert_eq!(country.code, "MX");
        assert_eq!(country.emoji_u.as_deref(), Some("U+1F1F2 U+1F1FD"));
        assert_eq!(country.aws_region.as_deref(), Some("us-east-1"));
        assert_eq!(country.languages[0].name, "Spanish");
        assert_eq!(country.states[0].code.as_deref(), Some("JAL"));
    }

    #[test]
    fn test_deserialize_nulls_as_defaults() {
        let country: GraphSourceCountry = serde_json::from_value(json!({
            "code": "AQ",
            "name": "Antarctica",
            "capital": null,
            "currency": null,
            "currencies": null,
            "languages": null,
            "states": null
        }))
        .unwrap();

        assert!(country.capital.is_none());
        assert!(country.currencies.is_empty());
        assert!(country.languages.is_empty());
        assert!(country.states.is_empty());
    }

    #[test]
    fn test_response_with_errors_and_data() {
        let response: GraphQlResponse<CountriesData> = serde_json::from_value(json!({
            "data": {"countries": [{"code": "FR", "name": "France"}]},
            "errors": [{"message": "partial failure"}]
        }))
        .unwrap();

        assert_eq!(response.data.unwrap().countries.len(), 1);
        assert_eq!(response.errors[0].message, "partial failure");
    }

    #[test]
    fn test_response_without_data_key() {
        let response: GraphQlResponse<CountriesData> = serde_json::from_value(json!({
            "errors": [{"message": "Cannot query field \"nope\""}]
        }))
        .unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn test_request_serialization() {
        let body = serde_json::to_value(GraphQlRequest {
            query: ALL_COUNTRIES_QUERY,
        })
        .unwrap();
        assert!(body["query"].as_str().unwrap().starts_with("query GetAllCountries"));
    }
}
