//! Dual-key lookup index over REST directory records

use crate::adapters::rest::RestSourceCountry;
use std::collections::HashMap;

/// Index over REST records keyed by both alpha-2 and alpha-3 code
///
/// Keys are upper-cased on insert and lookup. When two records share a key the
/// later one wins; well-formed listings never collide.
#[derive(Debug, Default)]
pub struct RestIndex<'a> {
    by_code: HashMap<String, &'a RestSourceCountry>,
}

impl<'a> RestIndex<'a> {
    /// Index every record under its `cca2` and `cca3`
    pub fn build(records: &'a [RestSourceCountry]) -> Self {
        let mut by_code = HashMap::with_capacity(records.len() * 2);
        for record in records {
            for key in [&record.cca2, &record.cca3] {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                if let Some(previous) = by_code.insert(key.to_ascii_uppercase(), record) {
                    tracing::debug!(
                        key = %key,
                        replaced = %previous.name.common,
                        by = %record.name.common,
                        "Duplicate REST country key, keeping the later record"
                    );
                }
            }
        }
        Self { by_code }
    }

    /// Look up by either code form, case-insensitively
    pub fn get(&self, code: &str) -> Option<&'a RestSourceCountry> {
        self.by_code.get(&code.trim().to_ascii_uppercase()).copied()
    }

    /// Number of keys (two per well-formed record)
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rest::RestName;

    fn record(cca2: &str, cca3: &str, common: &str) -> RestSourceCountry {
        RestSourceCountry {
            name: RestName {
                common: common.to_string(),
                ..Default::default()
            },
            cca2: cca2.to_string(),
            cca3: cca3.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_by_either_code() {
        let records = vec![record("MX", "MEX", "Mexico"), record("FR", "FRA", "France")];
        let index = RestIndex::build(&records);

        assert_eq!(index.len(), 4);
        assert_eq!(index.get("MX").unwrap().name.common, "Mexico");
        assert_eq!(index.get("MEX").unwrap().name.common, "Mexico");
        assert!(std::ptr::eq(index.get("MX").unwrap(), index.get("MEX").unwrap()));
        assert!(index.get("US").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let records = vec![record("MX", "MEX", "Mexico")];
        let index = RestIndex::build(&records);
        assert!(index.get("mx").is_some());
        assert!(index.get(" mex ").is_some());
    }

    #[test]
    fn test_collision_last_write_wins() {
        let records = vec![record("XK", "XKX", "First"), record("XK", "UNK", "Second")];
        let index = RestIndex::build(&records);

        assert_eq!(index.get("XK").unwrap().name.common, "Second");
        assert_eq!(index.get("XKX").unwrap().name.common, "First");
        assert_eq!(index.get("UNK").unwrap().name.common, "Second");
    }

    #[test]
    fn test_empty_codes_are_not_indexed() {
        let records = vec![record("", "ABC", "Only alpha-3")];
        let index = RestIndex::build(&records);
        assert_eq!(index.len(), 1);
        assert!(index.get("").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = RestIndex::build(&[]);
        assert!(index.is_empty());
    }
}
