//! Derived views over the unified catalog
//!
//! Pure functions: each takes a slice of countries and returns a new vector,
//! leaving the cached catalog untouched. Nothing here is cached; the base
//! collection already is.

pub mod view;

use crate::domain::UnifiedCountry;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub use view::CountryView;

/// Continent filter value that passes every country through
pub const ALL_CONTINENTS: &str = "all";

/// Sort field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Population,
    Code,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "population" => Ok(SortKey::Population),
            "code" => Ok(SortKey::Code),
            other => Err(format!(
                "Invalid sort key '{other}'. Must be one of: name, population, code"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Population => "population",
            SortKey::Code => "code",
        };
        f.write_str(s)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order '{other}'. Must be one of: asc, desc")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Case-insensitive substring search
///
/// Matches against name, code, capital, continent, native name and region.
/// An empty or whitespace-only term returns the input unchanged.
pub fn search_countries(term: &str, countries: &[UnifiedCountry]) -> Vec<UnifiedCountry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return countries.to_vec();
    }

    let contains = |value: &str| value.to_lowercase().contains(&term);
    countries
        .iter()
        .filter(|c| {
            contains(&c.name)
                || contains(&c.code)
                || contains(&c.capital)
                || contains(&c.continent)
                || c.native.as_deref().is_some_and(contains)
                || c.region.as_deref().is_some_and(contains)
        })
        .cloned()
        .collect()
}

/// Exact, case-insensitive continent filter
///
/// An empty value or [`ALL_CONTINENTS`] returns the input unchanged.
pub fn filter_by_continent(continent: &str, countries: &[UnifiedCountry]) -> Vec<UnifiedCountry> {
    let continent = continent.trim();
    if continent.is_empty() || continent.eq_ignore_ascii_case(ALL_CONTINENTS) {
        return countries.to_vec();
    }

    let wanted = continent.to_lowercase();
    countries
        .iter()
        .filter(|c| c.continent.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Sorted copy of `countries`
///
/// Names and codes use [`collate`]; population compares numerically. The sort
/// is stable, so exact ties keep their input order.
pub fn sort_countries(
    countries: &[UnifiedCountry],
    key: SortKey,
    order: SortOrder,
) -> Vec<UnifiedCountry> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => collate(&a.name, &b.name),
            SortKey::Population => a.population.cmp(&b.population),
            SortKey::Code => collate(&a.code, &b.code),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Distinct continent names in the catalog, sorted
pub fn continents(countries: &[UnifiedCountry]) -> Vec<String> {
    let mut names: Vec<String> = countries.iter().map(|c| c.continent.clone()).collect();
    names.sort_by(|a, b| collate(a, b));
    names.dedup();
    names
}

/// Locale-style string comparison
///
/// Compares accent- and case-folded forms first ("Åland" sorts beside
/// "Aland", "béla" before "Bern"), then falls back to the exact strings so the
/// ordering is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn country(code: &str, name: &str, continent: &str, population: u64) -> UnifiedCountry {
        UnifiedCountry {
            code: code.to_string(),
            name: name.to_string(),
            capital: format!("{name} City"),
            continent: continent.to_string(),
            population,
            ..Default::default()
        }
    }

    fn sample() -> Vec<UnifiedCountry> {
        vec![
            country("MX", "Mexico", "North America", 128_000_000),
            country("FR", "France", "Europe", 68_000_000),
            country("AX", "Åland Islands", "Europe", 30_000),
            UnifiedCountry {
                native: Some("Nippon".to_string()),
                region: Some("Asia".to_string()),
                ..country("JP", "Japan", "Asia", 125_000_000)
            },
            country("AR", "Argentina", "South America", 46_000_000),
        ]
    }

    fn codes(countries: &[UnifiedCountry]) -> Vec<&str> {
        countries.iter().map(|c| c.code.as_str()).collect()
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_search_blank_term_is_identity(term: &str) {
        assert_eq!(search_countries(term, &sample()), sample());
    }

    #[test_case("mex", &["MX"] ; "by name")]
    #[test_case("fr", &["FR"] ; "by code")]
    #[test_case("japan city", &["JP"] ; "by capital")]
    #[test_case("EUROPE", &["FR", "AX"] ; "by continent")]
    #[test_case("nippon", &["JP"] ; "by native name")]
    #[test_case("  america ", &["MX", "AR"] ; "trimmed term")]
    #[test_case("zzz", &[] ; "no match")]
    fn test_search_fields(term: &str, expected: &[&str]) {
        assert_eq!(codes(&search_countries(term, &sample())), expected);
    }

    #[test_case("all" ; "sentinel")]
    #[test_case("ALL" ; "sentinel any case")]
    #[test_case("" ; "empty")]
    fn test_filter_passthrough(continent: &str) {
        assert_eq!(filter_by_continent(continent, &sample()), sample());
    }

    #[test]
    fn test_filter_exact_case_insensitive() {
        assert_eq!(codes(&filter_by_continent("europe", &sample())), vec!["FR", "AX"]);
        assert!(filter_by_continent("Euro", &sample()).is_empty());
    }

    #[test]
    fn test_sort_population_desc_is_non_increasing() {
        let sorted = sort_countries(&sample(), SortKey::Population, SortOrder::Desc);
        assert!(sorted.windows(2).all(|w| w[0].population >= w[1].population));
        assert_eq!(sorted[0].code, "MX");
    }

    #[test]
    fn test_sort_name_asc_uses_collation() {
        let sorted = sort_countries(&sample(), SortKey::Name, SortOrder::Asc);
        assert_eq!(codes(&sorted), vec!["AX", "AR", "FR", "JP", "MX"]);
    }

    #[test]
    fn test_sort_code_desc() {
        let sorted = sort_countries(&sample(), SortKey::Code, SortOrder::Desc);
        assert_eq!(codes(&sorted), vec!["MX", "JP", "FR", "AX", "AR"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = sample();
        let _ = sort_countries(&input, SortKey::Population, SortOrder::Asc);
        assert_eq!(input, sample());
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let input = vec![
            country("AA", "Same", "Europe", 1),
            country("BB", "Same", "Europe", 1),
        ];
        let sorted = sort_countries(&input, SortKey::Population, SortOrder::Asc);
        assert_eq!(codes(&sorted), vec!["AA", "BB"]);
    }

    #[test]
    fn test_continents_distinct_sorted() {
        assert_eq!(
            continents(&sample()),
            vec!["Asia", "Europe", "North America", "South America"]
        );
    }

    #[test]
    fn test_collate_folds_accents_and_case() {
        assert_eq!(collate("Åland", "Albania"), Ordering::Less);
        assert_eq!(collate("béla", "Bern"), Ordering::Less);
        assert_eq!(collate("a", "A"), "a".cmp("A"));
        assert_eq!(collate("Chad", "Chad"), Ordering::Equal);
    }

    #[test_case("name", SortKey::Name)]
    #[test_case("Population", SortKey::Population)]
    #[test_case(" code ", SortKey::Code)]
    fn test_sort_key_from_str(input: &str, expected: SortKey) {
        assert_eq!(input.parse::<SortKey>().unwrap(), expected);
    }

    #[test]
    fn test_sort_parsing_rejects_unknown() {
        assert!("area".parse::<SortKey>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SortKey::default(), SortKey::Name);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
        assert_eq!(SortKey::Population.to_string(), "population");
    }
}
