//! Integration tests for the catalog query functions
//!
//! Properties checked over a fixed catalog: filters are idempotent, sorts are
//! monotone and never mutate their input, and the combined view matches the
//! functions applied in sequence.

use country_explorer::core::query::{
    continents, filter_by_continent, search_countries, sort_countries, CountryView, SortKey,
    SortOrder,
};
use country_explorer::domain::UnifiedCountry;
use std::cmp::Ordering;
use test_case::test_case;

fn country(code: &str, name: &str, capital: &str, continent: &str, population: u64) -> UnifiedCountry {
    UnifiedCountry {
        code: code.to_string(),
        name: name.to_string(),
        capital: capital.to_string(),
        continent: continent.to_string(),
        population,
        ..Default::default()
    }
}

fn catalog() -> Vec<UnifiedCountry> {
    vec![
        country("IS", "Iceland", "Reykjavik", "Europe", 387_000),
        country("FI", "Finland", "Helsinki", "Europe", 5_600_000),
        country("AX", "Åland Islands", "Mariehamn", "Europe", 30_000),
        country("NZ", "New Zealand", "Wellington", "Oceania", 5_200_000),
        country("CI", "Côte d'Ivoire", "Yamoussoukro", "Africa", 28_900_000),
        country("CL", "Chile", "Santiago", "South America", 19_600_000),
        country("AQ", "Antarctica", "N/A", "Antarctica", 0),
        country("ZZ", "Nowhere", "N/A", "N/A", 0),
    ]
}

fn codes(countries: &[UnifiedCountry]) -> Vec<&str> {
    countries.iter().map(|c| c.code.as_str()).collect()
}

#[test_case("land" ; "substring")]
#[test_case("EUROPE" ; "continent upper case")]
#[test_case("n/a" ; "placeholder capital")]
#[test_case("" ; "empty")]
fn test_search_is_idempotent(term: &str) {
    let once = search_countries(term, &catalog());
    let twice = search_countries(term, &once);
    assert_eq!(once, twice);
}

#[test_case("Europe" ; "named continent")]
#[test_case("all" ; "everything")]
#[test_case("Atlantis" ; "unknown continent")]
fn test_filter_is_idempotent(continent: &str) {
    let once = filter_by_continent(continent, &catalog());
    let twice = filter_by_continent(continent, &once);
    assert_eq!(once, twice);
}

#[test]
fn test_search_matches_documented_fields() {
    assert_eq!(codes(&search_countries("land", &catalog())), vec!["IS", "FI", "AX", "NZ"]);
    assert_eq!(codes(&search_countries("helsinki", &catalog())), vec!["FI"]);
    assert_eq!(codes(&search_countries("zz", &catalog())), vec!["ZZ"]);
    assert_eq!(codes(&search_countries("oceania", &catalog())), vec!["NZ"]);
}

#[test_case(SortKey::Name, SortOrder::Asc)]
#[test_case(SortKey::Name, SortOrder::Desc)]
#[test_case(SortKey::Population, SortOrder::Asc)]
#[test_case(SortKey::Population, SortOrder::Desc)]
#[test_case(SortKey::Code, SortOrder::Asc)]
#[test_case(SortKey::Code, SortOrder::Desc)]
fn test_sort_preserves_elements(key: SortKey, order: SortOrder) {
    let input = catalog();
    let sorted = sort_countries(&input, key, order);

    assert_eq!(input, catalog());
    assert_eq!(sorted.len(), input.len());
    for c in &input {
        assert!(sorted.contains(c));
    }
}

#[test]
fn test_population_sort_is_monotone() {
    let asc = sort_countries(&catalog(), SortKey::Population, SortOrder::Asc);
    assert!(asc.windows(2).all(|w| w[0].population <= w[1].population));

    let desc = sort_countries(&catalog(), SortKey::Population, SortOrder::Desc);
    assert!(desc.windows(2).all(|w| w[0].population >= w[1].population));
}

#[test]
fn test_name_sort_folds_accents() {
    let sorted = sort_countries(&catalog(), SortKey::Name, SortOrder::Asc);
    assert_eq!(
        codes(&sorted),
        vec!["AX", "AQ", "CL", "CI", "FI", "IS", "NZ", "ZZ"]
    );

    let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
    let desc = sort_countries(&catalog(), SortKey::Name, SortOrder::Desc);
    let mut reversed: Vec<&str> = desc.iter().map(|c| c.name.as_str()).collect();
    reversed.reverse();
    assert_eq!(names, reversed);
}

#[test]
fn test_view_equals_sequential_application() {
    let view = CountryView::new()
        .with_continent("europe")
        .with_search("land")
        .with_sort(SortKey::Population, SortOrder::Desc);

    let expected = sort_countries(
        &search_countries("land", &filter_by_continent("europe", &catalog())),
        SortKey::Population,
        SortOrder::Desc,
    );
    assert_eq!(view.apply(&catalog()), expected);
    assert_eq!(codes(&expected), vec!["FI", "IS", "AX"]);
}

#[test]
fn test_continents_are_distinct_and_sorted() {
    let names = continents(&catalog());
    assert_eq!(
        names,
        vec!["Africa", "Antarctica", "Europe", "N/A", "Oceania", "South America"]
    );
    assert!(names
        .windows(2)
        .all(|w| w[0].to_lowercase().cmp(&w[1].to_lowercase()) == Ordering::Less));
}
