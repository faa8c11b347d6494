//! Combined filter/search/sort view state

use super::{filter_by_continent, search_countries, sort_countries, SortKey, SortOrder, ALL_CONTINENTS};
use crate::domain::UnifiedCountry;

/// The list criteria a catalog browser holds
///
/// [`CountryView::apply`] narrows by continent, then by search term, then
/// sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryView {
    pub search: String,
    pub continent: String,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl Default for CountryView {
    fn default() -> Self {
        Self {
            search: String::new(),
            continent: ALL_CONTINENTS.to_string(),
            sort: SortKey::default(),
            order: SortOrder::default(),
        }
    }
}

impl CountryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = continent.into();
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = key;
        self.order = order;
        self
    }

    /// True when a search term or a continent other than "all" is set
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty()
            || !(self.continent.trim().is_empty()
                || self.continent.trim().eq_ignore_ascii_case(ALL_CONTINENTS))
    }

    /// Back to every country, sorted by name
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The visible rows for `countries`
    pub fn apply(&self, countries: &[UnifiedCountry]) -> Vec<UnifiedCountry> {
        let filtered = filter_by_continent(&self.continent, countries);
        let searched = search_countries(&self.search, &filtered);
        sort_countries(&searched, self.sort, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, continent: &str, population: u64) -> UnifiedCountry {
        UnifiedCountry {
            code: code.to_string(),
            name: name.to_string(),
            capital: "N/A".to_string(),
            continent: continent.to_string(),
            population,
            ..Default::default()
        }
    }

    fn catalog() -> Vec<UnifiedCountry> {
        vec![
            country("DE", "Germany", "Europe", 84_000_000),
            country("BR", "Brazil", "South America", 216_000_000),
            country("DK", "Denmark", "Europe", 6_000_000),
            country("ES", "Spain", "Europe", 48_000_000),
        ]
    }

    #[test]
    fn test_default_view_sorts_by_name() {
        let view = CountryView::new();
        assert!(!view.is_filtered());
        let codes: Vec<String> = view.apply(&catalog()).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["BR", "DK", "DE", "ES"]);
    }

    #[test]
    fn test_filter_then_search_then_sort() {
        let view = CountryView::new()
            .with_continent("Europe")
            .with_search("d")
            .with_sort(SortKey::Population, SortOrder::Desc);
        assert!(view.is_filtered());

        let codes: Vec<String> = view.apply(&catalog()).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["DE", "DK"]);
    }

    #[test]
    fn test_reset_clears_criteria() {
        let mut view = CountryView::new().with_search("spain").with_continent("Europe");
        view.reset();
        assert_eq!(view, CountryView::default());
        assert_eq!(view.apply(&catalog()).len(), 4);
    }
}
