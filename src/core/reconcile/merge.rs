//! Field-level merge of one GraphQL record with its REST match
//!
//! Precedence per field is GraphQL value, else REST value, else default.
//! The GraphQL list decides which countries exist; REST-only countries are
//! never emitted.

use super::index::RestIndex;
use crate::adapters::graphql::GraphSourceCountry;
use crate::adapters::rest::RestSourceCountry;
use crate::domain::{Continent, CountryMetadata, MergeError, UnifiedCountry, NOT_AVAILABLE};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Merge one GraphQL record with its optional REST counterpart
///
/// # Errors
///
/// Returns [`MergeError::MissingCode`] when the GraphQL record has no code.
pub fn merge_country(
    graph: &GraphSourceCountry,
    rest: Option<&RestSourceCountry>,
) -> Result<UnifiedCountry, MergeError> {
    let code = graph.code.trim();
    if code.is_empty() {
        return Err(MergeError::MissingCode(graph.name.clone()));
    }

    let native = non_empty(graph.native.as_deref())
        .map(str::to_string)
        .or_else(|| rest.and_then(RestSourceCountry::first_native_name));

    let capital = non_empty(graph.capital.as_deref())
        .or_else(|| rest.and_then(RestSourceCountry::first_capital))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    let graph_continent_name = graph.continent.as_ref().map(|c| c.name.as_str());
    let rest_region = rest.map(|r| r.region.as_str());
    let continent = non_empty(graph_continent_name)
        .or(non_empty(rest_region))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    let metadata = rest.map(|r| CountryMetadata {
        cca2: r.cca2.clone(),
        cca3: r.cca3.clone(),
        official_name: r.name.official.clone(),
        native_name: r.first_native_name().unwrap_or_else(|| r.name.common.clone()),
        region: r.region.clone(),
        subregion: r.subregion.clone().unwrap_or_default(),
        continent: Continent {
            code: graph
                .continent
                .as_ref()
                .map(|c| c.code.clone())
                .unwrap_or_default(),
            name: non_empty(graph_continent_name)
                .unwrap_or(r.region.as_str())
                .to_string(),
        },
        states: graph.states.iter().map(|s| s.name.clone()).collect(),
        emoji: graph.emoji.clone().unwrap_or_default(),
        flag_emoji: r.flag.clone(),
    });

    Ok(UnifiedCountry {
        code: code.to_string(),
        cca3: rest.map(|r| r.cca3.clone()),
        name: graph.name.clone(),
        native,
        capital,

        continent,
        continent_code: graph.continent.as_ref().map(|c| c.code.clone()),
        region: non_empty(rest_region).map(str::to_string),
        subregion: rest.and_then(|r| r.subregion.clone()),
        latlng: rest.and_then(RestSourceCountry::coordinates),
        landlocked: rest.map(|r| r.landlocked),
        borders: rest.and_then(|r| r.borders.clone()),
        area: rest.map(|r| r.area).unwrap_or(0.0),

        phone: graph.phone.clone(),
        phones: Some(graph.phones.clone()),

        currency: graph.currency.clone(),
        currencies: graph.currencies.clone(),
        currency_details: rest.and_then(|r| r.currencies.clone()),

        languages: graph.languages.iter().map(|l| l.name.clone()).collect(),
        language_details: Some(graph.languages.clone()),
        emoji: graph.emoji.clone(),
        emoji_u: graph.emoji_u.clone(),

        population: rest.map(|r| r.population).unwrap_or(0),
        demonyms: rest.and_then(|r| r.demonyms.clone()),

        independent: rest.and_then(|r| r.independent),
        un_member: rest.map(|r| r.un_member),
        fifa: rest.and_then(|r| r.fifa.clone()),

        flag: rest.map(RestSourceCountry::flag_image).unwrap_or_default(),
        flags: rest.map(|r| r.flags.clone()),
        coat_of_arms: rest.map(|r| r.coat_of_arms.clone()),

        timezones: rest.map(|r| r.timezones.clone()).unwrap_or_default(),
        aws_region: graph.aws_region.clone(),
        start_of_week: rest
            .map(|r| r.start_of_week.as_str())
            .and_then(|s| non_empty(Some(s)))
            .map(str::to_string),
        car: rest.map(|r| r.car.clone()),
        postal_code: rest.and_then(|r| r.postal_code.clone()),

        states: Some(graph.states.clone()),

        maps: rest.map(|r| r.maps.clone()),

        metadata,
    })
}

/// Merge both listings into the unified catalog
///
/// One record per GraphQL entry, in GraphQL order. Records that fail to merge
/// are logged and dropped; the rest of the batch is unaffected.
pub fn merge_countries(
    graph: &[GraphSourceCountry],
    rest: &[RestSourceCountry],
) -> Vec<UnifiedCountry> {
    let index = RestIndex::build(rest);
    let mut merged = Vec::with_capacity(graph.len());
    let mut unmatched = 0usize;
    let mut dropped = 0usize;

    for record in graph {
        let matched = index.get(&record.code);
        if matched.is_none() {
            unmatched += 1;
        }

        match merge_country(record, matched) {
            Ok(country) => merged.push(country),
            Err(e) => {
                dropped += 1;
                tracing::warn!(
                    code = %record.code,
                    name = %record.name,
                    error = %e,
                    "Dropping country that failed to merge"
                );
            }
        }
    }

    tracing::debug!(
        graph_count = graph.len(),
        rest_count = rest.len(),
        merged = merged.len(),
        unmatched,
        dropped,
        "Reconciliation finished"
    );

    merged
}
