//! List command implementation
//!
//! Prints the unified catalog after applying search, continent filter and
//! sort.

use super::{group_thousands, open_catalog, EXIT_FATAL};
use crate::core::query::{CountryView, SortKey, SortOrder, ALL_CONTINENTS};
use crate::domain::UnifiedCountry;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive search over name, code, capital, continent, native name and region
    #[arg(short, long)]
    pub search: Option<String>,

    /// Continent name to keep ("all" keeps every continent)
    #[arg(long, default_value = ALL_CONTINENTS)]
    pub continent: String,

    /// Sort field (name, population, code)
    #[arg(long, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Sort direction (asc, desc)
    #[arg(long, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// The view these arguments describe
    pub fn view(&self) -> CountryView {
        CountryView::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_continent(self.continent.clone())
            .with_sort(self.sort, self.order)
    }

    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let view = self.view();
        tracing::info!(
            search = %view.search,
            continent = %view.continent,
            sort = %view.sort,
            order = %view.order,
            "Listing countries"
        );

        let catalog = match open_catalog(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let countries = match catalog.query(&view).await {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load countries");
                println!("   Error: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&countries)?);
            return Ok(0);
        }

        if countries.is_empty() {
            println!("No countries found.");
            if view.is_filtered() {
                println!("Try a different search term or continent.");
            }
            return Ok(0);
        }

        println!(
            "{:<4} {:<36} {:<24} {:<16} {:>15}",
            "Code", "Name", "Capital", "Continent", "Population"
        );
        println!("{}", "-".repeat(99));
        for country in &countries {
            println!("{}", format_row(country));
        }
        println!();
        println!("{} countries", countries.len());

        Ok(0)
    }
}

fn format_row(country: &UnifiedCountry) -> String {
    format!(
        "{:<4} {:<36} {:<24} {:<16} {:>15}",
        country.code,
        truncate(&country.name, 36),
        truncate(&country.capital, 24),
        truncate(&country.continent, 16),
        group_thousands(country.population)
    )
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}
