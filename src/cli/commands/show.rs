//! Show command implementation
//!
//! Looks up one country by alpha-2 or alpha-3 code and prints its merged
//! record.

use super::{group_thousands, open_catalog, EXIT_FATAL, EXIT_NOT_FOUND};
use crate::domain::{CountryCode, UnifiedCountry};
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// ISO 3166-1 alpha-2 or alpha-3 code (e.g. MX or MEX)
    pub code: CountryCode,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(code = %self.code, "Looking up country");

        let catalog = match open_catalog(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let country = match catalog.get_country_by_code(self.code.as_str()).await {
            Ok(c) => c,
            Err(e) if e.is_not_found() => {
                println!("❌ Country with code {} not found", self.code);
                return Ok(EXIT_NOT_FOUND);
            }
            Err(e) => {
                println!("❌ Failed to load countries");
                println!("   Error: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&country)?);
        } else {
            print!("{}", describe(&country));
        }
        Ok(0)
    }
}

fn describe(country: &UnifiedCountry) -> String {
    let mut lines = Vec::new();

    let title = match &country.emoji {
        Some(emoji) => format!("{emoji} {} ({})", country.name, country.code),
        None => format!("{} ({})", country.name, country.code),
    };
    lines.push(title);
    lines.push(String::new());

    if let Some(metadata) = &country.metadata {
        lines.push(format!("  Official name: {}", metadata.official_name));
    }
    if let Some(native) = &country.native {
        lines.push(format!("  Native name:   {native}"));
    }
    if let Some(cca3) = &country.cca3 {
        lines.push(format!("  Alpha-3:       {cca3}"));
    }
    lines.push(format!("  Capital:       {}", country.capital));
    lines.push(format!("  Continent:     {}", country.continent));
    if let Some(region) = &country.region {
        match &country.subregion {
            Some(subregion) => lines.push(format!("  Region:        {region} / {subregion}")),
            None => lines.push(format!("  Region:        {region}")),
        }
    }
    lines.push(format!(
        "  Population:    {}",
        group_thousands(country.population)
    ));
    lines.push(format!("  Area:          {} km²", country.area));
    if !country.languages.is_empty() {
        lines.push(format!("  Languages:     {}", country.languages.join(", ")));
    }
    if !country.currencies.is_empty() {
        lines.push(format!("  Currencies:    {}", country.currencies.join(", ")));
    } else if let Some(currency) = &country.currency {
        lines.push(format!("  Currency:      {currency}"));
    }
    if !country.timezones.is_empty() {
        lines.push(format!("  Timezones:     {}", country.timezones.join(", ")));
    }
    if let Some(borders) = country.borders.as_ref().filter(|b| !b.is_empty()) {
        lines.push(format!("  Borders:       {}", borders.join(", ")));
    }
    if !country.flag.is_empty() {
        lines.push(format!("  Flag:          {}", country.flag));
    }
    if !country.is_enriched() {
        lines.push(String::new());
        lines.push("  (no REST directory match; demographic fields unavailable)".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
