//! CLI command implementations
//!
//! Exit codes: 0 success, 2 configuration error, 3 country not found,
//! 5 fatal error.

pub mod continents;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;

use crate::config::load_config_or_default;
use crate::core::catalog::CountryCatalog;

/// Configuration error exit code
pub const EXIT_CONFIG: i32 = 2;

/// Country not found exit code
pub const EXIT_NOT_FOUND: i32 = 3;

/// Fatal error exit code
pub const EXIT_FATAL: i32 = 5;

/// Build a catalog from the configuration at `config_path`
///
/// A missing file falls back to defaults. On failure the error has already
/// been printed and the exit code is returned.
pub(crate) fn open_catalog(config_path: &str) -> Result<CountryCatalog, i32> {
    let config = match load_config_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(EXIT_CONFIG);
        }
    };

    CountryCatalog::from_config(&config).map_err(|e| {
        println!("❌ Failed to create source clients");
        println!("   Error: {e}");
        EXIT_CONFIG
    })
}

/// `128000000` -> `128,000,000`
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
