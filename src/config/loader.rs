//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExplorerConfig;
use crate::domain::errors::ExplorerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COUNTRY_EXPLORER";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExplorerConfig
/// 4. Applies environment variable overrides (COUNTRY_EXPLORER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use country_explorer::config::loader::load_config;
///
/// let config = load_config("country-explorer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExplorerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExplorerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExplorerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExplorerConfig = toml::from_str(&contents)
        .map_err(|e| ExplorerError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);
    finish(config)
}

/// Loads configuration from `path` if it exists, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases, so the binary
/// works out of the box against the public directories.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ExplorerConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = ExplorerConfig::default();
    apply_env_overrides(&mut config);
    finish(config)
}

fn finish(config: ExplorerConfig) -> Result<ExplorerConfig> {
    config.validate().map_err(|e| {
        ExplorerError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExplorerError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExplorerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Applies environment variable overrides using the COUNTRY_EXPLORER_* prefix
///
/// Environment variables follow the pattern: COUNTRY_EXPLORER_<SECTION>_<KEY>,
/// for example COUNTRY_EXPLORER_SOURCES_REST_ENDPOINT. Unparseable numeric
/// values are ignored.
fn apply_env_overrides(config: &mut ExplorerConfig) {
    if let Some(val) = env_var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_var("SOURCES_GRAPHQL_ENDPOINT") {
        config.sources.graphql.endpoint = val;
    }
    if let Some(secs) = env_var("SOURCES_GRAPHQL_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.sources.graphql.timeout_seconds = secs;
    }
    if let Some(val) = env_var("SOURCES_REST_ENDPOINT") {
        config.sources.rest.endpoint = val;
    }
    if let Some(secs) = env_var("SOURCES_REST_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.sources.rest.timeout_seconds = secs;
    }

    if let Some(val) = env_var("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_var("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CE_LOADER_TEST_HOST", "localhost:8080");
        let input = "endpoint = \"http://${CE_LOADER_TEST_HOST}/graphql\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "endpoint = \"http://localhost:8080/graphql\"\n");
        std::env::remove_var("CE_LOADER_TEST_HOST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CE_LOADER_MISSING_VAR");
        let input = "endpoint = \"${CE_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("CE_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("CE_LOADER_COMMENTED_VAR");
        let input = "# endpoint = \"${CE_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${CE_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-country-explorer.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-country-explorer.toml").unwrap();
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[sources.graphql]
endpoint = "http://localhost:4000/"
timeout_seconds = 10

[sources.rest]
endpoint = "http://localhost:5000/v3.1/all"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.sources.graphql.endpoint, "http://localhost:4000/");
        assert_eq!(config.sources.graphql.timeout_seconds, 10);
        assert_eq!(config.sources.rest.timeout_seconds, 30);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[sources.rest]\nendpoint = \"localhost\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
