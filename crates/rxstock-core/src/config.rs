use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("RXSTOCK_API_BASE_URL")?;
    let env = parse_environment(&or_default("RXSTOCK_ENV", "development"))?;
    let log_level = or_default("RXSTOCK_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("RXSTOCK_REQUEST_TIMEOUT_SECS", "30")?;
    let resource_timeout_secs = parse_u64("RXSTOCK_RESOURCE_TIMEOUT_SECS", "60")?;
    let client_identifier = or_default("RXSTOCK_CLIENT_IDENTIFIER", "rxstock/0.1 (inventory)");
    let lists_path = PathBuf::from(or_default("RXSTOCK_LISTS_PATH", "./shopping_lists.json"));
    let search_debounce_ms = parse_u64("RXSTOCK_SEARCH_DEBOUNCE_MS", "400")?;

    Ok(AppConfig {
        api_base_url,
        env,
        log_level,
        request_timeout_secs,
        resource_timeout_secs,
        client_identifier,
        lists_path,
        search_debounce_ms,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RXSTOCK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
