use crate::app_config::{AppConfig, Environment, MetricKind};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// config pointing at `./data/workshops.csv`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("WORKSHOPS_ENV", "development"))?;
    let data_path = PathBuf::from(or_default("WORKSHOPS_DATA_PATH", "./data/workshops.csv"));
    let log_level = or_default("WORKSHOPS_LOG_LEVEL", "info");

    let result_limit = or_default("WORKSHOPS_RESULT_LIMIT", "5")
        .parse::<usize>()
        .map_err(|e| invalid("WORKSHOPS_RESULT_LIMIT", e.to_string()))?;
    if result_limit == 0 {
        return Err(invalid(
            "WORKSHOPS_RESULT_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    let distance_metric = or_default("WORKSHOPS_DISTANCE_METRIC", "geodesic")
        .parse::<MetricKind>()
        .map_err(|reason| invalid("WORKSHOPS_DISTANCE_METRIC", reason))?;

    let currency_symbol = or_default("WORKSHOPS_CURRENCY_SYMBOL", "\u{20b9}");

    Ok(AppConfig {
        env,
        data_path,
        log_level,
        result_limit,
        distance_metric,
        currency_symbol,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values are rejected rather than silently treated as development.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WORKSHOPS_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
