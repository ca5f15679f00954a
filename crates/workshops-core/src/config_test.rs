use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "WORKSHOPS_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.data_path, Path::new("./data/workshops.csv"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.result_limit, 5);
    assert_eq!(cfg.distance_metric, MetricKind::Geodesic);
    assert_eq!(cfg.currency_symbol, "\u{20b9}");
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WORKSHOPS_ENV"),
        "expected InvalidEnvVar(WORKSHOPS_ENV), got: {result:?}"
    );
}

#[test]
fn data_path_override() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_DATA_PATH", "/srv/data/Workshop details.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.data_path, Path::new("/srv/data/Workshop details.csv"));
}

#[test]
fn result_limit_override() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_RESULT_LIMIT", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.result_limit, 10);
}

#[test]
fn result_limit_invalid() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_RESULT_LIMIT", "five");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WORKSHOPS_RESULT_LIMIT"),
        "expected InvalidEnvVar(WORKSHOPS_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn result_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_RESULT_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "WORKSHOPS_RESULT_LIMIT" && reason.contains("at least 1")),
        "expected InvalidEnvVar(WORKSHOPS_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn distance_metric_haversine() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_DISTANCE_METRIC", "Haversine");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.distance_metric, MetricKind::Haversine);
}

#[test]
fn distance_metric_invalid() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_DISTANCE_METRIC", "manhattan");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WORKSHOPS_DISTANCE_METRIC"),
        "expected InvalidEnvVar(WORKSHOPS_DISTANCE_METRIC), got: {result:?}"
    );
}

#[test]
fn currency_symbol_override() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_CURRENCY_SYMBOL", "Rs. ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.currency_symbol, "Rs. ");
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("WORKSHOPS_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
