use std::collections::HashMap;
use std::env::VarError;

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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("BRANDPULSE_BRAND", "Toyota");
    m.insert("BRANDPULSE_INFERENCE_URL", "http://localhost:8080");
    m.insert("BRANDPULSE_EMBED_URL", "http://localhost:8081");
    m
}

#[test]
fn build_app_config_fails_without_brand() {
    let mut map = full_env();
    map.remove("BRANDPULSE_BRAND");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "BRANDPULSE_BRAND"),
        "expected MissingEnvVar(BRANDPULSE_BRAND), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_inference_url() {
    let mut map = full_env();
    map.remove("BRANDPULSE_INFERENCE_URL");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "BRANDPULSE_INFERENCE_URL"),
        "expected MissingEnvVar(BRANDPULSE_INFERENCE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.brand, "Toyota");
    assert_eq!(cfg.feed, "toyota+ToyotaTacoma+4Runner");
    assert_eq!(cfg.fetch_limit, 100);
    assert!((cfg.crisis_threshold - 0.6).abs() < f64::EPSILON);
    assert_eq!(cfg.num_clusters, 3);
    assert_eq!(cfg.store_path.to_str().unwrap(), "./Toyota_crisis_data.csv");
    assert_eq!(cfg.clustered_path.to_str().unwrap(), "./Toyota_clustered.csv");
}

#[test]
fn threshold_override_is_parsed() {
    let mut map = full_env();
    map.insert("BRANDPULSE_THRESHOLD", "0.85");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.crisis_threshold - 0.85).abs() < f64::EPSILON);
}

#[test]
fn threshold_out_of_range_fails() {
    let mut map = full_env();
    map.insert("BRANDPULSE_THRESHOLD", "1.5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_THRESHOLD"),
        "expected InvalidEnvVar(BRANDPULSE_THRESHOLD), got: {result:?}"
    );
}

#[test]
fn threshold_not_a_number_fails() {
    let mut map = full_env();
    map.insert("BRANDPULSE_THRESHOLD", "high");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_THRESHOLD"),
        "expected InvalidEnvVar(BRANDPULSE_THRESHOLD), got: {result:?}"
    );
}

#[test]
fn zero_clusters_fails() {
    let mut map = full_env();
    map.insert("BRANDPULSE_CLUSTERS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_CLUSTERS"),
        "expected InvalidEnvVar(BRANDPULSE_CLUSTERS), got: {result:?}"
    );
}

#[test]
fn fetch_limit_invalid_fails() {
    let mut map = full_env();
    map.insert("BRANDPULSE_FETCH_LIMIT", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_FETCH_LIMIT"),
        "expected InvalidEnvVar(BRANDPULSE_FETCH_LIMIT), got: {result:?}"
    );
}

#[test]
fn store_paths_can_be_overridden() {
    let mut map = full_env();
    map.insert("BRANDPULSE_STORE_PATH", "/data/signals.csv");
    map.insert("BRANDPULSE_CLUSTERED_PATH", "/data/clustered.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.store_path.to_str().unwrap(), "/data/signals.csv");
    assert_eq!(cfg.clustered_path.to_str().unwrap(), "/data/clustered.csv");
}
