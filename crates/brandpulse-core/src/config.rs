use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

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
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let brand = require("BRANDPULSE_BRAND")?;
    let inference_url = require("BRANDPULSE_INFERENCE_URL")?;
    let embed_url = require("BRANDPULSE_EMBED_URL")?;

    let feed = or_default("BRANDPULSE_FEED", "toyota+ToyotaTacoma+4Runner");
    let fetch_limit = parse_usize("BRANDPULSE_FETCH_LIMIT", "100")?;

    let crisis_threshold = parse_f64("BRANDPULSE_THRESHOLD", "0.6")?;
    if !(0.0..=1.0).contains(&crisis_threshold) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_THRESHOLD".to_string(),
            reason: format!("must be in [0, 1], got {crisis_threshold}"),
        });
    }

    let num_clusters = parse_usize("BRANDPULSE_CLUSTERS", "3")?;
    if num_clusters == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_CLUSTERS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let store_path = PathBuf::from(or_default(
        "BRANDPULSE_STORE_PATH",
        &format!("./{brand}_crisis_data.csv"),
    ));
    let clustered_path = PathBuf::from(or_default(
        "BRANDPULSE_CLUSTERED_PATH",
        &format!("./{brand}_clustered.csv"),
    ));

    let user_agent = or_default("BRANDPULSE_USER_AGENT", "brandpulse/0.1 (crisis-monitor)");
    let log_level = or_default("BRANDPULSE_LOG_LEVEL", "info");

    Ok(AppConfig {
        brand,
        feed,
        fetch_limit,
        crisis_threshold,
        num_clusters,
        inference_url,
        embed_url,
        store_path,
        clustered_path,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
