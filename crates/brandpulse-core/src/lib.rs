//! Shared types, configuration, and the signal store for Brand Pulse.
//!
//! The monitor pass appends crisis signals here; the analyze pass reads them
//! back and writes a clustered copy. Everything HTTP-facing lives in the
//! `brandpulse-monitor` and `brandpulse-cluster` crates.

pub mod app_config;
pub mod config;
pub mod signal;
pub mod store;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use signal::{truncate_chars, Signal, MAX_TEXT_CHARS};
pub use store::{SignalStore, StoreError};
