use std::path::PathBuf;

/// Runtime configuration for both pipeline passes.
///
/// Loaded once at startup from environment variables (see
/// [`crate::config::load_app_config`]) and passed explicitly to the
/// pipelines; nothing re-reads the environment per item.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Brand name to monitor, e.g. `Toyota`. Also the value persisted in the
    /// `brand` column.
    pub brand: String,
    /// Subreddit feed identifier; multiple subreddits joined with `+`.
    pub feed: String,
    /// Maximum items fetched per monitor run.
    pub fetch_limit: usize,
    /// Minimum classifier confidence (exclusive) for a NEGATIVE item to be
    /// recorded as a crisis signal.
    pub crisis_threshold: f64,
    /// Target number of topic clusters for the analyze pass.
    pub num_clusters: usize,
    /// Base URL of the sentiment-classification inference service.
    pub inference_url: String,
    /// Base URL of the text-embedding inference service.
    pub embed_url: String,
    /// Path of the append-only signal store.
    pub store_path: PathBuf,
    /// Path the clustered copy of the table is written to.
    pub clustered_path: PathBuf,
    /// `User-Agent` sent to the feed endpoint; reddit rejects requests
    /// without one.
    pub user_agent: String,
    pub log_level: String,
}
