use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by feed {feed}")]
    RateLimited { feed: String },

    #[error("unexpected HTTP status {status} from {url}")]
    FeedStatus { status: u16, url: String },

    #[error("feed response parse error: {0}")]
    FeedParse(String),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("classifier unavailable at {url}: {reason}")]
    ClassifierUnavailable { url: String, reason: String },

    #[error(transparent)]
    Store(#[from] brandpulse_core::StoreError),
}
