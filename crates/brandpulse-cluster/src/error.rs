use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("embedding error: {0}")]
    Embed(String),

    #[error("cluster count must be at least 1")]
    ZeroClusters,

    #[error("cannot form {want} clusters from {have} signals")]
    TooFewSignals { have: usize, want: usize },

    #[error("embedding service unavailable at {url}: {reason}")]
    EmbedderUnavailable { url: String, reason: String },

    #[error("embedding vectors have inconsistent dimensions: {first} vs {other}")]
    DimensionMismatch { first: usize, other: usize },

    #[error(transparent)]
    Store(#[from] brandpulse_core::StoreError),
}
