//! Topic clustering for accumulated crisis signals.
//!
//! Reads the whole signal store, embeds each signal text via an embedding
//! inference service, partitions the embeddings with seeded k-means, labels
//! each cluster with its most frequent content words, and writes the
//! clustered copy of the table for the dashboard.

pub mod embeddings;
pub mod error;
pub mod kmeans;
pub mod labeler;
pub mod pipeline;

pub use embeddings::EmbeddingClient;
pub use error::ClusterError;
pub use kmeans::kmeans;
pub use labeler::label_topic;
pub use pipeline::{run_analyze, AnalyzeOutcome, ClusterSummary};
