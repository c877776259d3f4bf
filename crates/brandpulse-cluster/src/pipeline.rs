//! Analyze pipeline orchestration.

use brandpulse_core::{AppConfig, SignalStore};

use crate::embeddings::EmbeddingClient;
use crate::error::ClusterError;
use crate::kmeans::kmeans;
use crate::labeler::label_topic;

/// Fixed seed so repeated runs over the same store are reproducible.
const KMEANS_SEED: u64 = 42;

/// One labeled topic cluster from an analyze run.
#[derive(Debug, Clone)]
pub struct ClusterSummary {
    /// Dense id in `[0, k)`; only meaningful within this run.
    pub id: usize,
    /// Number of signals assigned to this cluster.
    pub size: usize,
    /// Up to three representative keywords.
    pub keywords: Vec<String>,
}

/// Summary of one analyze run.
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    /// Signals read from the store and assigned a cluster.
    pub total_signals: usize,
    pub clusters: Vec<ClusterSummary>,
}

/// Run one analyze pass: read the whole store, embed, cluster, label, and
/// write the clustered copy of the table.
///
/// The clustered table goes to a separate output path; the signal store is
/// never modified. Cluster ids are recomputed from scratch each run and must
/// not be treated as stable topic keys by any consumer.
///
/// # Errors
///
/// - [`ClusterError::TooFewSignals`] when the store holds fewer signals than
///   the configured cluster count; nothing is written.
/// - [`ClusterError::EmbedderUnavailable`] if the embedding service fails
///   its startup health check (fatal, nothing is written).
/// - [`ClusterError::Embed`] if the embedding service fails.
/// - [`ClusterError::Store`] if the store cannot be read or the clustered
///   output cannot be written.
pub async fn run_analyze(
    config: &AppConfig,
    store: &SignalStore,
    embedder: &EmbeddingClient,
) -> Result<AnalyzeOutcome, ClusterError> {
    let signals = store.read_all()?;
    let k = config.num_clusters;

    if signals.len() < k {
        return Err(ClusterError::TooFewSignals {
            have: signals.len(),
            want: k,
        });
    }

    // Model unavailability is fatal before any embedding work starts.
    embedder.ensure_ready().await?;

    tracing::info!(
        brand = %config.brand,
        signals = signals.len(),
        clusters = k,
        "clustering accumulated signals"
    );

    let texts: Vec<&str> = signals.iter().map(|s| s.text.as_str()).collect();
    let embeddings = embedder.embed(&texts).await?;
    let assignments = kmeans(&embeddings, k, KMEANS_SEED)?;

    let mut clusters = Vec::with_capacity(k);
    for cluster_id in 0..k {
        let member_texts: Vec<&str> = texts
            .iter()
            .zip(&assignments)
            .filter(|&(_, &c)| c == cluster_id)
            .map(|(&text, _)| text)
            .collect();
        let keywords = label_topic(&member_texts);

        tracing::info!(
            cluster = cluster_id,
            size = member_texts.len(),
            topic = keywords.join(", "),
            "labeled topic cluster"
        );

        clusters.push(ClusterSummary {
            id: cluster_id,
            size: member_texts.len(),
            keywords,
        });
    }

    store.write_clustered(&config.clustered_path, &signals, &assignments)?;
    tracing::info!(path = %config.clustered_path.display(), "wrote clustered table");

    Ok(AnalyzeOutcome {
        total_signals: signals.len(),
        clusters,
    })
}
