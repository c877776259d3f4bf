//! Monitor pipeline orchestration.

use brandpulse_core::{AppConfig, Signal, SignalStore};

use crate::classifier::SentimentClassifier;
use crate::error::MonitorError;
use crate::filter::decide;
use crate::sources::RedditReader;

/// Summary of one monitor run.
#[derive(Debug, Clone, Default)]
pub struct MonitorOutcome {
    /// Candidate items returned by the feed.
    pub fetched: usize,
    /// Items skipped because per-item classification failed.
    pub skipped: usize,
    /// Signals appended to the store this run.
    pub stored: usize,
    /// Set when the feed fetch failed; the run still completes with zero
    /// new signals.
    pub feed_failure: Option<String>,
    /// True when the feed failure was an HTTP 429.
    pub rate_limited: bool,
}

/// Run one monitor pass: fetch, classify, filter, append.
///
/// The store append happens exactly once, after the whole batch has been
/// filtered — an aborted run never leaves a partial batch behind.
///
/// Feed failures (rate limiting included) are reported in the outcome and
/// the run completes with zero new signals. Per-item classification
/// failures skip the item.
///
/// # Errors
///
/// - [`MonitorError::ClassifierUnavailable`] if the inference service fails
///   its startup health check (fatal, nothing is processed).
/// - [`MonitorError::Store`] if the final append fails (fatal, no partial
///   writes).
pub async fn run_monitor(
    config: &AppConfig,
    store: &SignalStore,
    reader: &RedditReader,
    classifier: &SentimentClassifier,
) -> Result<MonitorOutcome, MonitorError> {
    // Model unavailability is fatal at startup, not per item.
    classifier.ensure_ready().await?;

    let items = match reader.fetch_new(&config.feed, config.fetch_limit).await {
        Ok(items) => items,
        Err(e) => {
            let rate_limited = matches!(e, MonitorError::RateLimited { .. });
            tracing::warn!(
                feed = %config.feed,
                error = %e,
                rate_limited,
                "feed fetch failed; completing run with zero new signals"
            );
            return Ok(MonitorOutcome {
                feed_failure: Some(e.to_string()),
                rate_limited,
                ..MonitorOutcome::default()
            });
        }
    };

    tracing::info!(
        brand = %config.brand,
        feed = %config.feed,
        count = items.len(),
        "analyzing candidate posts"
    );

    let mut signals: Vec<Signal> = Vec::new();
    let mut skipped = 0_usize;

    for item in &items {
        let result = match classifier.classify(&item.raw_text()).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(id = %item.id, error = %e, "classification failed, skipping item");
                skipped += 1;
                continue;
            }
        };

        if let Some(signal) = decide(item, result, &config.brand, config.crisis_threshold) {
            tracing::info!(
                url = %signal.url,
                score = signal.sentiment_score,
                "crisis signal detected"
            );
            signals.push(signal);
        }
    }

    // Single batch append; a failure here is fatal and leaves no partial rows.
    store.append(&signals)?;

    tracing::info!(
        fetched = items.len(),
        skipped,
        stored = signals.len(),
        "monitor run complete"
    );

    Ok(MonitorOutcome {
        fetched: items.len(),
        skipped,
        stored: signals.len(),
        feed_failure: None,
        rate_limited: false,
    })
}
