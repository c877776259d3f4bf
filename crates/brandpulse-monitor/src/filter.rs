//! The crisis-signal acceptance rule.

use brandpulse_core::{truncate_chars, Signal, MAX_TEXT_CHARS};

use crate::types::{CandidateItem, ClassificationResult, SentimentLabel};

/// Decide whether a classified item qualifies as a crisis signal.
///
/// Two gates, both required:
/// 1. Relevance: the brand name appears in the raw text, case-insensitive.
///    Feeds over-fetch from topically-adjacent subreddits, so an explicit
///    brand mention is required.
/// 2. Sentiment: label is NEGATIVE and confidence is strictly above the
///    threshold. The default threshold (0.6) biases toward precision over
///    recall for crisis alerting.
///
/// On acceptance the signal text is truncated to the classifier input bound
/// and the confidence is rounded to 4 decimal places for storage stability.
/// Pure and idempotent: the same inputs always yield the same decision.
#[must_use]
pub fn decide(
    item: &CandidateItem,
    result: ClassificationResult,
    brand: &str,
    threshold: f64,
) -> Option<Signal> {
    let raw_text = item.raw_text();
    if !raw_text.to_lowercase().contains(&brand.to_lowercase()) {
        return None;
    }
    if result.label != SentimentLabel::Negative || result.confidence <= threshold {
        return None;
    }

    Some(Signal {
        date: item.created_at,
        brand: brand.to_string(),
        sentiment_score: round4(result.confidence),
        text: truncate_chars(&raw_text, MAX_TEXT_CHARS),
        url: item.url.clone(),
    })
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
