//! HTTP client for the sentiment-classification inference service.

use serde::{Deserialize, Serialize};

use brandpulse_core::{truncate_chars, MAX_TEXT_CHARS};

use crate::error::MonitorError;
use crate::types::{ClassificationResult, SentimentLabel};

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    label: String,
    score: f64,
}

/// Client for a binary sentiment model served over HTTP.
///
/// Deterministic for a fixed model version and input. The model is expensive
/// to load, so the service (and this handle) is created once per run and
/// passed to the pipeline; [`SentimentClassifier::ensure_ready`] fails fast
/// at startup if the model is unavailable.
pub struct SentimentClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl SentimentClassifier {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the inference service is up before processing any items.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::ClassifierUnavailable`] if the health
    /// endpoint cannot be reached or reports a non-success status. This is
    /// fatal for the run.
    pub async fn ensure_ready(&self) -> Result<(), MonitorError> {
        let url = format!("{}/health", self.base_url);
        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| MonitorError::ClassifierUnavailable {
                    url: self.base_url.clone(),
                    reason: e.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(MonitorError::ClassifierUnavailable {
                url: self.base_url.clone(),
                reason: format!("health check returned status {}", response.status()),
            });
        }
        Ok(())
    }

    /// Classify one text, truncating it to [`MAX_TEXT_CHARS`] characters
    /// before sending (the model rejects over-length input; we never do).
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Classifier`] if the request fails, the
    /// response cannot be parsed, or the label is not POSITIVE/NEGATIVE.
    /// Callers treat this as a per-item failure and skip the item.
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult, MonitorError> {
        let bounded = truncate_chars(text, MAX_TEXT_CHARS);
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { inputs: &bounded })
            .send()
            .await
            .map_err(|e| MonitorError::Classifier(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(MonitorError::Classifier(format!(
                "inference returned status {}",
                response.status()
            )));
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| MonitorError::Classifier(format!("response parse error: {e}")))?;

        let label = match parsed.label.as_str() {
            "NEGATIVE" => SentimentLabel::Negative,
            "POSITIVE" => SentimentLabel::Positive,
            other => {
                return Err(MonitorError::Classifier(format!(
                    "unrecognized label: {other}"
                )))
            }
        };

        if !(0.0..=1.0).contains(&parsed.score) {
            return Err(MonitorError::Classifier(format!(
                "confidence {} out of range",
                parsed.score
            )));
        }

        Ok(ClassificationResult {
            label,
            confidence: parsed.score,
        })
    }
}
