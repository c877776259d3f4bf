//! Client for the text-embedding inference service.

use serde::Serialize;

use crate::error::ClusterError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

/// Embedding service HTTP client.
///
/// Pure function of input text and model version; no persisted state. The
/// model fixes the vector dimensionality (e.g. 384 for MiniLM-class models).
pub struct EmbeddingClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

impl EmbeddingClient {
    #[must_use]
    pub fn new(embed_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: embed_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the embedding service is up before the analyze pass
    /// touches anything.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::EmbedderUnavailable`] if the health endpoint
    /// cannot be reached or reports a non-success status. This is fatal for
    /// the run.
    pub async fn ensure_ready(&self) -> Result<(), ClusterError> {
        let url = format!("{}/health", self.base_url);
        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| ClusterError::EmbedderUnavailable {
                    url: self.base_url.clone(),
                    reason: e.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(ClusterError::EmbedderUnavailable {
                url: self.base_url.clone(),
                reason: format!("health check returned status {}", response.status()),
            });
        }
        Ok(())
    }

    /// Generate embeddings for a batch of texts.
    ///
    /// Texts are batched into groups of [`BATCH_SIZE`] per request. Returns
    /// one embedding vector per input text, in the same order. Empty texts
    /// are sent as-is; the model embeds the empty string rather than
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::Embed`] if a request fails, the response
    /// cannot be parsed, or the service returns a wrong embedding count.
    pub async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, ClusterError> {
        let url = format!("{}/embed", self.base_url);
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest { inputs: chunk };
            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| ClusterError::Embed(format!("embed request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(ClusterError::Embed(format!(
                    "embedding service returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| ClusterError::Embed(format!("embed response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(ClusterError::Embed(format!(
                    "embedding service returned {} vectors for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}
