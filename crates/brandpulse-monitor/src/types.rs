use chrono::{DateTime, Utc};

/// A candidate post pulled from the feed, before classification.
///
/// Ephemeral: built per fetch, consumed by the classifier and filter, never
/// persisted.
#[derive(Debug, Clone)]
pub struct CandidateItem {
    pub id: String,
    pub title: String,
    /// Post body; empty for link-only posts and `[deleted]`/`[removed]` ones.
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl CandidateItem {
    /// Title and body joined the way the classifier and filter see them.
    #[must_use]
    pub fn raw_text(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, self.body)
        }
    }
}

/// Sentiment polarity assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// One classifier verdict for one candidate item.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationResult {
    pub label: SentimentLabel,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}
