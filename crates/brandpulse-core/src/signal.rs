use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored signal text length in characters.
///
/// The same bound is applied to classifier input, so the persisted text is
/// exactly what was scored.
pub const MAX_TEXT_CHARS: usize = 512;

/// A persisted crisis signal: one negative-sentiment, brand-relevant post.
///
/// Created by the monitor filter and never mutated afterwards. The analyze
/// pass attaches a cluster id on a separate copy of the table, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub date: DateTime<Utc>,
    pub brand: String,
    /// Classifier confidence in [0, 1], rounded to 4 decimal places.
    pub sentiment_score: f64,
    /// Post text, truncated to [`MAX_TEXT_CHARS`] characters.
    #[serde(default)]
    pub text: String,
    pub url: String,
}

/// Truncate to at most `max` characters, respecting char boundaries.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_is_identity() {
        assert_eq!(truncate_chars("brake failure", 512), "brake failure");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // Multi-byte chars must not be split.
        let text = "日本語のテキスト";
        assert_eq!(truncate_chars(text, 3), "日本語");
    }

    #[test]
    fn truncate_caps_long_text() {
        let text = "x".repeat(1000);
        assert_eq!(truncate_chars(&text, MAX_TEXT_CHARS).chars().count(), 512);
    }
}
