//! Naive keyword labeling for topic clusters.

use std::collections::HashMap;

/// Words too common to say anything about a topic.
const STOPWORDS: &[&str] = &[
    "the", "to", "and", "a", "of", "is", "in", "it", "for", "my", "on", "with",
];

/// Maximum keywords per label.
const MAX_KEYWORDS: usize = 3;

/// Derive up to three representative keywords for one cluster's texts.
///
/// Lower-cases everything, tokenizes on whitespace, drops stopwords and
/// tokens of length <= 3, and returns the most frequent remaining tokens.
/// Ties on equal frequency are broken by first occurrence in the combined
/// token stream, so the label is deterministic for a fixed input order.
///
/// This is "most frequent content word", not a topic model — labels for
/// small or noisy clusters may not be meaningful, and that is accepted.
#[must_use]
pub fn label_topic<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_idx = 0_usize;

    for text in texts {
        for token in text.as_ref().to_lowercase().split_whitespace() {
            // Length in characters, not bytes, so multi-byte tokens are
            // measured the same as ASCII ones.
            if token.chars().count() <= 3 || STOPWORDS.contains(&token) {
                continue;
            }
            let entry = counts.entry(token.to_string()).or_insert_with(|| {
                let idx = next_idx;
                next_idx += 1;
                (0, idx)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token)
        .collect()
}
