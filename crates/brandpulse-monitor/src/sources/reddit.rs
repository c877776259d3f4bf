//! Reader for reddit's public `.json` listing endpoint.
//!
//! No API keys: the endpoint is public but rejects requests without a
//! `User-Agent` header and rate-limits aggressively (HTTP 429). Both
//! conditions are surfaced as typed errors rather than empty results.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::MonitorError;
use crate::types::CandidateItem;

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit listing wrapper.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    id: Option<String>,
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
    created_utc: Option<f64>,
}

/// Client for fetching recent posts from one or more subreddits.
///
/// The feed identifier may join multiple subreddits with `+`
/// (e.g. `toyota+ToyotaTacoma+4Runner`). Read-only; no retry policy — a
/// failed fetch is reported to the caller, which decides whether to retry.
pub struct RedditReader {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl RedditReader {
    /// Create a reader against the real reddit endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Http`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, MonitorError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent)
    }

    /// Create a reader against an arbitrary base URL (used by tests to point
    /// at a local mock server).
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self, MonitorError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Fetch up to `limit` of the newest posts in `feed`.
    ///
    /// Posts missing a title, permalink, or timestamp are skipped rather
    /// than failing the batch.
    ///
    /// # Errors
    ///
    /// - [`MonitorError::RateLimited`] on HTTP 429.
    /// - [`MonitorError::FeedStatus`] on any other non-200 status.
    /// - [`MonitorError::FeedParse`] if the listing JSON is malformed.
    pub async fn fetch_new(
        &self,
        feed: &str,
        limit: usize,
    ) -> Result<Vec<CandidateItem>, MonitorError> {
        let url = format!("{}/r/{feed}/new.json?limit={limit}", self.base_url);
        tracing::debug!(%url, "fetching feed");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(MonitorError::RateLimited {
                feed: feed.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MonitorError::FeedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| MonitorError::FeedParse(e.to_string()))?;

        let total = listing.data.children.len();
        let items: Vec<CandidateItem> = listing
            .data
            .children
            .iter()
            .filter_map(to_candidate)
            .collect();

        if items.len() < total {
            tracing::debug!(
                feed,
                skipped = total - items.len(),
                "skipped malformed posts"
            );
        }

        Ok(items)
    }
}

/// Convert one listing child to a candidate item.
///
/// Returns `None` when required fields are missing; the caller skips the
/// post and continues the batch.
fn to_candidate(post: &Post) -> Option<CandidateItem> {
    let id = post.data.id.as_deref()?.to_string();
    let title = post
        .data
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();
    let permalink = post.data.permalink.as_deref()?;

    #[allow(clippy::cast_possible_truncation)]
    let created_at: DateTime<Utc> = post
        .data
        .created_utc
        .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))?;

    let body = match post.data.selftext.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() && text != "[deleted]" && text != "[removed]" => {
            text.to_string()
        }
        _ => String::new(),
    };

    Some(CandidateItem {
        id,
        title,
        body,
        created_at,
        url: format!("https://reddit.com{permalink}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(
        id: Option<&str>,
        title: Option<&str>,
        selftext: Option<&str>,
        permalink: Option<&str>,
        created_utc: Option<f64>,
    ) -> Post {
        Post {
            data: PostData {
                id: id.map(String::from),
                title: title.map(String::from),
                selftext: selftext.map(String::from),
                permalink: permalink.map(String::from),
                created_utc,
            },
        }
    }

    #[test]
    fn complete_post_converts() {
        let p = post(
            Some("abc"),
            Some("Toyota brakes failed"),
            Some("on the highway"),
            Some("/r/toyota/abc"),
            Some(1_715_947_200.0),
        );
        let item = to_candidate(&p).unwrap();
        assert_eq!(item.raw_text(), "Toyota brakes failed on the highway");
        assert_eq!(item.url, "https://reddit.com/r/toyota/abc");
    }

    #[test]
    fn missing_title_is_skipped() {
        let p = post(Some("abc"), None, None, Some("/r/t/abc"), Some(0.0));
        assert!(to_candidate(&p).is_none());
    }

    #[test]
    fn missing_permalink_is_skipped() {
        let p = post(Some("abc"), Some("title"), None, None, Some(0.0));
        assert!(to_candidate(&p).is_none());
    }

    #[test]
    fn deleted_body_treated_as_empty() {
        let p = post(
            Some("abc"),
            Some("Toyota recall"),
            Some("[deleted]"),
            Some("/r/t/abc"),
            Some(0.0),
        );
        let item = to_candidate(&p).unwrap();
        assert_eq!(item.body, "");
        assert_eq!(item.raw_text(), "Toyota recall");
    }
}
