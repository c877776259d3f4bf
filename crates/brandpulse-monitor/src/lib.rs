//! Crisis-signal monitor for Brand Pulse.
//!
//! Fetches a batch of recent posts from the public reddit JSON feed, scores
//! each with a sentiment-inference service, filters for brand-relevant
//! negative posts above the crisis threshold, and appends the survivors to
//! the signal store in a single batch write.

pub mod classifier;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod sources;
pub mod types;

pub use classifier::SentimentClassifier;
pub use error::MonitorError;
pub use filter::decide;
pub use pipeline::{run_monitor, MonitorOutcome};
pub use sources::RedditReader;
pub use types::{CandidateItem, ClassificationResult, SentimentLabel};
