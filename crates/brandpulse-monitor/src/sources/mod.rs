//! Feed sources for candidate posts.

mod reddit;

pub use reddit::RedditReader;
