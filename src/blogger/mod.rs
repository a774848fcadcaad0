// ABOUTME: Blogger v3 REST API module
// ABOUTME: OAuth refresh-token auth, recent post listing, and post insertion

pub mod client;
pub mod error;
pub mod retry;
pub mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::{BloggerClient, Credentials, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL};
pub use error::{BloggerError, Result};
pub use retry::RetryPolicy;
pub use types::{window_start, BlogPost, NewPost, PostList, TokenResponse};

/// Operations the publishing pipeline needs from a blog.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Posts published within the last `days`, newest first.
    async fn recent_posts(
        &self,
        days: i64,
        max_results: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<BlogPost>>;

    async fn insert_post(
        &self,
        title: &str,
        html: &str,
        labels: &[String],
        is_draft: bool,
    ) -> Result<BlogPost>;
}
