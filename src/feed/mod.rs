pub mod board;
pub mod reddit;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use types::PostSummary;

/// Source of posts for one lane. Latency, failures and retries are the
/// provider's business; the arena only hands it a source name.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    async fn fetch_posts(&self, source: &str) -> Result<Vec<PostSummary>>;
}
