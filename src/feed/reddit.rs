use super::types::{PostSummary, RedditListing};
use super::FeedProvider;
use crate::config::FeedConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct RedditFeed {
    client: Client,
    base_url: String,
    post_limit: u32,
}

/// Users often type the prefix they see on reddit; the API path adds its own.
fn normalize_source(source: &str) -> &str {
    let s = source.trim().trim_start_matches('/');
    s.strip_prefix("r/").unwrap_or(s)
}

/// Longest slice of an error body kept in a lane's error line and the log.
const MAX_ERROR_BODY: usize = 200;

/// Parse a reddit listing body into post summaries.
pub fn parse_listing(json: &str) -> Result<Vec<PostSummary>> {
    let listing: RedditListing =
        serde_json::from_str(json).context("failed to parse reddit listing")?;
    Ok(listing_posts(listing))
}

/// Non-post children and posts missing an id or title are skipped.
fn listing_posts(listing: RedditListing) -> Vec<PostSummary> {
    listing
        .data
        .children
        .into_iter()
        .filter(|c| c.kind.is_empty() || c.kind == "t3")
        .filter_map(|c| c.data.into_summary())
        .collect()
}

/// Block pages come back as full HTML documents; keep the start, on one line.
fn error_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}

impl RedditFeed {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_max_idle_per_host(4)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            post_limit: config.post_limit,
        })
    }

    pub fn listing_url(&self, source: &str) -> String {
        format!(
            "{}/r/{}.json?limit={}",
            self.base_url,
            normalize_source(source),
            self.post_limit,
        )
    }
}

#[async_trait]
impl FeedProvider for RedditFeed {
    async fn fetch_posts(&self, source: &str) -> Result<Vec<PostSummary>> {
        let url = self.listing_url(source);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("reddit request for r/{} failed", normalize_source(source)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!(
                "reddit r/{} ({}): {}",
                normalize_source(source),
                status,
                error_snippet(&body)
            );
        }

        let listing: RedditListing = resp
            .json()
            .await
            .context("failed to parse reddit listing")?;
        Ok(listing_posts(listing))
    }
}
