use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Normalized post used by the lane cards (provider-agnostic).
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub score: i64,
    pub num_comments: u64,
    pub permalink: String,
    pub created_utc: DateTime<Utc>,
    pub stickied: bool,
}

/// reddit `/r/{name}.json` response: a Listing of t3 things
#[derive(Debug, Deserialize)]
pub struct RedditListing {
    pub data: RedditListingData,
}

#[derive(Debug, Deserialize)]
pub struct RedditListingData {
    #[serde(default)]
    pub children: Vec<RedditChild>,
}

#[derive(Debug, Deserialize)]
pub struct RedditChild {
    #[serde(default)]
    pub kind: String,
    pub data: RedditPost,
}

#[derive(Debug, Deserialize)]
pub struct RedditPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub stickied: bool,
}

impl RedditPost {
    /// Convert to a summary; posts without an id or title are dropped.
    pub fn into_summary(self) -> Option<PostSummary> {
        if self.id.is_empty() || self.title.is_empty() {
            return None;
        }
        let created_utc = Utc
            .timestamp_opt(self.created_utc as i64, 0)
            .single()
            .unwrap_or_default();
        Some(PostSummary {
            id: self.id,
            title: self.title,
            author: self.author,
            score: self.score,
            num_comments: self.num_comments,
            permalink: self.permalink,
            created_utc,
            stickied: self.stickied,
        })
    }
}
