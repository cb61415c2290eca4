// src/feed/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Post identifier. Feed ids are snowflakes, so numeric order is time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Engagement {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: ItemId,
    pub text: String, // entity-decoded
    pub created_at: Option<DateTime<Utc>>,
    pub engagement: Option<Engagement>,
}

impl FeedItem {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            text: text.into(),
            created_at: None,
            engagement: None,
        }
    }
}

/// A feed that can list items strictly newer than `since`, newest first.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_since(&self, since: Option<ItemId>, max_count: usize) -> Result<Vec<FeedItem>>;
    fn name(&self) -> &'static str;
}
