// src/feed/twitter.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::FeedConfig;
use crate::feed::normalize_text;
use crate::feed::types::{Engagement, FeedItem, FeedSource, ItemId};

/// The user-timeline endpoint rejects page sizes outside this range.
const MIN_RESULTS: usize = 5;
const MAX_RESULTS: usize = 100;

const TWEET_FIELDS: &str = "created_at,public_metrics,text";

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
    created_at: Option<DateTime<Utc>>,
    public_metrics: Option<Engagement>,
}

/// User timeline reader for the X/Twitter v2 API.
pub struct TwitterFeed {
    client: Client,
    base_url: String,
    account_id: String,
    bearer_token: String,
}

impl TwitterFeed {
    pub fn new(cfg: &FeedConfig, bearer_token: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = cfg.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("building feed http client")?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            account_id: cfg.account_id.clone(),
            bearer_token: bearer_token.into(),
        })
    }

    fn timeline_url(&self) -> String {
        format!("{}/2/users/{}/tweets", self.base_url, self.account_id)
    }
}

fn to_item(t: Tweet) -> Option<FeedItem> {
    let id: ItemId = match t.id.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(target: "feed", id = %t.id, error = %e, "skipping post with bad id");
            return None;
        }
    };
    Some(FeedItem {
        id,
        text: normalize_text(&t.text),
        created_at: t.created_at,
        engagement: t.public_metrics,
    })
}

#[async_trait]
impl FeedSource for TwitterFeed {
    async fn fetch_since(&self, since: Option<ItemId>, max_count: usize) -> Result<Vec<FeedItem>> {
        let max = max_count.clamp(MIN_RESULTS, MAX_RESULTS).to_string();
        let mut query: Vec<(&str, String)> = vec![
            ("max_results", max),
            ("tweet.fields", TWEET_FIELDS.to_string()),
        ];
        if let Some(id) = since {
            query.push(("since_id", id.to_string()));
        }

        let rsp = self
            .client
            .get(self.timeline_url())
            .bearer_auth(&self.bearer_token)
            .query(&query)
            .send()
            .await
            .context("timeline request")?;

        let status = rsp.status();
        if !status.is_success() {
            let body = rsp.text().await.unwrap_or_default();
            return Err(anyhow!("timeline HTTP {status}: {body}"));
        }

        let page: TimelineResponse = rsp.json().await.context("decoding timeline json")?;
        Ok(page.data.into_iter().filter_map(to_item).collect())
    }

    fn name(&self) -> &'static str {
        "twitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_without_data_is_empty() {
        let page: TimelineResponse =
            serde_json::from_str(r#"{"meta":{"result_count":0}}"#).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn tweet_maps_to_item_with_metrics() {
        let t: Tweet = serde_json::from_str(
            r#"{"id":"1790000000000000001","text":"A &amp; B","created_at":"2024-05-13T10:00:00.000Z",
                "public_metrics":{"retweet_count":1,"reply_count":2,"like_count":3,"quote_count":4,"bookmark_count":9}}"#,
        )
        .unwrap();
        let item = to_item(t).unwrap();
        assert_eq!(item.id, ItemId(1_790_000_000_000_000_001));
        assert_eq!(item.text, "A & B");
        assert_eq!(item.engagement.unwrap().like_count, 3);
        assert!(item.created_at.is_some());
    }

    #[test]
    fn bad_id_is_skipped() {
        let t = Tweet {
            id: "abc".into(),
            text: "x".into(),
            created_at: None,
            public_metrics: None,
        };
        assert!(to_item(t).is_none());
    }
}
