// src/feed/mod.rs
pub mod twitter;
pub mod types;

use crate::feed::types::{FeedItem, FeedSource, ItemId};
use crate::metrics::ensure_metrics_described;
use metrics::counter;

/// Highest item id seen so far. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Watermark(Option<ItemId>);

impl Watermark {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<ItemId> {
        self.0
    }

    /// True when `id` is strictly newer than the watermark.
    pub fn admits(&self, id: ItemId) -> bool {
        self.0.map_or(true, |w| id > w)
    }

    pub fn advance(&mut self, id: ItemId) {
        if self.admits(id) {
            self.0 = Some(id);
        }
    }
}

/// Decode the HTML entities the feed API leaves in post text. Nothing else is
/// touched: the coin description quotes the post as written.
pub fn normalize_text(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Fetch items newer than `watermark`, newest first, and advance the watermark.
///
/// Errors are logged and collapse to an empty result with the watermark left
/// untouched, so a failed fetch looks exactly like a quiet period to callers.
pub async fn fetch_new_items(
    source: &dyn FeedSource,
    watermark: &mut Watermark,
    max_count: usize,
) -> Vec<FeedItem> {
    ensure_metrics_described();

    let mut items = match source.fetch_since(watermark.get(), max_count).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(target: "feed", error = ?e, source = source.name(), "feed fetch failed");
            counter!("feed_fetch_errors_total").increment(1);
            return Vec::new();
        }
    };

    // The API honours since_id; this keeps the invariant if a source does not.
    items.retain(|it| watermark.admits(it.id));
    items.sort_by(|a, b| b.id.cmp(&a.id));

    if let Some(newest) = items.first() {
        watermark.advance(newest.id);
    }
    counter!("feed_items_total").increment(items.len() as u64);
    tracing::debug!(target: "feed", count = items.len(), watermark = ?watermark.get(), "fetched");

    items
}
