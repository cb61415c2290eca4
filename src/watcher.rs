//! Polling loop: fetch, score, create, remember. Forever.

use anyhow::{Context, Result};
use metrics::{counter, gauge};
use std::collections::HashSet;
use std::time::Duration;

use crate::analyze::{generate_name, score};
use crate::asset::AssetCreator;
use crate::config::BotConfig;
use crate::feed::types::{FeedItem, FeedSource, ItemId};
use crate::feed::{fetch_new_items, Watermark};
use crate::metrics::ensure_metrics_described;

/// Per-cycle tally, for logs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub skipped: usize,
    pub evaluated: usize,
    pub attempted: usize,
    pub created: usize,
    pub failed: usize,
}

/// Builds the canonical URL of a post from its id.
pub type PostUrlFn = Box<dyn Fn(ItemId) -> Result<String> + Send + Sync>;

pub struct Watcher<F, A> {
    feed: F,
    creator: A,
    post_url: PostUrlFn,
    max_results: usize,
    interval: Duration,
    processed: HashSet<ItemId>,
    watermark: Watermark,
}

impl<F: FeedSource, A: AssetCreator> Watcher<F, A> {
    pub fn new(feed: F, creator: A, cfg: &BotConfig) -> Self {
        let feed_cfg = cfg.feed.clone();
        Self {
            feed,
            creator,
            post_url: Box::new(move |id: ItemId| -> Result<String> {
                let raw = feed_cfg.post_url(id);
                let url = reqwest::Url::parse(&raw).with_context(|| format!("post url {raw}"))?;
                Ok(String::from(url))
            }),
            max_results: cfg.feed.max_results,
            interval: cfg.watcher.poll_interval(),
            processed: HashSet::new(),
            watermark: Watermark::new(),
        }
    }

    pub fn with_post_url(mut self, f: PostUrlFn) -> Self {
        self.post_url = f;
        self
    }

    pub fn is_processed(&self, id: ItemId) -> bool {
        self.processed.contains(&id)
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn watermark(&self) -> Watermark {
        self.watermark
    }

    /// Evaluate one item and attempt creation if it qualifies. Returns
    /// `Some(created)` when an attempt was made.
    async fn handle_item(&self, item: &FeedItem) -> Result<Option<bool>> {
        let preview: String = item.text.chars().take(50).collect();
        tracing::info!(target: "watcher", id = %item.id, text = %preview, "evaluating new post");

        let result = score(&item.text);
        if !result.decision {
            tracing::info!(target: "watcher", id = %item.id, score = result.score, "below threshold");
            return Ok(None);
        }
        counter!("watcher_decisions_total").increment(1);
        tracing::info!(
            target: "watcher",
            id = %item.id,
            score = result.score,
            topic = result.topic_related,
            meme = result.meme_potential,
            symbols = result.symbol_count,
            emphasis = result.emphasis,
            "threshold cleared"
        );

        let name = generate_name(&item.text);
        let url = (self.post_url)(item.id)?;
        let created = match self.creator.create_asset(&name, &item.text, &url).await {
            Ok(res) if res.is_truthy() => {
                tracing::info!(target: "watcher", %name, "coin created");
                true
            }
            Ok(res) => {
                tracing::error!(target: "watcher", %name, body = %res.0, "coin not created: empty response");
                false
            }
            Err(e) => {
                tracing::error!(target: "watcher", %name, error = ?e, creator = self.creator.name(), "coin not created");
                false
            }
        };
        Ok(Some(created))
    }

    /// One fetch-evaluate-remember pass.
    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        ensure_metrics_described();

        let items = fetch_new_items(&self.feed, &mut self.watermark, self.max_results).await;
        let mut report = CycleReport {
            fetched: items.len(),
            ..Default::default()
        };

        for item in &items {
            if self.processed.contains(&item.id) {
                report.skipped += 1;
                counter!("watcher_items_skipped_total").increment(1);
                continue;
            }

            report.evaluated += 1;
            // An error here aborts the rest of the cycle; `run` logs it.
            match self.handle_item(item).await? {
                Some(true) => {
                    report.attempted += 1;
                    report.created += 1;
                }
                Some(false) => {
                    report.attempted += 1;
                    report.failed += 1;
                }
                None => {}
            }

            // Marked even when creation failed: one attempt per item, ever.
            self.processed.insert(item.id);
        }

        counter!("watcher_cycles_total").increment(1);
        gauge!("watcher_last_cycle_ts").set(chrono::Utc::now().timestamp() as f64);
        Ok(report)
    }

    /// Run cycles separated by the fixed interval until the process is killed.
    pub async fn run(mut self) {
        tracing::info!(
            target: "watcher",
            feed = self.feed.name(),
            creator = self.creator.name(),
            interval_secs = self.interval.as_secs(),
            "watcher starting"
        );
        loop {
            match self.run_cycle().await {
                Ok(report) => {
                    tracing::debug!(target: "watcher", ?report, "cycle done");
                }
                Err(e) => {
                    tracing::error!(target: "watcher", error = ?e, "cycle failed");
                    counter!("watcher_cycle_errors_total").increment(1);
                }
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}
