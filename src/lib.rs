// src/lib.rs
// Public library surface for the bot binary and integration tests.

pub mod analyze;
pub mod asset;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod watcher;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{generate_name, score, ScoreResult};
pub use crate::asset::{AssetCreator, AssetResult, PumpPortalClient};
pub use crate::config::{BotConfig, Secrets};
pub use crate::feed::twitter::TwitterFeed;
pub use crate::feed::types::{FeedItem, FeedSource, ItemId};
pub use crate::feed::{fetch_new_items, Watermark};
pub use crate::watcher::{CycleReport, Watcher};

use tracing::{info, warn};

/// Wire the real clients from config + secrets.
pub fn build_watcher(
    cfg: &BotConfig,
    secrets: &Secrets,
) -> anyhow::Result<Watcher<TwitterFeed, PumpPortalClient>> {
    // Safe diagnostics: only key lengths
    info!(
        account = %cfg.feed.account_id,
        feed_key_len = secrets.feed_bearer_token.len(),
        asset_key_len = secrets.asset_api_key.len(),
        "building watcher"
    );
    if secrets.wallet_private_key.is_some() {
        warn!("wallet key supplied but nothing signs transactions; it is ignored");
    }
    let feed = TwitterFeed::new(&cfg.feed, secrets.feed_bearer_token.clone())?;
    let creator = PumpPortalClient::new(&cfg.asset, secrets.asset_api_key.clone())?;
    Ok(Watcher::new(feed, creator, cfg))
}
