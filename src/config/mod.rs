// src/config/mod.rs
//! Bot configuration: one TOML/JSON file with defaults for every field, plus
//! secrets taken from the environment.

pub mod secrets;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use secrets::Secrets;

pub const ENV_CONFIG_PATH: &str = "BOT_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/bot.toml";
pub const DEFAULT_JSON_PATH: &str = "config/bot.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub feed: FeedConfig,
    pub asset: AssetConfig,
    pub watcher: WatcherConfig,
    /// Serve Prometheus metrics here when set, e.g. "0.0.0.0:9000".
    pub metrics_listen: Option<SocketAddr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    /// Numeric account id whose timeline is polled.
    pub account_id: String,
    /// Handle used to build canonical post URLs.
    pub account_handle: String,
    pub max_results: usize,
    pub request_timeout_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com".to_string(),
            account_id: "44196397".to_string(),
            account_handle: "elonmusk".to_string(),
            max_results: 10,
            request_timeout_secs: None,
        }
    }
}

impl FeedConfig {
    pub fn post_url(&self, id: impl std::fmt::Display) -> String {
        format!("https://twitter.com/{}/status/{}", self.account_handle, id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub base_url: String,
    pub description_prefix: String,
    /// No timeout unless set: a hung request stalls the loop.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pumpportal.fun/api".to_string(),
            description_prefix: "Inspired by Elon Musk's tweet: ".to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub poll_interval_secs: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
        }
    }
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_from(path: &Path) -> Result<BotConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading bot config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing bot config {}", path.display()))
}

/// Load config using env var + fallbacks:
/// 1) $BOT_CONFIG_PATH
/// 2) config/bot.toml
/// 3) config/bot.json
/// 4) built-in defaults
pub fn load_default() -> Result<BotConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        }
        return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
    }
    for p in [DEFAULT_TOML_PATH, DEFAULT_JSON_PATH] {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        }
    }
    Ok(BotConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<BotConfig> {
    let cfg: BotConfig = match hint_ext {
        "json" => serde_json::from_str(s)?,
        _ => toml::from_str(s)?,
    };
    validate(cfg)
}

fn validate(cfg: BotConfig) -> Result<BotConfig> {
    if cfg.watcher.poll_interval_secs == 0 {
        return Err(anyhow!("watcher.poll_interval_secs must be > 0"));
    }
    if cfg.feed.account_id.trim().is_empty() {
        return Err(anyhow!("feed.account_id must not be empty"));
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = parse_config(
            r#"
            [watcher]
            poll_interval_secs = 5
            "#,
            "toml",
        )
        .unwrap();
        assert_eq!(cfg.watcher.poll_interval(), Duration::from_secs(5));
        assert_eq!(cfg.feed, FeedConfig::default());
        assert!(cfg.metrics_listen.is_none());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = parse_config(r#"{"watcher":{"poll_interval_secs":0}}"#, "json").unwrap_err();
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[test]
    fn post_url_uses_handle() {
        let f = FeedConfig::default();
        assert_eq!(f.post_url(42), "https://twitter.com/elonmusk/status/42");
    }
}
