// src/config/secrets.rs
use anyhow::{anyhow, Result};
use std::{env, fmt};

pub const ENV_FEED_TOKEN: &str = "TWITTER_BEARER_TOKEN";
pub const ENV_ASSET_KEY: &str = "PUMPFUN_API_KEY";
pub const ENV_WALLET_KEY: &str = "WALLET_PRIVATE_KEY";

/// Credentials supplied at startup. Never printed; `Debug` shows lengths only.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    pub feed_bearer_token: String,
    pub asset_api_key: String,
    /// Accepted for compatibility; nothing signs transactions.
    pub wallet_private_key: Option<String>,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("feed_bearer_token_len", &self.feed_bearer_token.len())
            .field("asset_api_key_len", &self.asset_api_key.len())
            .field("wallet_private_key", &self.wallet_private_key.is_some())
            .finish()
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(anyhow!("Missing {name} env var")),
    }
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        let wallet_private_key = env::var(ENV_WALLET_KEY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(Self {
            feed_bearer_token: required(ENV_FEED_TOKEN)?,
            asset_api_key: required(ENV_ASSET_KEY)?,
            wallet_private_key,
        })
    }
}
