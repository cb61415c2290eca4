// src/asset/mod.rs
//! Coin creation against a pump.fun-style HTTP API.

pub mod pumpportal;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

pub use pumpportal::PumpPortalClient;

/// Characters of post text kept in the coin description.
pub const DESCRIPTION_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Request body for the create endpoint. Unused links stay as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAssetRequest {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub telegram: String,
    pub twitter: String,
    pub website: String,
    pub file: Option<String>,
}

impl CreateAssetRequest {
    pub fn build(prefix: &str, name: &str, source_text: &str, source_url: &str) -> Self {
        let excerpt: String = source_text.chars().take(DESCRIPTION_CHARS).collect();
        Self {
            name: name.to_string(),
            symbol: crate::analyze::symbol_for(name),
            description: format!("{prefix}{excerpt}{ELLIPSIS}"),
            telegram: String::new(),
            twitter: String::new(),
            website: source_url.to_string(),
            file: None,
        }
    }
}

/// Parsed response body of a successful creation. Opaque to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetResult(pub Value);

impl AssetResult {
    /// Null, false, zero and empty values count as "nothing was created".
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}

#[async_trait::async_trait]
pub trait AssetCreator: Send + Sync {
    async fn create_asset(
        &self,
        name: &str,
        source_text: &str,
        source_url: &str,
    ) -> Result<AssetResult>;
    fn name(&self) -> &'static str;
}
