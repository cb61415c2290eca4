use anyhow::{anyhow, Context, Result};
use metrics::counter;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{AssetCreator, AssetResult, CreateAssetRequest};
use crate::config::AssetConfig;

#[derive(Clone)]
pub struct PumpPortalClient {
    client: Client,
    base_url: String,
    api_key: String,
    description_prefix: String,
}

impl PumpPortalClient {
    pub fn new(cfg: &AssetConfig, api_key: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = cfg.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build().context("building asset http client")?,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            description_prefix: cfg.description_prefix.clone(),
        })
    }

    fn create_url(&self) -> String {
        format!("{}/coins/create", self.base_url)
    }

    async fn post(&self, payload: &CreateAssetRequest) -> Result<AssetResult> {
        let rsp = self
            .client
            .post(self.create_url())
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .context("create request")?;

        let status = rsp.status();
        if status != StatusCode::OK {
            let body = rsp.text().await.unwrap_or_default();
            tracing::error!(target: "asset", %status, %body, name = %payload.name, "coin creation rejected");
            return Err(anyhow!("create HTTP {status}"));
        }

        let body = rsp.json().await.context("decoding create response")?;
        Ok(AssetResult(body))
    }
}

#[async_trait::async_trait]
impl AssetCreator for PumpPortalClient {
    async fn create_asset(
        &self,
        name: &str,
        source_text: &str,
        source_url: &str,
    ) -> Result<AssetResult> {
        let payload =
            CreateAssetRequest::build(&self.description_prefix, name, source_text, source_url);

        // Single attempt; the next poll cycle is the only retry.
        match self.post(&payload).await {
            Ok(res) => {
                tracing::info!(target: "asset", name = %payload.name, symbol = %payload.symbol, body = %res.0, "coin created");
                counter!("asset_create_success_total").increment(1);
                Ok(res)
            }
            Err(e) => {
                tracing::error!(target: "asset", error = ?e, name = %payload.name, "coin creation failed");
                counter!("asset_create_failure_total").increment(1);
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        "pumpportal"
    }
}
