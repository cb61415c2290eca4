//! Post coin watcher — binary entrypoint.
//! Loads config and secrets, then polls the feed until killed.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use post_coin_watcher::{build_watcher, config, metrics, Secrets};

/// Compact logs by default; `LOG_FORMAT=json` for structured output.
/// Filter via `RUST_LOG` (default: info).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_default()?;
    let secrets = Secrets::from_env()?;

    if let Some(addr) = cfg.metrics_listen {
        metrics::install_exporter(addr)?;
    }

    let watcher = build_watcher(&cfg, &secrets)?;
    watcher.run().await;
    Ok(())
}
