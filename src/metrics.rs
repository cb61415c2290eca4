use anyhow::{Context, Result};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use once_cell::sync::OnceCell;
use std::net::SocketAddr;

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_fetch_errors_total", "Feed fetch/parse errors.");
        describe_counter!("feed_items_total", "Items returned by the feed.");
        describe_counter!("watcher_cycles_total", "Completed polling cycles.");
        describe_counter!(
            "watcher_cycle_errors_total",
            "Cycles aborted by an unexpected error."
        );
        describe_counter!(
            "watcher_items_skipped_total",
            "Items skipped because they were already processed."
        );
        describe_counter!(
            "watcher_decisions_total",
            "Items whose score cleared the threshold."
        );
        describe_counter!("asset_create_success_total", "Coins created.");
        describe_counter!(
            "asset_create_failure_total",
            "Coin creation requests that failed."
        );
        describe_gauge!(
            "watcher_last_cycle_ts",
            "Unix ts when the watcher last finished a cycle."
        );
    });
}

/// Install the Prometheus recorder with its own HTTP listener.
/// Must run inside the tokio runtime.
pub fn install_exporter(listen: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(listen)
        .install()
        .context("prometheus: install exporter")?;
    ensure_metrics_described();
    tracing::info!(%listen, "metrics exporter listening");
    Ok(())
}
