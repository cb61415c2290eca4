//! Dry run of the heuristic: one post per stdin line, one JSON verdict per stdout line.
//! No network, no coins.

use std::io::{self, BufRead, Write};

use post_coin_watcher::analyze::evaluate;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let verdict = evaluate(&line);
        tracing::info!(score = verdict.score.score, "scored");
        writeln!(out, "{}", serde_json::to_string(&verdict)?)?;
    }

    Ok(())
}
