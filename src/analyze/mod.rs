// src/analyze/mod.rs
//! Analysis entry: score a post and, if it qualifies, propose a coin name.

pub mod naming;
pub mod scoring;

use serde::Serialize;

// Re-export convenient types.
pub use crate::analyze::naming::{generate_name, generate_name_at, symbol_for};
pub use crate::analyze::scoring::{score, ScoreResult, DECISION_THRESHOLD};

/// Score plus the name the watcher would use. Used by the dry-run tool.
#[derive(Debug, Serialize)]
pub struct Verdict {
    #[serde(flatten)]
    pub score: ScoreResult,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Run the full heuristic on one text without touching the network.
pub fn evaluate(text: &str) -> Verdict {
    let score = score(text);
    let name = score.decision.then(|| generate_name(text));
    let symbol = name.as_deref().map(symbol_for);
    Verdict {
        score,
        name,
        symbol,
    }
}
