//! End-of-game performance report.
//!
//! Assembled from the round history and serialized to JSON; `main` logs
//! it to the browser console when the ending screen is reached.

use serde::Serialize;

use crate::logic::{average_score, final_comment};
use crate::state::{GameState, RoundOutcome, INITIAL_ASSETS, TOTAL_ROUNDS};

#[derive(Serialize)]
pub struct PerformanceReport {
    pub client: &'static str,
    pub initial_assets: u64,
    pub final_assets: u64,
    pub total_score: u32,
    pub average_score: u32,
    pub closing_comment: &'static str,
    pub rounds: Vec<RoundOutcome>,
}

pub fn build(state: &GameState) -> PerformanceReport {
    let average = average_score(state.total_score, TOTAL_ROUNDS);
    PerformanceReport {
        client: state.client.name(),
        initial_assets: INITIAL_ASSETS,
        final_assets: state.assets,
        total_score: state.total_score,
        average_score: average,
        closing_comment: final_comment(average),
        rounds: state.history.clone(),
    }
}

/// Report as a JSON string. Serialization of these plain types cannot
/// fail; an empty string is returned rather than panicking if it ever does.
pub fn to_json(state: &GameState) -> String {
    serde_json::to_string(&build(state)).unwrap_or_default()
}
