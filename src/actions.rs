//! Input-driven state transitions (no rendering / IO).
//!
//! Every function mutates `GameState` in response to a player action and
//! returns whether anything changed. The evaluation itself stays in
//! `logic`; this layer only folds the returned outcome into the state.

use crate::logic;
use crate::state::{
    Allocation, GameState, Step, ALL_CLIENTS, SLIDER_STEP, STOCK_COUNT, TOTAL_ROUNDS,
};

/// Advance one step of the screen machine via the confirm key.
pub fn confirm(state: &mut GameState) -> bool {
    match state.step {
        Step::Intro => {
            state.step = Step::Scenario;
            true
        }
        Step::Scenario => {
            state.step = Step::AllocMix;
            true
        }
        Step::AllocMix => {
            state.draft.cursor = 0;
            state.step = Step::AllocStocks;
            true
        }
        Step::AllocStocks => evaluate_round(state),
        Step::Result => next_round(state),
        Step::Ending => false,
    }
}

/// Run the engine for the current round and fold the outcome in.
fn evaluate_round(state: &mut GameState) -> bool {
    let Some(scenario) = state.current_scenario() else {
        return false;
    };

    let weights = state.draft.weights.map(f64::from);
    // Draft sliders are clamped to 0..=100, so construction cannot fail;
    // if it ever does the round simply stays on the allocation screen.
    let Ok(alloc) = Allocation::new(f64::from(state.draft.stock_ratio), weights) else {
        return false;
    };

    let outcome = logic::evaluate(&alloc, scenario, state.assets);
    state.total_score += outcome.satisfaction;
    state.assets = outcome.assets_after;
    state.history.push(outcome);
    state.step = Step::Result;
    true
}

/// Leave the result screen: next round, or the ending after round 4.
/// The draft carries over between rounds (original behavior).
fn next_round(state: &mut GameState) -> bool {
    if state.round >= TOTAL_ROUNDS {
        state.step = Step::Ending;
    } else {
        state.round += 1;
        state.step = Step::Scenario;
    }
    true
}

/// Adjust the slider under the cursor by `delta` steps of `SLIDER_STEP`.
pub fn adjust(state: &mut GameState, delta: i32) -> bool {
    match state.step {
        Step::Intro => cycle_client(state, delta),
        Step::AllocMix => {
            let before = state.draft.stock_ratio;
            state.draft.stock_ratio = step_value(before, delta);
            state.draft.stock_ratio != before
        }
        Step::AllocStocks => {
            let i = state.draft.cursor;
            let before = state.draft.weights[i];
            state.draft.weights[i] = step_value(before, delta);
            state.draft.weights[i] != before
        }
        _ => false,
    }
}

fn step_value(value: u32, delta: i32) -> u32 {
    let next = value as i32 + delta * SLIDER_STEP as i32;
    next.clamp(0, 100) as u32
}

/// Move the stock-slider cursor up/down on the weights screen.
pub fn move_cursor(state: &mut GameState, delta: i32) -> bool {
    if state.step != Step::AllocStocks {
        return false;
    }
    let next = state.draft.cursor as i32 + delta;
    let next = next.rem_euclid(STOCK_COUNT as i32) as usize;
    let moved = next != state.draft.cursor;
    state.draft.cursor = next;
    moved
}

fn cycle_client(state: &mut GameState, delta: i32) -> bool {
    let current = ALL_CLIENTS
        .iter()
        .position(|&c| c == state.client)
        .unwrap_or(0);
    let next = (current as i32 + delta).rem_euclid(ALL_CLIENTS.len() as i32) as usize;
    state.client = ALL_CLIENTS[next];
    next != current
}

/// Pick a client persona directly by index (intro screen, keys 1-4).
pub fn select_client(state: &mut GameState, index: usize) -> bool {
    if state.step != Step::Intro {
        return false;
    }
    match ALL_CLIENTS.get(index) {
        Some(&client) => {
            state.client = client;
            true
        }
        None => false,
    }
}

/// Start over from the ending screen.
pub fn restart(state: &mut GameState) -> bool {
    if state.step != Step::Ending {
        return false;
    }
    let client = state.client;
    *state = GameState::new();
    state.client = client;
    true
}
