use crate::card::CardRef;
use crate::game::cards::{self, Action};
use crate::game::state::ZoneState;
use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::decisions::DecisionEngine;
use serde::Serialize;

/// Everything that happened during one turn
#[derive(Debug, Clone, Default, Serialize)]
pub struct TurnLog {
    /// 1-based number of the turn
    pub turn: u32,
    pub drew: Option<String>,
    pub actions: Vec<Action>,
}

/// Start a new turn: untap, reset the land drop, draw unless this is
/// the first turn on the play
pub fn start_turn(state: &mut ZoneState, on_draw: bool, is_first_turn: bool) -> Result<Option<CardRef>, GameError> {
    state.reset_turn_state();

    if is_first_turn && !on_draw {
        return Ok(None);
    }

    state.draw_card().map(Some)
}

/// Main phase: keep taking the highest-priority legal action until none is left
pub fn action_phase(state: &mut ZoneState, rng: &mut GameRng) -> Result<Vec<Action>, GameError> {
    let mut actions = Vec::new();

    while let Some(action) = DecisionEngine::choose_action(state) {
        // choose_action only returns legal actions, so this always applies
        if !cards::execute(state, &action, rng)? {
            break;
        }
        actions.push(action);
    }

    Ok(actions)
}

/// Play out one full turn and advance the turn counter
pub fn run_turn(
    state: &mut ZoneState,
    on_draw: bool,
    is_first_turn: bool,
    rng: &mut GameRng,
) -> Result<TurnLog, GameError> {
    let drew = start_turn(state, on_draw, is_first_turn)?;
    let actions = action_phase(state, rng)?;
    state.turn += 1;

    Ok(TurnLog {
        turn: state.turn,
        drew: drew.map(|c| c.name.clone()),
        actions,
    })
}
