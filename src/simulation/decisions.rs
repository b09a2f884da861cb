use crate::card::names::*;
use crate::game::cards::{self, Action, ActionKind};
use crate::game::state::ZoneState;

/// Fixed priority order for everything except combo lands.
/// Card selection comes first, land drops last; earlier entries win ties.
pub const PRIORITY: &[(&str, ActionKind)] = &[
    (EXPEDITION_MAP, ActionKind::Activate),
    (SYLVAN_SCRYING, ActionKind::Cast),
    (EXPEDITION_MAP, ActionKind::Cast),
    (ANCIENT_STIRRINGS, ActionKind::Cast),
    (CHROMATIC_STAR, ActionKind::Activate),
    (CHROMATIC_SPHERE, ActionKind::Activate),
    (CHROMATIC_STAR, ActionKind::Cast),
    (CHROMATIC_SPHERE, ActionKind::Cast),
    (RELIC_OF_PROGENITUS, ActionKind::Activate),
    (RELIC_OF_PROGENITUS, ActionKind::Cast),
    (FOREST, ActionKind::Play),
    (GHOST_QUARTER, ActionKind::Play),
    (SANCTUM_OF_UGIN, ActionKind::Play),
];

/// Greedy turn policy for the Tron deck
pub struct DecisionEngine;

impl DecisionEngine {
    /// Pick the next action, or None when nothing is legal.
    ///
    /// A missing combo land in hand is always played first while the land
    /// drop is available; otherwise the first legal entry of [`PRIORITY`]
    /// wins. Pure function of the state.
    pub fn choose_action(state: &ZoneState) -> Option<Action> {
        if let Some(action) = Self::choose_combo_land(state) {
            return Some(action);
        }

        PRIORITY
            .iter()
            .map(|(name, kind)| Action::new(*kind, name))
            .find(|action| cards::is_legal(state, action))
    }

    /// Combo land to play this turn, in catalog order
    pub fn choose_combo_land(state: &ZoneState) -> Option<Action> {
        if state.land_drop_used {
            return None;
        }

        state
            .missing_combo_pieces()
            .find(|land| state.hand.contains(land.name()))
            .map(|land| Action::new(ActionKind::Play, land.name()))
    }

    /// Every legal action in priority order, for tracing and tests
    pub fn legal_actions(state: &ZoneState) -> Vec<Action> {
        Self::choose_combo_land(state)
            .into_iter()
            .chain(
                PRIORITY
                    .iter()
                    .map(|(name, kind)| Action::new(*kind, name))
                    .filter(|action| cards::is_legal(state, action)),
            )
            .collect()
    }
}
