use crate::card::names::*;
use crate::card::{CardKind, CardRef, CardType};
use crate::game::state::ZoneState;
use crate::game::GameError;
use crate::rng::GameRng;
use serde::Serialize;
use std::fmt;

/// The three things the turn engine can do with a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Activate the sacrifice ability of a permanent
    Activate,
    /// Cast a spell or artifact from hand
    Cast,
    /// Play a land from hand
    Play,
}

/// A single atomic state transition chosen by the decision engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub card: String,
}

impl Action {
    pub fn new(kind: ActionKind, card: &str) -> Self {
        Action {
            kind,
            card: card.to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ActionKind::Activate => write!(f, "Activate {}", self.card),
            ActionKind::Cast => write!(f, "Cast {}", self.card),
            ActionKind::Play => write!(f, "Play {}", self.card),
        }
    }
}

/// Order in which Ancient Stirrings picks a card when no combo land is revealed
pub const SELECTION_PRIORITY: &[&str] = &[
    EXPEDITION_MAP,
    CHROMATIC_STAR,
    CHROMATIC_SPHERE,
    FOREST,
    SANCTUM_OF_UGIN,
    GHOST_QUARTER,
];

/// Check whether an action is legal in the current state
pub fn is_legal(state: &ZoneState, action: &Action) -> bool {
    match action.kind {
        ActionKind::Play => {
            !state.land_drop_used
                && state
                    .hand
                    .find(&action.card)
                    .is_some_and(|card| card.is_land())
        }
        ActionKind::Cast => state.hand.find(&action.card).is_some_and(|card| {
            card.is_castable() && state.mana.can_pay(card.mana_value, card.green_cost)
        }),
        ActionKind::Activate => state
            .battlefield
            .find(&action.card)
            .and_then(|card| card.activation_cost())
            .is_some_and(|cost| state.mana.can_pay(cost, 0)),
    }
}

/// Apply an action. Illegal actions leave the state untouched and return false.
pub fn execute(state: &mut ZoneState, action: &Action, rng: &mut GameRng) -> Result<bool, GameError> {
    if !is_legal(state, action) {
        return Ok(false);
    }

    match action.kind {
        ActionKind::Play => play_land(state, &action.card),
        ActionKind::Cast => cast_spell(state, &action.card, rng)?,
        ActionKind::Activate => activate_ability(state, &action.card, rng)?,
    }

    Ok(true)
}

/// Move a land from hand to the battlefield and add its mana
fn play_land(state: &mut ZoneState, name: &str) {
    if let Some(land) = state.hand.remove_named(name) {
        state.mana.add(1, land.produces_green());
        state.battlefield.add_card(land);
        state.land_drop_used = true;
    }
}

/// Pay for a spell; artifacts stay on the battlefield, sorceries resolve
fn cast_spell(state: &mut ZoneState, name: &str, rng: &mut GameRng) -> Result<(), GameError> {
    let Some(card) = state.hand.remove_named(name) else {
        return Ok(());
    };
    state.mana.pay(card.mana_value, card.green_cost);

    match card.card_type {
        CardType::Sorcery => {
            resolve_sorcery(state, &card, rng)?;
            state.graveyard.add_card(card);
        }
        _ => state.battlefield.add_card(card),
    }

    Ok(())
}

fn resolve_sorcery(state: &mut ZoneState, card: &CardRef, rng: &mut GameRng) -> Result<(), GameError> {
    match card.kind {
        CardKind::SearchCantrip => search_for_combo_land(state, rng),
        CardKind::SelectionCantrip { depth } => select_from_top(state, depth),
        _ => {}
    }
    Ok(())
}

/// Pay the activation cost, sacrifice the permanent and apply its effect
fn activate_ability(state: &mut ZoneState, name: &str, rng: &mut GameRng) -> Result<(), GameError> {
    let Some(card) = state.battlefield.remove_named(name) else {
        return Ok(());
    };

    match card.kind {
        CardKind::TutorArtifact { activation_cost } => {
            state.mana.pay(activation_cost, 0);
            search_for_combo_land(state, rng);
        }
        CardKind::ManaFilterArtifact { activation_cost } => {
            state.mana.pay(activation_cost, 0);
            state.mana.add(1, true);
            state.draw_card()?;
        }
        CardKind::GraveyardHateArtifact { activation_cost } => {
            state.mana.pay(activation_cost, 0);
            state.draw_card()?;
        }
        _ => {}
    }

    state.graveyard.add_card(card);
    Ok(())
}

/// Tutor for the first combo land that is neither in play nor in hand,
/// then shuffle the library whether or not one was found
pub fn search_for_combo_land(state: &mut ZoneState, rng: &mut GameRng) {
    let wanted = state.unseen_combo_pieces().next().map(|c| c.name.clone());

    if let Some(name) = wanted {
        if let Some(card) = state.library.take_named(&name) {
            state.hand.add_card(card);
        }
    }

    state.library.shuffle(rng);
}

/// Look at the top `depth` cards and put one into hand; the rest go to
/// the bottom in the order they were revealed.
///
/// A combo land that is neither in play nor in hand always wins. The
/// fallback list is only consulted when no combo land was taken.
pub fn select_from_top(state: &mut ZoneState, depth: usize) {
    let mut revealed = state.library.take_top(depth);

    let combo_pick = revealed.iter().position(|card| {
        card.is_combo_land()
            && !state.hand.contains(card.name())
            && state.is_missing_combo_piece(card.name())
    });

    let pick = combo_pick.or_else(|| {
        SELECTION_PRIORITY
            .iter()
            .find_map(|name| revealed.iter().position(|card| card.name() == *name))
    });

    if let Some(index) = pick {
        state.hand.add_card(revealed.remove(index));
    }

    state.library.put_on_bottom(revealed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardCatalog;
    use crate::game::zones::Library;
    use crate::game::ManaPool;

    fn state_with(library: &[&str], hand: &[&str], battlefield: &[&str]) -> ZoneState {
        let catalog = CardCatalog::standard();
        let cards = library.iter().map(|n| catalog.get(n).unwrap()).collect();
        let mut state = ZoneState::new(Library::new(cards), catalog.combo_lands());
        for name in hand {
            state.hand.add_card(catalog.get(name).unwrap());
        }
        for name in battlefield {
            state.battlefield.add_card(catalog.get(name).unwrap());
        }
        state.reset_turn_state();
        state
    }

    fn library_names(state: &ZoneState) -> Vec<&str> {
        state.library.cards().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_play_land_uses_land_drop() {
        let mut state = state_with(&[], &[FOREST, URZAS_MINE], &[]);
        let mut rng = GameRng::new(Some(1));

        assert!(execute(&mut state, &Action::new(ActionKind::Play, FOREST), &mut rng).unwrap());
        assert_eq!(state.mana, ManaPool { generic: 1, green: 1 });
        assert!(state.land_drop_used);

        // Second land drop is not legal
        assert!(!execute(&mut state, &Action::new(ActionKind::Play, URZAS_MINE), &mut rng).unwrap());
        assert!(state.hand.contains(URZAS_MINE));
    }

    #[test]
    fn test_cast_artifact_goes_to_battlefield() {
        let mut state = state_with(&[], &[EXPEDITION_MAP], &[URZAS_MINE]);
        let mut rng = GameRng::new(Some(1));

        assert!(execute(&mut state, &Action::new(ActionKind::Cast, EXPEDITION_MAP), &mut rng).unwrap());
        assert!(state.battlefield.contains(EXPEDITION_MAP));
        assert!(state.hand.is_empty());
        assert_eq!(state.mana.generic, 0);
    }

    #[test]
    fn test_cast_requires_green() {
        let mut state = state_with(&[FOREST; 5], &[ANCIENT_STIRRINGS], &[URZAS_MINE]);
        let action = Action::new(ActionKind::Cast, ANCIENT_STIRRINGS);
        assert!(!is_legal(&state, &action));

        state.mana.add(1, true);
        assert!(is_legal(&state, &action));
    }

    #[test]
    fn test_inert_cards_are_never_cast() {
        let mut state = state_with(&[], &[WALKING_BALLISTA], &[URZAS_MINE]);
        let mut rng = GameRng::new(Some(1));
        assert!(!execute(&mut state, &Action::new(ActionKind::Cast, WALKING_BALLISTA), &mut rng).unwrap());
    }

    #[test]
    fn test_map_ability_fetches_missing_land() {
        let mut state = state_with(
            &[FOREST, URZAS_POWER_PLANT, KARN_LIBERATED],
            &[URZAS_TOWER],
            &[URZAS_MINE, FOREST, EXPEDITION_MAP],
        );
        let mut rng = GameRng::new(Some(3));

        assert!(execute(&mut state, &Action::new(ActionKind::Activate, EXPEDITION_MAP), &mut rng).unwrap());
        assert!(state.hand.contains(URZAS_POWER_PLANT));
        assert!(!state.battlefield.contains(EXPEDITION_MAP));
        assert!(state.graveyard.contains(EXPEDITION_MAP));
        assert_eq!(state.library.size(), 2);
        assert_eq!(state.mana.generic, 0);
    }

    #[test]
    fn test_tutor_with_nothing_missing_leaves_hand_alone() {
        let mut state = state_with(
            &[URZAS_MINE, URZAS_TOWER, FOREST],
            &[URZAS_POWER_PLANT, KARN_LIBERATED],
            &[URZAS_MINE, URZAS_TOWER],
        );
        let mut rng = GameRng::new(Some(9));
        search_for_combo_land(&mut state, &mut rng);
        assert_eq!(state.hand.size(), 2);
        assert_eq!(state.library.size(), 3);
    }

    #[test]
    fn test_filter_ability_draws_and_adds_green() {
        let mut state = state_with(&[KARN_LIBERATED], &[], &[URZAS_MINE, CHROMATIC_SPHERE]);
        let mut rng = GameRng::new(Some(1));

        assert!(execute(&mut state, &Action::new(ActionKind::Activate, CHROMATIC_SPHERE), &mut rng).unwrap());
        assert_eq!(state.mana, ManaPool { generic: 1, green: 1 });
        assert!(state.hand.contains(KARN_LIBERATED));
        assert!(state.graveyard.contains(CHROMATIC_SPHERE));
    }

    #[test]
    fn test_relic_ability_costs_one_and_draws() {
        let mut state = state_with(&[FOREST], &[], &[URZAS_MINE, RELIC_OF_PROGENITUS]);
        let mut rng = GameRng::new(Some(1));

        assert!(execute(&mut state, &Action::new(ActionKind::Activate, RELIC_OF_PROGENITUS), &mut rng).unwrap());
        assert_eq!(state.mana.generic, 0);
        assert!(state.hand.contains(FOREST));
    }

    #[test]
    fn test_filter_ability_on_empty_library_is_an_error() {
        let mut state = state_with(&[], &[], &[URZAS_MINE, CHROMATIC_STAR]);
        let mut rng = GameRng::new(Some(1));
        let result = execute(&mut state, &Action::new(ActionKind::Activate, CHROMATIC_STAR), &mut rng);
        assert_eq!(result.unwrap_err(), GameError::EmptyLibrary);
    }

    #[test]
    fn test_stirrings_takes_missing_combo_land() {
        let mut state = state_with(
            &[KARN_LIBERATED, EXPEDITION_MAP, URZAS_TOWER, FOREST, UGIN, ULAMOG],
            &[],
            &[URZAS_MINE],
        );
        select_from_top(&mut state, 5);
        assert!(state.hand.contains(URZAS_TOWER));
        assert_eq!(state.hand.size(), 1);
        assert_eq!(
            library_names(&state),
            vec![ULAMOG, KARN_LIBERATED, EXPEDITION_MAP, FOREST, UGIN]
        );
    }

    #[test]
    fn test_stirrings_skips_combo_land_already_in_play() {
        let mut state = state_with(
            &[URZAS_MINE, FOREST, CHROMATIC_SPHERE, KARN_LIBERATED, UGIN],
            &[],
            &[URZAS_MINE],
        );
        select_from_top(&mut state, 5);
        // Sphere outranks Forest in the fallback list
        assert!(state.hand.contains(CHROMATIC_SPHERE));
        assert_eq!(
            library_names(&state),
            vec![URZAS_MINE, FOREST, KARN_LIBERATED, UGIN]
        );
    }

    #[test]
    fn test_stirrings_fallback_priority() {
        let mut state = state_with(
            &[GHOST_QUARTER, FOREST, EXPEDITION_MAP, KARN_LIBERATED, UGIN, CHROMATIC_STAR],
            &[],
            &[],
        );
        select_from_top(&mut state, 5);
        assert!(state.hand.contains(EXPEDITION_MAP));
        assert_eq!(
            library_names(&state),
            vec![CHROMATIC_STAR, GHOST_QUARTER, FOREST, KARN_LIBERATED, UGIN]
        );
    }

    #[test]
    fn test_stirrings_with_nothing_useful() {
        let mut state = state_with(&[KARN_LIBERATED, UGIN, ULAMOG], &[], &[]);
        select_from_top(&mut state, 5);
        assert!(state.hand.is_empty());
        assert_eq!(library_names(&state), vec![KARN_LIBERATED, UGIN, ULAMOG]);
    }

    #[test]
    fn test_cast_stirrings_resolves_and_goes_to_graveyard() {
        let mut state = state_with(
            &[URZAS_TOWER, KARN_LIBERATED],
            &[ANCIENT_STIRRINGS],
            &[URZAS_MINE, FOREST],
        );
        let mut rng = GameRng::new(Some(1));

        assert!(execute(&mut state, &Action::new(ActionKind::Cast, ANCIENT_STIRRINGS), &mut rng).unwrap());
        assert!(state.hand.contains(URZAS_TOWER));
        assert!(state.graveyard.contains(ANCIENT_STIRRINGS));
        assert_eq!(state.mana, ManaPool { generic: 1, green: 0 });
    }
}
