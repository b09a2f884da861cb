use crate::card::CardRef;
use crate::game::state::ZoneState;
use crate::game::zones::Library;
use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::deck::combo_pieces;
use crate::simulation::mulligan::STARTING_HAND_SIZE;

/// Build a state from an explicit opening hand.
///
/// Each name takes one copy out of `deck`; whatever is left becomes the
/// shuffled library. A name with no copy left in the deck is an error.
pub fn opening_hand_from_names(
    deck: &[CardRef],
    names: &[&str],
    rng: &mut GameRng,
) -> Result<ZoneState, GameError> {
    if names.is_empty() || names.len() > STARTING_HAND_SIZE {
        return Err(GameError::InvalidHandSize(names.len()));
    }

    let mut remaining = deck.to_vec();
    let mut hand = Vec::with_capacity(names.len());

    for name in names {
        let idx = remaining
            .iter()
            .position(|c| c.name() == *name)
            .ok_or_else(|| GameError::UnknownCard(name.to_string()))?;
        hand.push(remaining.swap_remove(idx));
    }

    let mut library = Library::new(remaining);
    library.shuffle(rng);

    let mut state = ZoneState::new(library, combo_pieces(deck));
    for card in hand {
        state.hand.add_card(card);
    }
    Ok(state)
}
