use crate::card::{CardKind, CardRef};
use crate::game::state::ZoneState;
use crate::game::zones::{Hand, Library};
use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::deck::combo_pieces;
use serde::Serialize;
use std::collections::HashSet;

pub const STARTING_HAND_SIZE: usize = 7;
/// Mulligans allowed before the hand is kept no matter what (7 down to 3)
pub const MAX_MULLIGANS: usize = 4;

/// How a smaller opening hand is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MulliganRule {
    /// Draw the smaller hand, then scry 1 if it has fewer than 7 cards
    Vancouver,
    /// Draw the smaller hand, no scry
    Paris,
    /// Always draw 7; only the effective size used to judge the hand shrinks
    London,
}

impl MulliganRule {
    /// Cards physically drawn for a hand judged at `effective_size`
    pub fn physical_hand_size(&self, effective_size: usize) -> usize {
        match self {
            MulliganRule::London => STARTING_HAND_SIZE,
            MulliganRule::Vancouver | MulliganRule::Paris => effective_size,
        }
    }

    pub fn scries(&self, effective_size: usize) -> bool {
        *self == MulliganRule::Vancouver && effective_size < STARTING_HAND_SIZE
    }
}

/// Result of looking at the top card after a mulligan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScryDecision {
    pub card: String,
    pub kept_on_top: bool,
}

/// An opening hand ready to be played
#[derive(Debug, Clone)]
pub struct OpeningHand {
    pub state: ZoneState,
    pub rule: MulliganRule,
    pub effective_size: usize,
    pub mulligans: usize,
    /// False when the mulligan cap forced a hand the policy would not keep
    pub kept: bool,
    pub scry: Option<ScryDecision>,
}

fn count_lands(hand: &Hand) -> usize {
    hand.cards().iter().filter(|c| c.is_land()).count()
}

fn distinct_combo_lands(hand: &Hand) -> usize {
    hand.cards()
        .iter()
        .filter(|c| c.is_combo_land())
        .map(|c| c.name())
        .collect::<HashSet<_>>()
        .len()
}

fn has_kind(hand: &Hand, predicate: impl Fn(&CardKind) -> bool) -> bool {
    hand.cards().iter().any(|c| predicate(&c.kind))
}

fn has_green_source(hand: &Hand) -> bool {
    hand.cards().iter().any(|c| c.is_green_source())
}

/// Decide whether to keep an opening hand.
///
/// Only hands that assemble the combo by turn 3 without help are kept:
/// all three lands, or two lands plus Expedition Map, or two lands plus
/// Sylvan Scrying and a mana filter when the hand is bigger than 3.
pub fn should_keep_hand(hand: &Hand, effective_size: usize) -> bool {
    match distinct_combo_lands(hand) {
        3 => true,
        2 => {
            let has_tutor = has_kind(hand, |k| matches!(k, CardKind::TutorArtifact { .. }));
            let has_search = has_kind(hand, |k| *k == CardKind::SearchCantrip);
            let has_filter = has_kind(hand, |k| matches!(k, CardKind::ManaFilterArtifact { .. }));

            has_tutor || (has_search && has_filter && effective_size > 3)
        }
        _ => false,
    }
}

/// Keep `top` on top of the library after a mulligan?
pub fn scry_keeps_on_top(hand: &Hand, top: &CardRef) -> bool {
    if top.is_combo_land() && !hand.contains(top.name()) {
        return true;
    }

    // A one-lander bottoms anything that is not a combo land
    if count_lands(hand) < 2 {
        return false;
    }

    match top.kind {
        CardKind::TutorArtifact { .. } => true,
        CardKind::SearchCantrip | CardKind::SelectionCantrip { .. } => has_green_source(hand),
        CardKind::ManaFilterArtifact { .. } => {
            has_kind(hand, CardKind::is_cantrip) && !has_green_source(hand)
        }
        _ => false,
    }
}

/// Look at the top card once and bottom it if the decision table says so
pub fn vancouver_scry(state: &mut ZoneState) -> Result<ScryDecision, GameError> {
    let top = state.library.peek_top().cloned().ok_or(GameError::EmptyLibrary)?;
    let kept_on_top = scry_keeps_on_top(&state.hand, &top);

    if !kept_on_top {
        state.library.scry_bottom()?;
    }

    Ok(ScryDecision {
        card: top.name.clone(),
        kept_on_top,
    })
}

/// Shuffle a fresh library and draw the physical hand for `effective_size`
fn draw_opener(
    deck: &[CardRef],
    effective_size: usize,
    rule: MulliganRule,
    rng: &mut GameRng,
) -> Result<ZoneState, GameError> {
    let mut library = Library::new(deck.to_vec());
    library.shuffle(rng);

    let mut state = ZoneState::new(library, combo_pieces(deck));
    for _ in 0..rule.physical_hand_size(effective_size) {
        state.draw_card()?;
    }

    Ok(state)
}

/// Draw an opening hand of `hand_size` under `rule`, without judging it
pub fn opening_hand(
    deck: &[CardRef],
    hand_size: usize,
    rule: MulliganRule,
    rng: &mut GameRng,
) -> Result<OpeningHand, GameError> {
    if hand_size == 0 || hand_size > STARTING_HAND_SIZE {
        return Err(GameError::InvalidHandSize(hand_size));
    }

    let mut state = draw_opener(deck, hand_size, rule, rng)?;
    let scry = if rule.scries(hand_size) {
        Some(vancouver_scry(&mut state)?)
    } else {
        None
    };

    Ok(OpeningHand {
        kept: should_keep_hand(&state.hand, hand_size),
        state,
        rule,
        effective_size: hand_size,
        mulligans: STARTING_HAND_SIZE - hand_size,
        scry,
    })
}

/// Mulligan until the hand is worth keeping or the cap is reached.
/// The Vancouver scry happens once, on the hand that is finally kept.
pub fn resolve_mulligans(
    deck: &[CardRef],
    rule: MulliganRule,
    rng: &mut GameRng,
) -> Result<OpeningHand, GameError> {
    let mut mulligans = 0;

    loop {
        let effective_size = STARTING_HAND_SIZE - mulligans;
        let mut state = draw_opener(deck, effective_size, rule, rng)?;
        let kept = should_keep_hand(&state.hand, effective_size);

        if kept || mulligans == MAX_MULLIGANS {
            let scry = if rule.scries(effective_size) {
                Some(vancouver_scry(&mut state)?)
            } else {
                None
            };

            return Ok(OpeningHand {
                state,
                rule,
                effective_size,
                mulligans,
                kept,
                scry,
            });
        }

        mulligans += 1;
    }
}
