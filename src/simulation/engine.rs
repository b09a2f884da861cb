use crate::card::CardRef;
use crate::game::state::ZoneState;
use crate::game::turns::{run_turn, TurnLog};
use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::mulligan::{opening_hand, resolve_mulligans, MulliganRule, OpeningHand, ScryDecision};
use serde::Serialize;

/// Trials that have not assembled the combo by this turn are capped
pub const MAX_TURNS: u32 = 20;

/// How a single trial is set up
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrialConfig {
    pub rule: MulliganRule,
    pub on_draw: bool,
    /// Fixed opening hand size; `None` runs the mulligan loop
    pub hand_size: Option<usize>,
    pub max_turns: u32,
}

impl Default for TrialConfig {
    fn default() -> Self {
        TrialConfig {
            rule: MulliganRule::Vancouver,
            on_draw: false,
            hand_size: None,
            max_turns: MAX_TURNS,
        }
    }
}

/// Result of a single trial
#[derive(Debug, Clone, Serialize)]
pub struct TrialResult {
    pub seed: u64,
    pub starting_hand: Vec<String>,
    pub effective_hand_size: usize,
    pub mulligans: usize,
    pub kept: bool,
    pub on_draw: bool,
    pub scry: Option<ScryDecision>,
    /// Turn on which the combo was assembled (None if the cap was hit)
    pub turns: Option<u32>,
    pub log: Vec<TurnLog>,
}

/// What happened after the opening hand was fixed
#[derive(Debug, Clone, Default)]
pub struct Playout {
    pub turns: Option<u32>,
    pub log: Vec<TurnLog>,
}

fn print_opening(opening: &OpeningHand, seed: u64, on_draw: bool) {
    println!("=== Trial Start (seed: {}) ===", seed);
    println!("{}", if on_draw { "On the draw" } else { "On the play" });
    println!(
        "Opening hand ({} cards, {} mulligans, {:?}):",
        opening.state.hand.size(),
        opening.mulligans,
        opening.rule
    );
    for card in opening.state.hand.cards() {
        println!("  - {}", card.name());
    }
    if let Some(scry) = &opening.scry {
        let placement = if scry.kept_on_top { "top" } else { "bottom" };
        println!("Scry: {} to the {}", scry.card, placement);
    }
}

fn print_turn(turn: &TurnLog, state: &ZoneState) {
    println!("\n--- Turn {} ---", turn.turn);
    if let Some(card) = &turn.drew {
        println!("Drew: {}", card);
    }
    for action in &turn.actions {
        println!("  {}", action);
    }
    println!(
        "  Battlefield: {}",
        state.battlefield.names().join(", ")
    );
}

/// Take turns until the combo is on the battlefield or `max_turns` is reached
pub fn play_out(
    state: &mut ZoneState,
    on_draw: bool,
    max_turns: u32,
    rng: &mut GameRng,
    verbose: bool,
) -> Result<Playout, GameError> {
    let mut playout = Playout::default();

    while state.turn < max_turns {
        let is_first_turn = state.turn == 0;
        let turn = run_turn(state, on_draw, is_first_turn, rng)?;

        if verbose {
            print_turn(&turn, state);
        }
        playout.log.push(turn);

        if state.combo_achieved() {
            playout.turns = Some(state.turn);
            break;
        }
    }

    if verbose {
        match playout.turns {
            Some(turn) => println!("\n*** Combo assembled on turn {} ***", turn),
            None => println!("\nNo combo by turn {}", max_turns),
        }
    }

    Ok(playout)
}

/// Run one trial: opening hand (fixed size or mulligans), then turns
pub fn run_trial(
    deck: &[CardRef],
    config: &TrialConfig,
    seed: u64,
    verbose: bool,
) -> Result<TrialResult, GameError> {
    let mut rng = GameRng::new(Some(seed));

    let mut opening = match config.hand_size {
        Some(size) => opening_hand(deck, size, config.rule, &mut rng)?,
        None => resolve_mulligans(deck, config.rule, &mut rng)?,
    };

    if verbose {
        print_opening(&opening, seed, config.on_draw);
    }

    let starting_hand = opening.state.hand.names();
    let playout = play_out(&mut opening.state, config.on_draw, config.max_turns, &mut rng, verbose)?;

    Ok(TrialResult {
        seed,
        starting_hand,
        effective_hand_size: opening.effective_size,
        mulligans: opening.mulligans,
        kept: opening.kept,
        on_draw: config.on_draw,
        scry: opening.scry,
        turns: playout.turns,
        log: playout.log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::names::*;
    use crate::card::CardCatalog;
    use crate::game::cards::{Action, ActionKind};
    use crate::simulation::deck::build_deck;
    use crate::simulation::hand::opening_hand_from_names;

    fn deck() -> Vec<CardRef> {
        build_deck(&CardCatalog::standard()).unwrap()
    }

    #[test]
    fn test_natural_tron_on_the_play_is_turn_three() {
        let deck = deck();
        for seed in 0..10 {
            let mut rng = GameRng::new(Some(seed));
            let mut state = opening_hand_from_names(
                &deck,
                &[URZAS_MINE, URZAS_TOWER, URZAS_POWER_PLANT, KARN_LIBERATED, KARN_LIBERATED, UGIN, ULAMOG],
                &mut rng,
            )
            .unwrap();

            let playout = play_out(&mut state, false, MAX_TURNS, &mut rng, false).unwrap();
            assert_eq!(playout.turns, Some(3));
            assert_eq!(playout.log.len(), 3);
            assert_eq!(playout.log[0].actions[0], Action::new(ActionKind::Play, URZAS_MINE));
            assert_eq!(playout.log[1].actions[0], Action::new(ActionKind::Play, URZAS_TOWER));
            assert_eq!(playout.log[2].actions[0], Action::new(ActionKind::Play, URZAS_POWER_PLANT));
        }
    }

    #[test]
    fn test_two_lands_and_map_by_turn_four() {
        let deck = deck();
        for seed in 0..25 {
            let mut rng = GameRng::new(Some(seed));
            let mut state = opening_hand_from_names(
                &deck,
                &[URZAS_MINE, URZAS_TOWER, EXPEDITION_MAP, KARN_LIBERATED, KARN_LIBERATED, UGIN, ULAMOG],
                &mut rng,
            )
            .unwrap();

            let playout = play_out(&mut state, false, MAX_TURNS, &mut rng, false).unwrap();
            let turns = playout.turns.expect("map finds the third land");
            assert!(turns <= 4, "seed {} took {} turns", seed, turns);
        }
    }

    #[test]
    fn test_turn_cap() {
        let karn = CardCatalog::standard().get(KARN_LIBERATED).unwrap();
        let deck = vec![karn; 60];
        let config = TrialConfig {
            max_turns: 5,
            ..TrialConfig::default()
        };

        let result = run_trial(&deck, &config, 1, false).unwrap();
        assert_eq!(result.turns, None);
        assert_eq!(result.log.len(), 5);
        assert!(!result.kept);
    }

    #[test]
    fn test_same_seed_same_trial() {
        let deck = deck();
        let config = TrialConfig::default();
        let first = run_trial(&deck, &config, 99, false).unwrap();
        let second = run_trial(&deck, &config, 99, false).unwrap();

        assert_eq!(first.starting_hand, second.starting_hand);
        assert_eq!(first.turns, second.turns);
        assert_eq!(first.scry, second.scry);
        let actions = |r: &TrialResult| r.log.iter().map(|t| t.actions.clone()).collect::<Vec<_>>();
        assert_eq!(actions(&first), actions(&second));
    }

    #[test]
    fn test_fixed_hand_size_skips_mulligans() {
        let deck = deck();
        let config = TrialConfig {
            rule: MulliganRule::Paris,
            hand_size: Some(5),
            ..TrialConfig::default()
        };
        let result = run_trial(&deck, &config, 4, false).unwrap();
        assert_eq!(result.starting_hand.len(), 5);
        assert_eq!(result.effective_hand_size, 5);
        assert!(result.scry.is_none());
    }

    #[test]
    fn test_on_the_draw_draws_turn_one() {
        let deck = deck();
        let config = TrialConfig {
            on_draw: true,
            ..TrialConfig::default()
        };
        let result = run_trial(&deck, &config, 8, false).unwrap();
        assert!(result.log[0].drew.is_some());

        let on_play = run_trial(&deck, &TrialConfig::default(), 8, false).unwrap();
        assert!(on_play.log[0].drew.is_none());
    }

    #[test]
    fn test_invalid_hand_size_aborts() {
        let deck = deck();
        let config = TrialConfig {
            hand_size: Some(9),
            ..TrialConfig::default()
        };
        assert_eq!(
            run_trial(&deck, &config, 1, false).unwrap_err(),
            GameError::InvalidHandSize(9)
        );
    }
}
