pub mod decisions;
pub mod deck;
pub mod engine;
pub mod hand;
pub mod harness;
pub mod mulligan;

pub use decisions::DecisionEngine;
pub use deck::{build_deck, parse_deck_file, DeckError, DECK_SIZE};
pub use engine::{run_trial, TrialConfig, TrialResult, MAX_TURNS};
pub use hand::opening_hand_from_names;
pub use harness::{hand_size_table, keep_rate, run_batch, BatchSummary};
pub use mulligan::{opening_hand, resolve_mulligans, should_keep_hand, MulliganRule, OpeningHand};
