pub mod cards;
pub mod error;
pub mod mana;
pub mod state;
pub mod turns;
pub mod zones;

pub use cards::{Action, ActionKind};
pub use error::GameError;
pub use mana::ManaPool;
pub use state::ZoneState;
pub use turns::{run_turn, TurnLog};
pub use zones::{Battlefield, CardPile, Graveyard, Hand, Library};
