use thiserror::Error;

/// Conditions that end a single trial.
///
/// None of these are retried inside the engine; the harness drops the
/// trial and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Library is empty")]
    EmptyLibrary,
    #[error("Invalid opening hand size {0} (expected 1 to 7)")]
    InvalidHandSize(usize),
    #[error("Unknown card: {0}")]
    UnknownCard(String),
}
