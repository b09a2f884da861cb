use crate::card::names::*;
use crate::card::{CardCatalog, CardRef};
use crate::game::GameError;
use thiserror::Error;

/// Every deck is exactly this many cards
pub const DECK_SIZE: usize = 60;

/// Reference list: (card, copies)
pub const TRON_LIST: &[(&str, usize)] = &[
    (URZAS_MINE, 4),
    (URZAS_TOWER, 4),
    (URZAS_POWER_PLANT, 4),
    (KARN_LIBERATED, 4),
    (WURMCOIL_ENGINE, 4),
    (OBLIVION_STONE, 4),
    (EXPEDITION_MAP, 4),
    (ANCIENT_STIRRINGS, 4),
    (SYLVAN_SCRYING, 4),
    (CHROMATIC_STAR, 4),
    (CHROMATIC_SPHERE, 4),
    (RELIC_OF_PROGENITUS, 3),
    (ULAMOG, 2),
    (WALKING_BALLISTA, 2),
    (UGIN, 2),
    (SANCTUM_OF_UGIN, 1),
    (GHOST_QUARTER, 1),
    (FOREST, 5),
];

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid deck format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    #[error("{0}")]
    Game(#[from] GameError),
    #[error("Deck has {0} cards, expected 60")]
    WrongSize(usize),
}

/// Expand (card, count) pairs into a deck, resolving names in the catalog
pub fn expand_list(list: &[(&str, usize)], catalog: &CardCatalog) -> Result<Vec<CardRef>, DeckError> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for (name, count) in list {
        let card = catalog.get(name)?;
        deck.extend(std::iter::repeat(card).take(*count));
    }

    if deck.len() != DECK_SIZE {
        return Err(DeckError::WrongSize(deck.len()));
    }
    Ok(deck)
}

/// The fixed 60-card Tron list
pub fn build_deck(catalog: &CardCatalog) -> Result<Vec<CardRef>, DeckError> {
    expand_list(TRON_LIST, catalog)
}

/// Distinct combo lands in the order they first appear in the list
pub fn combo_pieces(deck: &[CardRef]) -> Vec<CardRef> {
    let mut pieces: Vec<CardRef> = Vec::new();
    for card in deck.iter().filter(|c| c.is_combo_land()) {
        if !pieces.iter().any(|p| p.name() == card.name()) {
            pieces.push(card.clone());
        }
    }
    pieces
}

/// Parse a deck file and return expanded list of cards
/// Format: "4 Card Name" per line, supports comments with # or //
pub fn parse_deck_file(path: &str, catalog: &CardCatalog) -> Result<Vec<CardRef>, DeckError> {
    let content = std::fs::read_to_string(path)?;
    parse_deck_list(&content, catalog)
}

pub fn parse_deck_list(content: &str, catalog: &CardCatalog) -> Result<Vec<CardRef>, DeckError> {
    let mut list = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let Some((count_str, card_name)) = trimmed.split_once(' ') else {
            return Err(DeckError::InvalidFormat {
                line: line_num + 1,
                reason: "Expected format: 'COUNT CARD_NAME'".to_string(),
            });
        };

        let count: usize = count_str.parse().map_err(|_| DeckError::InvalidFormat {
            line: line_num + 1,
            reason: format!("'{}' is not a valid number", count_str),
        })?;

        list.push((card_name.trim(), count));
    }

    expand_list(&list, catalog)
}
