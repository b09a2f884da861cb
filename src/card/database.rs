use crate::card::names::*;
use crate::card::types::{CardDefinition, CardKind, CardRef, CardType};
use crate::game::GameError;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Number of distinct lands that make up the combo
pub const COMBO_SIZE: usize = 3;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Duplicate card name: {0}")]
    DuplicateCard(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Immutable catalog of every card the deck can contain, keyed by name
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<CardRef>,
    by_name: HashMap<String, CardRef>,
}

impl CardCatalog {
    /// Build a catalog from definitions, keeping their order
    pub fn from_definitions(definitions: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.name.as_str()) {
                return Err(CatalogError::DuplicateCard(definition.name.clone()));
            }
        }

        let combo_count = definitions.iter().filter(|c| c.is_combo_land()).count();
        if combo_count != COMBO_SIZE {
            return Err(CatalogError::InvalidCatalog(format!(
                "expected {} combo lands, found {}",
                COMBO_SIZE, combo_count
            )));
        }

        Ok(Self::index(definitions))
    }

    fn index(definitions: Vec<CardDefinition>) -> Self {
        let cards: Vec<CardRef> = definitions.into_iter().map(Arc::new).collect();
        let by_name = cards.iter().map(|c| (c.name.clone(), c.clone())).collect();
        CardCatalog { cards, by_name }
    }

    /// Load cards from a JSON file
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<CardDefinition> = serde_json::from_str(content)?;
        Self::from_definitions(definitions)
    }

    /// The cards of the reference Tron list
    pub fn standard() -> Self {
        let definitions = vec![
            CardDefinition::land(URZAS_MINE, CardKind::ComboLand),
            CardDefinition::land(URZAS_TOWER, CardKind::ComboLand),
            CardDefinition::land(URZAS_POWER_PLANT, CardKind::ComboLand),
            CardDefinition::land(FOREST, CardKind::BasicLand),
            CardDefinition::land(GHOST_QUARTER, CardKind::UtilityLand),
            CardDefinition::land(SANCTUM_OF_UGIN, CardKind::UtilityLand),
            CardDefinition::new(
                EXPEDITION_MAP,
                CardType::Artifact,
                1,
                0,
                CardKind::TutorArtifact { activation_cost: 2 },
            ),
            CardDefinition::new(
                CHROMATIC_STAR,
                CardType::Artifact,
                1,
                0,
                CardKind::ManaFilterArtifact { activation_cost: 1 },
            ),
            CardDefinition::new(
                CHROMATIC_SPHERE,
                CardType::Artifact,
                1,
                0,
                CardKind::ManaFilterArtifact { activation_cost: 1 },
            ),
            CardDefinition::new(
                RELIC_OF_PROGENITUS,
                CardType::Artifact,
                1,
                0,
                CardKind::GraveyardHateArtifact { activation_cost: 1 },
            ),
            CardDefinition::new(SYLVAN_SCRYING, CardType::Sorcery, 2, 1, CardKind::SearchCantrip),
            CardDefinition::new(
                ANCIENT_STIRRINGS,
                CardType::Sorcery,
                1,
                1,
                CardKind::SelectionCantrip { depth: 5 },
            ),
            CardDefinition::new(KARN_LIBERATED, CardType::Planeswalker, 7, 0, CardKind::Inert),
            CardDefinition::new(UGIN, CardType::Planeswalker, 8, 0, CardKind::Inert),
            CardDefinition::new(ULAMOG, CardType::Creature, 10, 0, CardKind::Inert),
            CardDefinition::new(WURMCOIL_ENGINE, CardType::Creature, 6, 0, CardKind::Inert),
            CardDefinition::new(WALKING_BALLISTA, CardType::Creature, 0, 0, CardKind::Inert),
            CardDefinition::new(OBLIVION_STONE, CardType::Artifact, 3, 0, CardKind::Inert),
        ];

        Self::index(definitions)
    }

    /// Get a card by name
    pub fn get(&self, name: &str) -> Result<CardRef, GameError> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| GameError::UnknownCard(name.to_string()))
    }

    /// The combo lands, in catalog order
    pub fn combo_lands(&self) -> Vec<CardRef> {
        self.cards.iter().filter(|c| c.is_combo_land()).cloned().collect()
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
