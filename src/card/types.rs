use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared handle to an immutable card definition.
/// Every copy of a card in the deck points at the same definition.
pub type CardRef = Arc<CardDefinition>;

/// Card types used by the simulated deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Land,
    Artifact,
    Sorcery,
    Creature,
    Planeswalker,
}

/// What a card does when the turn engine plays it.
///
/// One variant per distinct behavior; variants carry only the data their
/// effect needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    /// One of the three lands that make up the combo
    ComboLand,
    /// Basic land that taps for green
    BasicLand,
    /// Colorless support land with no modeled ability
    UtilityLand,
    /// Artifact that can be sacrificed to search the library for a combo land
    TutorArtifact { activation_cost: u32 },
    /// Artifact that can be sacrificed for one green mana and a card
    ManaFilterArtifact { activation_cost: u32 },
    /// Artifact that can be exiled to draw a card
    GraveyardHateArtifact { activation_cost: u32 },
    /// Sorcery that searches the library for a combo land
    SearchCantrip,
    /// Sorcery that looks at the top `depth` cards and keeps one
    SelectionCantrip { depth: usize },
    /// Everything the engine never casts
    Inert,
}

impl CardKind {
    /// Generic mana needed to activate the card's sacrifice ability, if it has one
    pub fn activation_cost(&self) -> Option<u32> {
        match self {
            CardKind::TutorArtifact { activation_cost }
            | CardKind::ManaFilterArtifact { activation_cost }
            | CardKind::GraveyardHateArtifact { activation_cost } => Some(*activation_cost),
            _ => None,
        }
    }

    pub fn is_cantrip(&self) -> bool {
        matches!(self, CardKind::SearchCantrip | CardKind::SelectionCantrip { .. })
    }
}

/// Immutable card definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    pub card_type: CardType,
    /// Total mana needed to cast the card
    #[serde(default)]
    pub mana_value: u32,
    /// Portion of `mana_value` that must be paid with green mana
    #[serde(default)]
    pub green_cost: u32,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl CardDefinition {
    pub fn new(name: &str, card_type: CardType, mana_value: u32, green_cost: u32, kind: CardKind) -> Self {
        CardDefinition {
            name: name.to_string(),
            card_type,
            mana_value,
            green_cost,
            kind,
        }
    }

    pub fn land(name: &str, kind: CardKind) -> Self {
        Self::new(name, CardType::Land, 0, 0, kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_land(&self) -> bool {
        self.card_type == CardType::Land
    }

    pub fn is_combo_land(&self) -> bool {
        self.kind == CardKind::ComboLand
    }

    pub fn activation_cost(&self) -> Option<u32> {
        self.kind.activation_cost()
    }

    pub fn produces_green(&self) -> bool {
        self.kind == CardKind::BasicLand
    }

    /// Forest and the mana filters both give access to green mana
    pub fn is_green_source(&self) -> bool {
        matches!(self.kind, CardKind::BasicLand | CardKind::ManaFilterArtifact { .. })
    }

    /// Whether the engine ever casts this card from hand
    pub fn is_castable(&self) -> bool {
        !self.is_land() && self.kind != CardKind::Inert
    }
}

impl fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}
