use crate::card::CardRef;
use crate::game::mana::ManaPool;
use crate::game::zones::{Battlefield, Graveyard, Hand, Library};

/// Complete state of one trial
#[derive(Debug, Clone)]
pub struct ZoneState {
    // Zones
    pub library: Library,
    pub hand: Hand,
    pub battlefield: Battlefield,
    pub graveyard: Graveyard,

    // Turn info
    pub turn: u32,
    pub land_drop_used: bool,
    pub mana: ManaPool,

    /// The lands that have to be on the battlefield together
    pub combo: Vec<CardRef>,
}

impl ZoneState {
    /// Fresh state with everything in the library
    pub fn new(library: Library, combo: Vec<CardRef>) -> Self {
        ZoneState {
            library,
            hand: Hand::with_capacity(10),
            battlefield: Battlefield::with_capacity(10),
            graveyard: Graveyard::new(),
            turn: 0,
            land_drop_used: false,
            mana: ManaPool::new(),
            combo,
        }
    }

    /// Draw a card from the library to hand
    pub fn draw_card(&mut self) -> Result<CardRef, crate::game::GameError> {
        let card = self.library.draw()?;
        self.hand.add_card(card.clone());
        Ok(card)
    }

    /// Combo lands not on the battlefield yet, in catalog order
    pub fn missing_combo_pieces(&self) -> impl Iterator<Item = &CardRef> {
        self.combo
            .iter()
            .filter(move |c| !self.battlefield.contains(c.name()))
    }

    /// Combo lands that are neither on the battlefield nor in hand
    pub fn unseen_combo_pieces(&self) -> impl Iterator<Item = &CardRef> {
        self.missing_combo_pieces()
            .filter(move |c| !self.hand.contains(c.name()))
    }

    pub fn is_missing_combo_piece(&self, name: &str) -> bool {
        self.missing_combo_pieces().any(|c| c.name() == name)
    }

    /// Goal check: every combo land is on the battlefield. A deck without
    /// combo lands never gets there.
    pub fn combo_achieved(&self) -> bool {
        !self.combo.is_empty() && self.missing_combo_pieces().next().is_none()
    }

    pub fn lands_on_battlefield(&self) -> u32 {
        self.battlefield.cards().iter().filter(|c| c.is_land()).count() as u32
    }

    pub fn green_sources_on_battlefield(&self) -> u32 {
        self.battlefield
            .cards()
            .iter()
            .filter(|c| c.produces_green())
            .count() as u32
    }

    /// Untap: refill the mana pool from the lands in play and reset the land drop
    pub fn reset_turn_state(&mut self) {
        self.land_drop_used = false;
        self.mana = ManaPool::from_lands(
            self.lands_on_battlefield(),
            self.green_sources_on_battlefield(),
        );
    }

    /// Cards across all zones; constant for the life of a trial
    pub fn total_cards(&self) -> usize {
        self.library.size() + self.hand.size() + self.battlefield.size() + self.graveyard.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::names::*;
    use crate::card::CardCatalog;

    fn state_with(battlefield: &[&str], hand: &[&str]) -> ZoneState {
        let catalog = CardCatalog::standard();
        let mut state = ZoneState::new(Library::default(), catalog.combo_lands());
        for name in battlefield {
            state.battlefield.add_card(catalog.get(name).unwrap());
        }
        for name in hand {
            state.hand.add_card(catalog.get(name).unwrap());
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = state_with(&[], &[]);
        assert_eq!(state.turn, 0);
        assert!(!state.land_drop_used);
        assert_eq!(state.mana, ManaPool::new());
        assert_eq!(state.combo.len(), 3);
    }

    #[test]
    fn test_combo_achieved() {
        let state = state_with(&[URZAS_MINE, URZAS_TOWER], &[URZAS_POWER_PLANT]);
        assert!(!state.combo_achieved());

        let state = state_with(&[URZAS_MINE, URZAS_TOWER, FOREST, URZAS_POWER_PLANT], &[]);
        assert!(state.combo_achieved());
    }

    #[test]
    fn test_missing_and_unseen_pieces() {
        let state = state_with(&[URZAS_MINE], &[URZAS_TOWER]);
        let missing: Vec<_> = state.missing_combo_pieces().map(|c| c.name()).collect();
        let unseen: Vec<_> = state.unseen_combo_pieces().map(|c| c.name()).collect();
        assert_eq!(missing, vec![URZAS_TOWER, URZAS_POWER_PLANT]);
        assert_eq!(unseen, vec![URZAS_POWER_PLANT]);
        assert!(state.is_missing_combo_piece(URZAS_TOWER));
        assert!(!state.is_missing_combo_piece(URZAS_MINE));
    }

    #[test]
    fn test_reset_turn_state_counts_lands_only() {
        let mut state = state_with(&[URZAS_MINE, FOREST, CHROMATIC_STAR], &[]);
        state.land_drop_used = true;
        state.reset_turn_state();
        assert!(!state.land_drop_used);
        assert_eq!(state.mana, ManaPool { generic: 2, green: 1 });
    }

    #[test]
    fn test_draw_card() {
        let catalog = CardCatalog::standard();
        let library = Library::new(vec![catalog.get(FOREST).unwrap()]);
        let mut state = ZoneState::new(library, catalog.combo_lands());
        assert_eq!(state.draw_card().unwrap().name(), FOREST);
        assert_eq!(state.hand.size(), 1);
        assert!(state.draw_card().is_err());
    }
}
