use crate::card::CardRef;
use crate::game::GameError;
use crate::rng::GameRng;

/// Library (deck) - ordered stack of cards, index 0 is the top
#[derive(Debug, Clone, Default)]
pub struct Library {
    cards: Vec<CardRef>,
}

impl Library {
    pub fn new(cards: Vec<CardRef>) -> Self {
        Library { cards }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Peek at the top card without removing it
    pub fn peek_top(&self) -> Option<&CardRef> {
        self.cards.first()
    }

    pub fn draw(&mut self) -> Result<CardRef, GameError> {
        if self.cards.is_empty() {
            Err(GameError::EmptyLibrary)
        } else {
            Ok(self.cards.remove(0))
        }
    }

    /// Move the top card to the bottom
    pub fn scry_bottom(&mut self) -> Result<(), GameError> {
        let top = self.draw()?;
        self.cards.push(top);
        Ok(())
    }

    /// Remove up to `count` cards from the top, keeping their order
    pub fn take_top(&mut self, count: usize) -> Vec<CardRef> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn put_on_bottom(&mut self, cards: Vec<CardRef>) {
        self.cards.extend(cards);
    }

    /// Remove one copy of the named card from anywhere in the library.
    /// Copies are interchangeable, so which one is taken does not matter.
    pub fn take_named(&mut self, name: &str) -> Option<CardRef> {
        let index = self.cards.iter().position(|c| c.name() == name)?;
        Some(self.cards.remove(index))
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }
}

/// Unordered multiset of cards, shared by the hand, battlefield and graveyard
#[derive(Debug, Clone, Default)]
pub struct CardPile {
    cards: Vec<CardRef>,
}

impl CardPile {
    pub fn new() -> Self {
        CardPile { cards: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        CardPile {
            cards: Vec::with_capacity(cap),
        }
    }

    pub fn add_card(&mut self, card: CardRef) {
        self.cards.push(card);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name() == name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name() == name).count()
    }

    pub fn find(&self, name: &str) -> Option<&CardRef> {
        self.cards.iter().find(|c| c.name() == name)
    }

    /// Remove one card with the given name
    pub fn remove_named(&mut self, name: &str) -> Option<CardRef> {
        self.remove_where(|c| c.name() == name)
    }

    /// Remove one card matching the predicate; same-named cards are
    /// interchangeable so the order of the pile is irrelevant
    pub fn remove_where(&mut self, predicate: impl Fn(&CardRef) -> bool) -> Option<CardRef> {
        let index = self.cards.iter().position(predicate)?;
        Some(self.cards.swap_remove(index))
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }
}

impl FromIterator<CardRef> for CardPile {
    fn from_iter<I: IntoIterator<Item = CardRef>>(iter: I) -> Self {
        CardPile {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Hand - cards in hand
pub type Hand = CardPile;
/// Battlefield - lands and artifacts in play
pub type Battlefield = CardPile;
/// Graveyard - resolved sorceries and sacrificed permanents
pub type Graveyard = CardPile;
