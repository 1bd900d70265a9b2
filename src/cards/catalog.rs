//! Card catalog - the immutable set of loaded spawn cards.
//!
//! The `CardCatalog` indexes every loaded card by ID and keeps an
//! ID-sorted order for iteration. Deterministic iteration matters:
//! seeded draws must see the eligible cards in a stable order.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::card::{Card, CardId, Level};
use super::zombies::ZombieType;

/// Errors raised while building or loading the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} appears twice in the catalog")]
    DuplicateId(CardId),
    #[error("card {id} has level {level}, expected 1-4")]
    InvalidLevel { id: u32, level: u8 },
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable catalog of spawn cards.
///
/// An empty catalog is the "cards not loaded" state: draws against it
/// return nothing, which callers treat as normal.
///
/// ## Example
///
/// ```
/// use spawn_deck::cards::{Card, CardCatalog, CardId, Level};
///
/// let catalog = CardCatalog::from_cards([
///     Card::new(CardId::new(1), Level::Blue),
///     Card::new(CardId::new(2), Level::Red),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get(CardId::new(1)).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    /// Card IDs in ascending order, for deterministic iteration.
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded cards.
    ///
    /// Fails when two cards share an ID.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut map = FxHashMap::default();
        for card in cards {
            let id = card.id;
            if map.insert(id, card).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        let mut order: Vec<CardId> = map.keys().copied().collect();
        order.sort_unstable();
        Ok(Self { cards: map, order })
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().map(|id| &self.cards[id])
    }

    /// All cards of one level, in ID order.
    pub fn cards_at_level(&self, level: Level) -> impl Iterator<Item = &Card> {
        self.iter().filter(move |card| card.level == level)
    }

    /// Cards carrying any special marker.
    pub fn special_cards(&self) -> impl Iterator<Item = &Card> {
        self.iter().filter(|card| card.is_special())
    }

    /// Cards of one level that spawn at least one mob of `zombie`.
    pub fn cards_with_zombie_type(
        &self,
        level: Level,
        zombie: ZombieType,
    ) -> impl Iterator<Item = &Card> {
        self.cards_at_level(level)
            .filter(move |card| zombie.count_in(card) > 0)
    }
}
