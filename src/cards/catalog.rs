//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card the application knows about. It is
//! read-only once populated: sessions borrow cards by id, never mutate them.
//! Iteration order is registration order so deck building is reproducible.

use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};

use super::card::{Card, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use tarot_engine::cards::{Arcana, Card, CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     Card::new(CardId::new(0), "The Fool", Arcana::Major)
///         .with_meanings("New beginnings.", "Hesitation."),
/// );
///
/// let found = catalog.get(CardId::new(0)).unwrap();
/// assert_eq!(found.name, "The Fool");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists; catalogs are
    /// built once at startup and duplicate ids are a programming error.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.order.push(card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card by ID, or `CardNotFound`.
    pub fn require(&self, id: CardId) -> EngineResult<&Card> {
        self.cards.get(&id).ok_or(EngineError::CardNotFound(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card ids in registration order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Iterate over all cards in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().map(move |id| &self.cards[id])
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.all().filter(move |c| predicate(c))
    }
}
