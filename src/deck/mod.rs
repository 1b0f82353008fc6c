//! Deck management: ordered card sequences for one session.
//!
//! A [`Deck`] is an ordered, duplicate-free sequence of [`CardId`]s backed
//! by a persistent vector, so `shuffled` and `draw` return new decks
//! cheaply without touching the caller's copy. Decks are created at
//! session start, reordered by shuffle, shrunk by draw, and dropped when
//! the session ends.
//!
//! The orientation decision for a drawn card also lives here: it is the
//! engine's second randomness boundary besides the shuffle, and both flow
//! through the injectable [`ReadingRng`].

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::core::ReadingRng;
use crate::error::{EngineError, EngineResult};

/// Probability that a drawn card lands reversed.
pub const REVERSAL_PROBABILITY: f64 = 0.20;

/// Decide the orientation for one draw.
///
/// Returns `true` (reversed) with probability [`REVERSAL_PROBABILITY`],
/// independently per call. Decided exactly once per placed card and never
/// recomputed.
#[must_use]
pub fn decide_orientation(rng: &mut ReadingRng) -> bool {
    rng.gen_bool(REVERSAL_PROBABILITY)
}

/// An ordered, duplicate-free sequence of cards scoped to one session.
///
/// ## Example
///
/// ```
/// use tarot_engine::cards::standard_catalog;
/// use tarot_engine::core::ReadingRng;
/// use tarot_engine::deck::Deck;
///
/// let catalog = standard_catalog();
/// let mut rng = ReadingRng::new(42);
///
/// let deck = Deck::build(&catalog, Some(12), &mut rng).unwrap();
/// let table = deck.shuffled(&mut rng);
///
/// let (card, rest) = table.draw(0).unwrap();
/// assert_eq!(rest.len(), 11);
/// assert!(!rest.contains(card));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<CardId>,
}

impl Deck {
    /// Build a deck from the catalog.
    ///
    /// With `size: None` the deck holds the whole catalog in registration
    /// order. With `Some(n)` it holds a uniformly random n-subset drawn
    /// without replacement. Fails with `InvalidDeckSize` if `n` is zero or
    /// exceeds the catalog.
    pub fn build(
        catalog: &CardCatalog,
        size: Option<usize>,
        rng: &mut ReadingRng,
    ) -> EngineResult<Self> {
        let available = catalog.len();
        let cards = match size {
            None => catalog.ids().to_vec(),
            Some(n) => {
                if n == 0 || n > available {
                    return Err(EngineError::InvalidDeckSize {
                        requested: n,
                        available,
                    });
                }
                rng.sample(catalog.ids(), n)
            }
        };
        Ok(Self {
            cards: cards.into_iter().collect(),
        })
    }

    /// Build a deck directly from a card list.
    ///
    /// Panics on duplicate ids; deck construction from arbitrary lists is
    /// an internal path and duplicates are a programming error.
    #[must_use]
    pub fn from_cards(cards: Vec<CardId>) -> Self {
        let mut seen = cards.clone();
        seen.sort_by_key(|c| c.raw());
        seen.dedup();
        assert_eq!(seen.len(), cards.len(), "deck contains duplicate card ids");
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Produce a uniformly random permutation of this deck.
    ///
    /// Pure: the caller's deck is untouched.
    #[must_use]
    pub fn shuffled(&self, rng: &mut ReadingRng) -> Self {
        let mut cards: Vec<CardId> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the card at `index`.
    ///
    /// Pure: returns the drawn card and the deck without it. Fails with
    /// `IndexOutOfRange` for an invalid index.
    pub fn draw(&self, index: usize) -> EngineResult<(CardId, Self)> {
        if index >= self.cards.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        let mut cards = self.cards.clone();
        let card = cards.remove(index);
        Ok((card, Self { cards }))
    }

    /// Position of a card in the deck, if present.
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Is the card in this deck?
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position_of(card).is_some()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}
