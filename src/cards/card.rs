//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a tarot card: its arcana,
//! orientation meanings, and keyword lists. Cards never change after they
//! are registered in a catalog; a reading references them by [`CardId`]
//! and records orientation separately per draw.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Stable across sessions: the standard catalog assigns 0-21 to the major
/// arcana and 22-77 to the minors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four minor arcana suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Cups,
    Wands,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Wands, Suit::Swords, Suit::Pentacles];

    /// Display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Wands => "Wands",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card category: one of the 22 major arcana, or a minor of a given suit.
///
/// A minor card always carries its suit, so "suit present iff minor" holds
/// structurally rather than by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor(Suit),
}

impl Arcana {
    /// The suit, for minor cards.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Arcana::Major => None,
            Arcana::Minor(suit) => Some(suit),
        }
    }

    /// Is this a major arcana card?
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(self, Arcana::Major)
    }
}

/// Static card data.
///
/// Immutable once registered. The `image_ref` is an opaque handle for the
/// presentation layer; the engine never interprets it.
///
/// ## Example
///
/// ```
/// use tarot_engine::cards::{Arcana, Card, CardId};
///
/// let fool = Card::new(CardId::new(0), "The Fool", Arcana::Major)
///     .with_meanings("New beginnings await.", "Recklessness holds you back.")
///     .with_keywords(&["beginnings", "spontaneity"], &["recklessness", "naivety"]);
///
/// assert_eq!(fool.upright_keywords[0], "beginnings");
/// assert!(fool.arcana.is_major());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Card name (e.g. "The Fool", "Ace of Cups").
    pub name: String,

    /// Major, or minor with its suit.
    pub arcana: Arcana,

    /// Opaque imagery handle for the presentation layer.
    pub image_ref: String,

    /// Meaning text when drawn upright.
    pub upright_meaning: String,

    /// Meaning text when drawn reversed.
    pub reversed_meaning: String,

    /// Ordered keywords for the upright orientation.
    pub upright_keywords: Vec<String>,

    /// Ordered keywords for the reversed orientation.
    pub reversed_keywords: Vec<String>,
}

impl Card {
    /// Create a new card with empty meanings.
    ///
    /// The `image_ref` defaults to a slug of the name under `cards/`.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, arcana: Arcana) -> Self {
        let name = name.into();
        let image_ref = format!("cards/{}.png", slugify(&name));
        Self {
            id,
            name,
            arcana,
            image_ref,
            upright_meaning: String::new(),
            reversed_meaning: String::new(),
            upright_keywords: Vec::new(),
            reversed_keywords: Vec::new(),
        }
    }

    /// Set the imagery reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Set upright and reversed meaning text (builder pattern).
    #[must_use]
    pub fn with_meanings(
        mut self,
        upright: impl Into<String>,
        reversed: impl Into<String>,
    ) -> Self {
        self.upright_meaning = upright.into();
        self.reversed_meaning = reversed.into();
        self
    }

    /// Set upright and reversed keyword lists (builder pattern).
    #[must_use]
    pub fn with_keywords(mut self, upright: &[&str], reversed: &[&str]) -> Self {
        self.upright_keywords = upright.iter().map(|s| (*s).to_string()).collect();
        self.reversed_keywords = reversed.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Meaning text for the given orientation.
    #[must_use]
    pub fn meaning(&self, reversed: bool) -> &str {
        if reversed {
            &self.reversed_meaning
        } else {
            &self.upright_meaning
        }
    }

    /// Keywords for the given orientation.
    #[must_use]
    pub fn keywords(&self, reversed: bool) -> &[String] {
        if reversed {
            &self.reversed_keywords
        } else {
            &self.upright_keywords
        }
    }
}

fn slugify(name: &str) -> String {
    name.chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}
