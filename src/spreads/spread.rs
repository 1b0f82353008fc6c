//! Spread definitions - static layout data.
//!
//! A `Spread` is an ordered list of position labels. The required card
//! count is the number of labels, derived rather than stored, so the two
//! can never disagree.

use serde::{Deserialize, Serialize};

/// A named card layout.
///
/// ## Example
///
/// ```
/// use tarot_engine::spreads::Spread;
///
/// let spread = Spread::new("three-card", "Three Card", ["Past", "Present", "Future"]);
/// assert_eq!(spread.required_cards(), 3);
/// assert_eq!(spread.position_label(1), Some("Present"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    id: String,
    title: String,
    positions: Vec<String>,
}

impl Spread {
    /// Create a new spread.
    ///
    /// Panics if `positions` is empty; a layout with no positions is a
    /// programming error.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions: Vec<String> = positions.into_iter().map(Into::into).collect();
        assert!(!positions.is_empty(), "spread must have at least one position");
        Self {
            id: id.into(),
            title: title.into(),
            positions,
        }
    }

    /// Catalog identifier (e.g. "three-card").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title (e.g. "Three Card").
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of cards this spread requires.
    #[must_use]
    pub fn required_cards(&self) -> usize {
        self.positions.len()
    }

    /// Ordered position labels.
    #[must_use]
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Label for a position index, if within the spread.
    #[must_use]
    pub fn position_label(&self, index: usize) -> Option<&str> {
        self.positions.get(index).map(String::as_str)
    }
}
