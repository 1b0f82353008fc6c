//! Spread catalog for layout lookup.
//!
//! Lookup is by string id. The built-in set reproduces the layouts the
//! application ships with; games of the catalog pattern add entries
//! instead of code.

use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};

use super::spread::Spread;

/// Registry of spreads.
///
/// ## Example
///
/// ```
/// use tarot_engine::spreads::SpreadCatalog;
///
/// let catalog = SpreadCatalog::builtin();
/// let spread = catalog.get("celtic-cross").unwrap();
/// assert_eq!(spread.required_cards(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpreadCatalog {
    spreads: FxHashMap<String, Spread>,
}

impl SpreadCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in spreads.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Spread::new("one-card", "One Card", ["Message for you"]));
        catalog.register(Spread::new(
            "three-card",
            "Three Card",
            ["Past", "Present", "Future"],
        ));
        catalog.register(Spread::new(
            "celtic-cross",
            "Celtic Cross",
            [
                "Present",
                "Challenge",
                "Past",
                "Future",
                "Above",
                "Below",
                "Advice",
                "External Influence",
                "Hope/Fear",
                "Outcome",
            ],
        ));
        catalog
    }

    /// Register a spread.
    ///
    /// Panics if a spread with the same id already exists.
    pub fn register(&mut self, spread: Spread) {
        if self.spreads.contains_key(spread.id()) {
            panic!("Spread with id \"{}\" already registered", spread.id());
        }
        self.spreads.insert(spread.id().to_string(), spread);
    }

    /// Get a spread by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spread> {
        self.spreads.get(id)
    }

    /// Get a spread by id, or `SpreadNotFound`.
    pub fn require(&self, id: &str) -> EngineResult<&Spread> {
        self.spreads
            .get(id)
            .ok_or_else(|| EngineError::SpreadNotFound(id.to_string()))
    }

    /// Number of registered spreads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    /// Iterate over all spreads (unordered).
    pub fn all(&self) -> impl Iterator<Item = &Spread> {
        self.spreads.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_spreads() {
        let catalog = SpreadCatalog::builtin();
        assert_eq!(catalog.len(), 3);

        let one = catalog.get("one-card").unwrap();
        assert_eq!(one.required_cards(), 1);
        assert_eq!(one.position_label(0), Some("Message for you"));

        let three = catalog.get("three-card").unwrap();
        assert_eq!(three.positions(), &["Past", "Present", "Future"]);

        let celtic = catalog.get("celtic-cross").unwrap();
        assert_eq!(celtic.required_cards(), 10);
        assert_eq!(celtic.position_label(9), Some("Outcome"));
    }

    #[test]
    fn test_require_unknown_spread() {
        let catalog = SpreadCatalog::builtin();

        let err = catalog.require("ten-card").unwrap_err();
        assert_eq!(err, EngineError::SpreadNotFound("ten-card".to_string()));
    }

    #[test]
    fn test_register_custom_spread() {
        let mut catalog = SpreadCatalog::builtin();
        catalog.register(Spread::new(
            "horseshoe",
            "Horseshoe",
            ["Past", "Present", "Hidden", "Obstacle", "Environment", "Advice", "Outcome"],
        ));

        assert_eq!(catalog.require("horseshoe").unwrap().required_cards(), 7);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = SpreadCatalog::builtin();
        catalog.register(Spread::new("one-card", "Again", ["X"]));
    }
}
