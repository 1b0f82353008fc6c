//! Crate-wide error taxonomy.
//!
//! User-input-class errors (`DuplicateSelection`, `SpreadFull`,
//! `IndexOutOfRange`, `InvalidDeckSize`, `InvalidTransition`) are rejected
//! synchronously and leave session state untouched. `InterpretationUnavailable`
//! is absorbed by the assembler's deterministic fallback and never fails a
//! session on its own. `SaveFailed` is reported to the caller without rolling
//! back the assembled interpretation.

use crate::cards::CardId;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the reading engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested card id is not in the catalog (or not on the table).
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The requested spread id is not in the catalog.
    #[error("spread not found: \"{0}\"")]
    SpreadNotFound(String),

    /// A deck subset was requested that the catalog cannot provide.
    #[error("invalid deck size: requested {requested}, {available} available")]
    InvalidDeckSize {
        /// The size the caller asked for.
        requested: usize,
        /// How many cards the catalog holds.
        available: usize,
    },

    /// A draw index outside the current deck.
    #[error("draw index {index} out of range for deck of {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Deck size at the time of the draw.
        len: usize,
    },

    /// The card has already been placed in this reading.
    #[error("card already selected: {0}")]
    DuplicateSelection(CardId),

    /// Every position of the spread is already filled.
    #[error("spread is full: all {capacity} positions are taken")]
    SpreadFull {
        /// The spread's required card count.
        capacity: usize,
    },

    /// The event is not legal in the session's current phase.
    #[error("event \"{event}\" is not valid while {phase}")]
    InvalidTransition {
        /// Name of the phase the session was in.
        phase: &'static str,
        /// Name of the rejected event.
        event: &'static str,
    },

    /// The external narrative collaborator failed or is absent.
    #[error("narrative generation unavailable: {0}")]
    InterpretationUnavailable(String),

    /// The repository rejected or failed the save.
    #[error("failed to save reading: {0}")]
    SaveFailed(String),
}
