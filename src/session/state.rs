//! Session phases and placed cards.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Lifecycle phase of a reading session.
///
/// `Idle` means no active session (the flow holds none); every other phase
/// lives on a session value. Terminal phases are `Complete` and `Aborted`;
/// both return to `Idle` via reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No active reading.
    Idle,
    /// Deck built and shuffled; waiting for the caller's settle signal.
    Shuffling,
    /// Table visible, nothing selected yet.
    Dealt,
    /// Accumulating selections.
    Selecting,
    /// Interpretation requested; the generation ties a pending request to
    /// this session state.
    Interpreting {
        /// Generation counter value of the outstanding request.
        generation: u64,
    },
    /// Interpretation attached.
    Complete,
    /// Interpretation delivery failed; retry or reset.
    Error,
    /// Cancelled mid-flow.
    Aborted,
}

impl Phase {
    /// Short lowercase name, used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Shuffling => "shuffling",
            Phase::Dealt => "dealt",
            Phase::Selecting => "selecting",
            Phase::Interpreting { .. } => "interpreting",
            Phase::Complete => "complete",
            Phase::Error => "error",
            Phase::Aborted => "aborted",
        }
    }

    /// Is the reading still underway (abortable)?
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(
            self,
            Phase::Shuffling | Phase::Dealt | Phase::Selecting | Phase::Interpreting { .. }
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawn card bound to a spread position.
///
/// `position` indexes the spread's labels and is unique within a reading;
/// `reversed` is decided once at draw time and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    /// The drawn card.
    pub card: CardId,
    /// Index into the spread's position labels.
    pub position: usize,
    /// Orientation decided at draw time.
    pub reversed: bool,
}
