//! Session events.
//!
//! Events are plain data handed to `ReadingSession::apply`. Session
//! creation (start) and teardown (reset) are flow-level operations, not
//! events: they make and drop the session value itself.

use crate::cards::CardId;
use crate::error::EngineResult;
use crate::interpret::Interpretation;

/// An event driving a session transition.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// The caller's shuffle-settled signal (e.g. after an animation).
    DeckSettled,
    /// Select a card from the table.
    Select {
        /// The chosen card.
        card: CardId,
    },
    /// An interpretation request resolved.
    InterpretationReady {
        /// Generation the request was issued under.
        generation: u64,
        /// The assembled interpretation, or the failure to record.
        outcome: EngineResult<Interpretation>,
    },
    /// Re-request interpretation after a failure.
    Retry,
    /// Cancel the reading mid-flow.
    Abort,
}

impl SessionEvent {
    /// Short lowercase name, used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SessionEvent::DeckSettled => "deck_settled",
            SessionEvent::Select { .. } => "select",
            SessionEvent::InterpretationReady { .. } => "interpretation_ready",
            SessionEvent::Retry => "retry",
            SessionEvent::Abort => "abort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(SessionEvent::DeckSettled.name(), "deck_settled");
        assert_eq!(
            SessionEvent::Select {
                card: CardId::new(1)
            }
            .name(),
            "select"
        );
        assert_eq!(SessionEvent::Retry.name(), "retry");
    }
}
