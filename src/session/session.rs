//! The reading session value and its transitions.
//!
//! A `ReadingSession` owns everything one reading needs, including its
//! forked RNG, so `apply` is a deterministic function of the session value
//! and the event. `apply` never mutates: it returns a successor session
//! (cheap, the deck is persistent), or an error that leaves the caller's
//! session exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::cards::CardId;
use crate::core::ReadingRng;
use crate::deck::{decide_orientation, Deck};
use crate::error::{EngineError, EngineResult};
use crate::interpret::Interpretation;
use crate::repository::ReadingDraft;
use crate::spreads::Spread;

use super::event::SessionEvent;
use super::state::{Phase, PlacedCard};

/// Unique identifier for a reading session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// A pending interpretation request.
///
/// Issued when a session enters `Interpreting`; carries everything the
/// assembler needs plus the session id and generation that tie the
/// eventual result back to the exact state that asked for it.
#[derive(Clone, Debug)]
pub struct InterpretationRequest {
    /// The session that asked.
    pub session: SessionId,
    /// Generation the request was issued under.
    pub generation: u64,
    /// The active spread.
    pub spread: Spread,
    /// The full placement, in position order.
    pub placed: Vec<PlacedCard>,
    /// The user's question, if any.
    pub question: Option<String>,
}

/// Result of a successful transition: the successor session, plus an
/// interpretation request when the transition entered `Interpreting`.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The successor session.
    pub session: ReadingSession,
    /// Present when the transition issued an interpretation request.
    pub request: Option<InterpretationRequest>,
}

/// One reading from shuffle to interpretation.
///
/// Exclusively owned by one flow at a time. Constructed by
/// [`ReadingFlow`](super::flow::ReadingFlow) via `start_reading`; direct
/// construction is available for tests and alternative orchestrators.
#[derive(Clone, Debug)]
pub struct ReadingSession {
    id: SessionId,
    spread: Spread,
    question: Option<String>,
    table: Deck,
    placed: SmallVec<[PlacedCard; 10]>,
    phase: Phase,
    interpretation: Option<Interpretation>,
    error: Option<EngineError>,
    rng: ReadingRng,
    generation: u64,
    created_at: DateTime<Utc>,
}

impl ReadingSession {
    /// Start a session over an already built and shuffled table.
    ///
    /// The session begins in `Shuffling`, waiting for the caller's settle
    /// signal.
    #[must_use]
    pub fn start(spread: Spread, question: Option<String>, table: Deck, rng: ReadingRng) -> Self {
        Self {
            id: SessionId::generate(),
            spread,
            question,
            table,
            placed: SmallVec::new(),
            phase: Phase::Shuffling,
            interpretation: None,
            error: None,
            rng,
            generation: 0,
            created_at: Utc::now(),
        }
    }

    /// Apply an event, yielding the successor session.
    ///
    /// Pure with respect to `self`: on `Err` the caller's session is
    /// unchanged and remains valid. A stale `InterpretationReady` (wrong
    /// generation, or the session is no longer interpreting) is discarded:
    /// the successor equals the current session.
    pub fn apply(&self, event: SessionEvent) -> EngineResult<Transition> {
        match event {
            SessionEvent::DeckSettled => match self.phase {
                Phase::Shuffling => {
                    let mut next = self.clone();
                    next.phase = Phase::Dealt;
                    Ok(Transition {
                        session: next,
                        request: None,
                    })
                }
                _ => Err(self.invalid(&event)),
            },
            SessionEvent::Select { card } => match self.phase {
                Phase::Dealt | Phase::Selecting => self.select(card),
                // The placement is already at capacity in these phases
                Phase::Interpreting { .. } | Phase::Complete => Err(EngineError::SpreadFull {
                    capacity: self.spread.required_cards(),
                }),
                _ => Err(self.invalid(&SessionEvent::Select { card })),
            },
            SessionEvent::InterpretationReady {
                generation,
                outcome,
            } => Ok(self.deliver(generation, outcome)),
            SessionEvent::Retry => match self.phase {
                Phase::Error => {
                    let mut next = self.clone();
                    next.error = None;
                    let request = next.enter_interpreting();
                    Ok(Transition {
                        session: next,
                        request: Some(request),
                    })
                }
                _ => Err(self.invalid(&event)),
            },
            SessionEvent::Abort => {
                if self.phase.is_in_flight() {
                    let mut next = self.clone();
                    next.phase = Phase::Aborted;
                    Ok(Transition {
                        session: next,
                        request: None,
                    })
                } else {
                    Err(self.invalid(&event))
                }
            }
        }
    }

    fn select(&self, card: CardId) -> EngineResult<Transition> {
        let capacity = self.spread.required_cards();
        if self.placed.len() >= capacity {
            return Err(EngineError::SpreadFull { capacity });
        }
        if self.placed.iter().any(|p| p.card == card) {
            return Err(EngineError::DuplicateSelection(card));
        }
        let index = self
            .table
            .position_of(card)
            .ok_or(EngineError::CardNotFound(card))?;

        let mut next = self.clone();
        let (drawn, rest) = next.table.draw(index)?;
        next.table = rest;

        let position = next.placed.len();
        let reversed = decide_orientation(&mut next.rng);
        next.placed.push(PlacedCard {
            card: drawn,
            position,
            reversed,
        });

        let request = if next.placed.len() == capacity {
            Some(next.enter_interpreting())
        } else {
            next.phase = Phase::Selecting;
            None
        };

        Ok(Transition {
            session: next,
            request,
        })
    }

    fn deliver(&self, generation: u64, outcome: EngineResult<Interpretation>) -> Transition {
        match self.phase {
            Phase::Interpreting {
                generation: current,
            } if current == generation => {
                let mut next = self.clone();
                match outcome {
                    Ok(interpretation) => {
                        next.interpretation = Some(interpretation);
                        next.phase = Phase::Complete;
                    }
                    Err(err) => {
                        next.error = Some(err);
                        next.phase = Phase::Error;
                    }
                }
                Transition {
                    session: next,
                    request: None,
                }
            }
            _ => {
                log::debug!(
                    "{}: discarding stale interpretation (generation {})",
                    self.id,
                    generation
                );
                Transition {
                    session: self.clone(),
                    request: None,
                }
            }
        }
    }

    fn enter_interpreting(&mut self) -> InterpretationRequest {
        self.generation += 1;
        self.phase = Phase::Interpreting {
            generation: self.generation,
        };
        InterpretationRequest {
            session: self.id,
            generation: self.generation,
            spread: self.spread.clone(),
            placed: self.placed.to_vec(),
            question: self.question.clone(),
        }
    }

    fn invalid(&self, event: &SessionEvent) -> EngineError {
        EngineError::InvalidTransition {
            phase: self.phase.name(),
            event: event.name(),
        }
    }

    /// Snapshot a completed reading for persistence.
    ///
    /// Only legal in `Complete`; anything else is an `InvalidTransition`.
    pub fn to_draft(&self, user_id: &str) -> EngineResult<ReadingDraft> {
        match (&self.phase, &self.interpretation) {
            (Phase::Complete, Some(interpretation)) => Ok(ReadingDraft {
                user_id: user_id.to_string(),
                spread_id: self.spread.id().to_string(),
                question: self.question.clone(),
                placed: self.placed.to_vec(),
                interpretation: interpretation.clone(),
            }),
            _ => Err(EngineError::InvalidTransition {
                phase: self.phase.name(),
                event: "save",
            }),
        }
    }

    /// Session id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The active spread.
    #[must_use]
    pub fn spread(&self) -> &Spread {
        &self.spread
    }

    /// The user's question, if any.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Cards still on the table, in table order.
    #[must_use]
    pub fn table(&self) -> &Deck {
        &self.table
    }

    /// Placed cards so far, in position order.
    #[must_use]
    pub fn placed(&self) -> &[PlacedCard] {
        &self.placed
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Is this session waiting on the given request generation?
    #[must_use]
    pub fn is_awaiting(&self, generation: u64) -> bool {
        matches!(self.phase, Phase::Interpreting { generation: g } if g == generation)
    }

    /// The assembled interpretation, once complete.
    #[must_use]
    pub fn interpretation(&self) -> Option<&Interpretation> {
        self.interpretation.as_ref()
    }

    /// The recorded failure, while in `Error`.
    #[must_use]
    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    /// When the session was started.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
