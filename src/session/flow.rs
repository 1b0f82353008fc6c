//! Reading flow: the composition root UI glue talks to.
//!
//! Owns the catalogs, the master RNG (forked once per session), the
//! assembler, and the repository. All collaborator wiring happens here at
//! construction time; business logic below this layer never checks which
//! implementation it got.

use crate::cards::{CardCatalog, CardId};
use crate::core::ReadingRng;
use crate::deck::Deck;
use crate::error::{EngineError, EngineResult};
use crate::interpret::{Interpretation, InterpretationAssembler, NarrativeGenerator, TemplateNarrative};
use crate::repository::{InMemoryRepository, ReadingRecord, ReadingRepository, SavedReading};
use crate::spreads::SpreadCatalog;

use super::event::SessionEvent;
use super::session::{InterpretationRequest, ReadingSession};
use super::state::Phase;

/// Outcome of delivering an interpretation result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Delivery {
    /// The result was applied to the session that requested it.
    Applied,
    /// The result was stale (session reset, retried, or gone) and dropped.
    Discarded,
}

/// Orchestrates reading sessions against injected collaborators.
///
/// ## Example
///
/// ```
/// use tarot_engine::session::{Phase, ReadingFlow};
///
/// let mut flow = ReadingFlow::standard().with_seed(42).with_table_size(12);
///
/// flow.start_reading("one-card", None).unwrap();
/// flow.settle_deck().unwrap();
///
/// let card = flow.session().unwrap().table().iter().next().unwrap();
/// let request = flow.select_card(card).unwrap().unwrap();
/// let _ = flow.run_interpretation(request);
///
/// assert_eq!(flow.phase(), Phase::Complete);
/// ```
#[derive(Debug)]
pub struct ReadingFlow<R = InMemoryRepository, N = TemplateNarrative> {
    cards: CardCatalog,
    spreads: SpreadCatalog,
    assembler: InterpretationAssembler<N>,
    repository: R,
    rng: ReadingRng,
    table_size: Option<usize>,
    session: Option<ReadingSession>,
}

impl ReadingFlow<InMemoryRepository, TemplateNarrative> {
    /// A flow over the standard catalog, built-in spreads, template
    /// narrative, and in-memory persistence.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            crate::cards::standard_catalog(),
            SpreadCatalog::builtin(),
            InMemoryRepository::new(),
            InterpretationAssembler::template(),
        )
    }
}

impl<R: ReadingRepository, N: NarrativeGenerator> ReadingFlow<R, N> {
    /// Build a flow from explicit collaborators.
    #[must_use]
    pub fn new(
        cards: CardCatalog,
        spreads: SpreadCatalog,
        repository: R,
        assembler: InterpretationAssembler<N>,
    ) -> Self {
        Self {
            cards,
            spreads,
            assembler,
            repository,
            rng: ReadingRng::from_entropy(),
            table_size: None,
            session: None,
        }
    }

    /// Use a fixed master seed (deterministic sessions).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ReadingRng::new(seed);
        self
    }

    /// Deal a random subset of this size to the table instead of the
    /// whole catalog.
    #[must_use]
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.table_size = Some(size);
        self
    }

    /// Current phase; `Idle` when no session is active.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map_or(Phase::Idle, ReadingSession::phase)
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ReadingSession> {
        self.session.as_ref()
    }

    /// The card catalog this flow reads with.
    #[must_use]
    pub fn cards(&self) -> &CardCatalog {
        &self.cards
    }

    /// Start a reading: build and shuffle a deck for the chosen spread.
    ///
    /// Only legal from `Idle`. Fails with `SpreadNotFound` for an unknown
    /// spread, or `InvalidDeckSize` if the configured table cannot cover
    /// the spread's required count.
    pub fn start_reading(
        &mut self,
        spread_id: &str,
        question: Option<String>,
    ) -> EngineResult<&ReadingSession> {
        if let Some(session) = &self.session {
            return Err(EngineError::InvalidTransition {
                phase: session.phase().name(),
                event: "start",
            });
        }
        let spread = self.spreads.require(spread_id)?.clone();
        if let Some(size) = self.table_size {
            if size < spread.required_cards() {
                return Err(EngineError::InvalidDeckSize {
                    requested: size,
                    available: spread.required_cards(),
                });
            }
        }

        let mut session_rng = self.rng.fork();
        let table = Deck::build(&self.cards, self.table_size, &mut session_rng)?
            .shuffled(&mut session_rng);
        let session = ReadingSession::start(spread, question, table, session_rng);
        log::debug!("{}: started \"{}\" reading", session.id(), spread_id);

        Ok(&*self.session.insert(session))
    }

    /// Signal that the shuffle has settled and the table is visible.
    pub fn settle_deck(&mut self) -> EngineResult<()> {
        self.apply(SessionEvent::DeckSettled).map(|_| ())
    }

    /// Select a card from the table.
    ///
    /// Returns the interpretation request once the final position fills;
    /// hand it to [`run_interpretation`](Self::run_interpretation) or
    /// resolve it elsewhere and deliver the result.
    pub fn select_card(&mut self, card: CardId) -> EngineResult<Option<InterpretationRequest>> {
        self.apply(SessionEvent::Select { card })
    }

    /// Assemble locally and deliver in one step.
    ///
    /// The assembler degrades to its template fallback on collaborator
    /// failure, so this normally completes the session; a catalog
    /// inconsistency surfaces as an `Error`-phase session instead.
    pub fn run_interpretation(&mut self, request: InterpretationRequest) -> Delivery {
        let outcome = self.assembler.assemble(
            &self.cards,
            &request.spread,
            &request.placed,
            request.question.as_deref(),
        );
        self.deliver_interpretation(&request, outcome)
    }

    /// Deliver the result of an interpretation request.
    ///
    /// Stale results — the session was reset, retried, or replaced since
    /// the request was issued — are discarded, never applied.
    pub fn deliver_interpretation(
        &mut self,
        request: &InterpretationRequest,
        outcome: EngineResult<Interpretation>,
    ) -> Delivery {
        let Some(session) = self.session.as_ref() else {
            log::debug!("{}: dropping interpretation, no active session", request.session);
            return Delivery::Discarded;
        };
        if session.id() != request.session || !session.is_awaiting(request.generation) {
            log::debug!(
                "{}: dropping stale interpretation (generation {})",
                request.session,
                request.generation
            );
            return Delivery::Discarded;
        }
        match session.apply(SessionEvent::InterpretationReady {
            generation: request.generation,
            outcome,
        }) {
            Ok(transition) => {
                self.session = Some(transition.session);
                Delivery::Applied
            }
            // Unreachable under the guard above
            Err(_) => Delivery::Discarded,
        }
    }

    /// Re-request interpretation after a failed delivery.
    pub fn retry(&mut self) -> EngineResult<Option<InterpretationRequest>> {
        self.apply(SessionEvent::Retry)
    }

    /// Cancel the reading mid-flow.
    pub fn abort(&mut self) -> EngineResult<()> {
        self.apply(SessionEvent::Abort).map(|_| ())
    }

    /// Drop any active session and return to `Idle`.
    ///
    /// Always legal, idempotent, and the stale-guard for in-flight
    /// interpretation requests: their eventual delivery is discarded.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("{}: reset from {}", session.id(), session.phase());
        }
    }

    /// Persist the completed reading.
    ///
    /// Repository failure surfaces as `SaveFailed` and leaves the session
    /// complete with its interpretation intact; the save may be retried.
    pub fn save_reading(&mut self, user_id: &str) -> EngineResult<SavedReading> {
        let session = self.session.as_ref().ok_or(EngineError::InvalidTransition {
            phase: Phase::Idle.name(),
            event: "save",
        })?;
        let draft = session.to_draft(user_id)?;
        let saved = self.repository.save(draft)?;
        log::debug!("{}: saved as {}", session.id(), saved.id);
        Ok(saved)
    }

    /// Past readings for a user, newest first.
    pub fn history(
        &self,
        user_id: &str,
        page: usize,
        limit: usize,
    ) -> EngineResult<Vec<ReadingRecord>> {
        self.repository.fetch_history(user_id, page, limit)
    }

    fn apply(&mut self, event: SessionEvent) -> EngineResult<Option<InterpretationRequest>> {
        let session = self.session.as_ref().ok_or(EngineError::InvalidTransition {
            phase: Phase::Idle.name(),
            event: event.name(),
        })?;
        let transition = session.apply(event)?;
        self.session = Some(transition.session);
        Ok(transition.request)
    }
}
