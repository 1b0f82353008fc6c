//! # tarot-engine
//!
//! The core engine of a tarot reading application: deck and card data
//! model, spread configuration, the shuffle-deal-select session state
//! machine, and interpretation assembly.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Spreads and cards are catalog entries, never code
//!    branches. Adding a layout means adding an entry.
//!
//! 2. **Pure Transitions**: A session is a value; `apply(session, event)`
//!    returns a successor or an error that leaves the original untouched.
//!    Persistent structures keep the copies cheap.
//!
//! 3. **Injected Boundaries**: Randomness (`ReadingRng`), narrative
//!    generation (`NarrativeGenerator`), and persistence
//!    (`ReadingRepository`) are injected at composition time, so shuffle
//!    fairness and reversal probability are testable with seeds and
//!    collaborator failures are testable with doubles.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `cards`: card model, catalog, and the standard 78-card deck
//! - `deck`: session-scoped ordered card sequences, shuffle and draw
//! - `spreads`: layout definitions and their catalog
//! - `session`: the reading state machine and flow orchestrator
//! - `interpret`: interpretation assembly and the narrative seam
//! - `repository`: persistence contract and the in-memory implementation
//! - `error`: crate-wide error taxonomy
//!
//! ## Example
//!
//! ```
//! use tarot_engine::session::{Phase, ReadingFlow};
//!
//! let mut flow = ReadingFlow::standard().with_seed(7).with_table_size(12);
//!
//! flow.start_reading("three-card", Some("What should I focus on?".into())).unwrap();
//! flow.settle_deck().unwrap();
//!
//! let table: Vec<_> = flow.session().unwrap().table().iter().collect();
//! assert!(flow.select_card(table[0]).unwrap().is_none());
//! assert!(flow.select_card(table[1]).unwrap().is_none());
//! let request = flow.select_card(table[2]).unwrap().unwrap();
//!
//! let _ = flow.run_interpretation(request);
//! assert_eq!(flow.phase(), Phase::Complete);
//!
//! let interpretation = flow.session().unwrap().interpretation().unwrap();
//! assert_eq!(interpretation.sections.len(), 3);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;
pub mod interpret;
pub mod repository;
pub mod session;
pub mod spreads;

// Re-export commonly used types
pub use crate::core::{ReadingRng, ReadingRngState};

pub use crate::cards::{standard_catalog, Arcana, Card, CardCatalog, CardId, Suit};

pub use crate::deck::{decide_orientation, Deck, REVERSAL_PROBABILITY};

pub use crate::spreads::{Spread, SpreadCatalog};

pub use crate::session::{
    Delivery, InterpretationRequest, Phase, PlacedCard, ReadingFlow, ReadingSession, SessionEvent,
    SessionId, Transition,
};

pub use crate::interpret::{
    Interpretation, InterpretationAssembler, NarrativeGenerator, ResolvedPlacement, Section,
    TemplateNarrative,
};

pub use crate::repository::{
    InMemoryRepository, ReadingDraft, ReadingId, ReadingRecord, ReadingRepository, SavedReading,
};

pub use crate::error::{EngineError, EngineResult};
