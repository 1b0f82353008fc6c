//! Reading session: state machine and orchestration.
//!
//! ## Key Types
//!
//! - `Phase`: tagged-union lifecycle state of a reading
//! - `SessionEvent`: events driving transitions
//! - `PlacedCard`: a drawn card bound to a spread position and orientation
//! - `ReadingSession`: the session value; transitions are pure
//!   `(session, event) -> session'` functions
//! - `ReadingFlow`: composition root owning catalogs, RNG, assembler, and
//!   repository; the single entry point UI glue talks to
//!
//! One event is processed to completion before the next; a transition
//! either yields a successor session or an error that leaves the original
//! untouched. The interpretation step is request/deliver with a generation
//! counter so a reset session can never receive a stale result.

pub mod event;
pub mod flow;
pub mod session;
pub mod state;

pub use event::SessionEvent;
pub use flow::{Delivery, ReadingFlow};
pub use session::{InterpretationRequest, ReadingSession, SessionId, Transition};
pub use state::{Phase, PlacedCard};
