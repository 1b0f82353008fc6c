//! Reading persistence.
//!
//! The engine only depends on the [`ReadingRepository`] contract; where
//! readings actually live (database, local storage, remote API) is an
//! external concern. [`InMemoryRepository`] is the default implementation,
//! selected at composition time, and doubles as the mock in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::interpret::Interpretation;
use crate::session::PlacedCard;

pub mod memory;

pub use memory::InMemoryRepository;

/// Unique identifier for a persisted reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub Uuid);

impl ReadingId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reading({})", self.0)
    }
}

/// A completed reading as submitted for persistence.
///
/// The repository assigns the id and timestamp on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingDraft {
    /// Owner of the reading.
    pub user_id: String,
    /// The spread that was read.
    pub spread_id: String,
    /// The question asked, if any.
    pub question: Option<String>,
    /// The full placement, in position order.
    pub placed: Vec<PlacedCard>,
    /// The assembled interpretation.
    pub interpretation: Interpretation,
}

/// Receipt for a saved reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReading {
    /// Assigned id.
    pub id: ReadingId,
    /// Assigned timestamp.
    pub created_at: DateTime<Utc>,
}

/// A persisted reading as returned from history queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Assigned id.
    pub id: ReadingId,
    /// When the reading was saved.
    pub created_at: DateTime<Utc>,
    /// Owner of the reading.
    pub user_id: String,
    /// The spread that was read.
    pub spread_id: String,
    /// The question asked, if any.
    pub question: Option<String>,
    /// The full placement, in position order.
    pub placed: Vec<PlacedCard>,
    /// The assembled interpretation.
    pub interpretation: Interpretation,
}

/// Persistence contract consumed by the engine.
///
/// Implementations return `EngineError::SaveFailed` for storage trouble;
/// the flow reports it without rolling back the completed session.
pub trait ReadingRepository {
    /// Persist a completed reading, returning its id and timestamp.
    fn save(&mut self, draft: ReadingDraft) -> EngineResult<SavedReading>;

    /// A user's past readings, newest first.
    ///
    /// `page` is 1-based (0 is treated as 1); a `limit` of zero yields an
    /// empty page.
    fn fetch_history(
        &self,
        user_id: &str,
        page: usize,
        limit: usize,
    ) -> EngineResult<Vec<ReadingRecord>>;
}
