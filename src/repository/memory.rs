//! In-memory repository.

use chrono::Utc;

use crate::error::EngineResult;

use super::{ReadingDraft, ReadingId, ReadingRecord, ReadingRepository, SavedReading};

/// Keeps readings in a vector, newest last.
///
/// The default repository for local use and tests; swap in a real backend
/// at composition time via [`ReadingFlow::new`](crate::session::ReadingFlow::new).
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    records: Vec<ReadingRecord>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored readings across all users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the repository empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReadingRepository for InMemoryRepository {
    fn save(&mut self, draft: ReadingDraft) -> EngineResult<SavedReading> {
        let saved = SavedReading {
            id: ReadingId::generate(),
            created_at: Utc::now(),
        };
        self.records.push(ReadingRecord {
            id: saved.id,
            created_at: saved.created_at,
            user_id: draft.user_id,
            spread_id: draft.spread_id,
            question: draft.question,
            placed: draft.placed,
            interpretation: draft.interpretation,
        });
        Ok(saved)
    }

    fn fetch_history(
        &self,
        user_id: &str,
        page: usize,
        limit: usize,
    ) -> EngineResult<Vec<ReadingRecord>> {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(limit);

        let records = self
            .records
            .iter()
            .rev() // newest first
            .filter(|r| r.user_id == user_id)
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        Ok(records)
    }
}
