//! End-to-end reading flow tests.
//!
//! These walk whole sessions through the flow orchestrator: start, settle,
//! select, interpret, save, and the reset/abort/retry paths around them.

use tarot_engine::{
    CardId, Delivery, EngineError, Phase, ReadingFlow, ReadingRepository, SavedReading,
};

fn flow_with_seed(seed: u64) -> ReadingFlow {
    ReadingFlow::standard().with_seed(seed).with_table_size(12)
}

/// Table card ids in order, for picking selections.
fn table_cards(flow: &ReadingFlow) -> Vec<CardId> {
    flow.session().unwrap().table().iter().collect()
}

/// Scenario A: a three-card reading runs to completion with ordered
/// Past/Present/Future sections.
#[test]
fn test_three_card_reading_completes() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("three-card", None).unwrap();
    assert_eq!(flow.phase(), Phase::Shuffling);

    flow.settle_deck().unwrap();
    assert_eq!(flow.phase(), Phase::Dealt);

    let cards = table_cards(&flow);
    assert!(flow.select_card(cards[0]).unwrap().is_none());
    assert_eq!(flow.phase(), Phase::Selecting);
    assert!(flow.select_card(cards[4]).unwrap().is_none());
    let request = flow.select_card(cards[8]).unwrap().unwrap();

    assert_eq!(flow.run_interpretation(request), Delivery::Applied);
    assert_eq!(flow.phase(), Phase::Complete);

    let interpretation = flow.session().unwrap().interpretation().unwrap();
    assert_eq!(interpretation.sections.len(), 3);
    assert!(interpretation.sections[0].title.starts_with("Past: "));
    assert!(interpretation.sections[1].title.starts_with("Present: "));
    assert!(interpretation.sections[2].title.starts_with("Future: "));
    assert!(interpretation.combined_narrative.is_some());
}

/// Scenario B: a one-card reading has no combined narrative.
#[test]
fn test_one_card_reading_has_no_combined_narrative() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("one-card", None).unwrap();
    flow.settle_deck().unwrap();

    let cards = table_cards(&flow);
    let request = flow.select_card(cards[0]).unwrap().unwrap();
    assert_eq!(flow.run_interpretation(request), Delivery::Applied);

    let interpretation = flow.session().unwrap().interpretation().unwrap();
    assert_eq!(interpretation.sections.len(), 1);
    assert!(interpretation.sections[0].title.starts_with("Message for you: "));
    assert!(interpretation.combined_narrative.is_none());
}

/// Scenario C: re-selecting an already placed card is rejected without
/// touching session state.
#[test]
fn test_duplicate_selection_rejected_in_place() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("three-card", None).unwrap();
    flow.settle_deck().unwrap();

    let cards = table_cards(&flow);
    flow.select_card(cards[0]).unwrap();

    let before: Vec<_> = flow.session().unwrap().placed().to_vec();
    let err = flow.select_card(cards[0]).unwrap_err();

    assert_eq!(err, EngineError::DuplicateSelection(cards[0]));
    assert_eq!(flow.phase(), Phase::Selecting);
    assert_eq!(flow.session().unwrap().placed(), before.as_slice());
}

/// Scenario E: a reset session discards the interpretation that was in
/// flight when reset was called.
#[test]
fn test_reset_discards_in_flight_interpretation() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("three-card", None).unwrap();
    flow.settle_deck().unwrap();

    let cards = table_cards(&flow);
    flow.select_card(cards[0]).unwrap();
    flow.select_card(cards[1]).unwrap();
    let request = flow.select_card(cards[2]).unwrap().unwrap();
    assert_eq!(flow.phase(), Phase::Interpreting { generation: 1 });

    flow.reset();
    assert_eq!(flow.phase(), Phase::Idle);

    // The request resolves after the reset: it must be dropped
    assert_eq!(flow.run_interpretation(request), Delivery::Discarded);
    assert_eq!(flow.phase(), Phase::Idle);
    assert!(flow.session().is_none());
}

/// A stale request from before a retry is also discarded.
#[test]
fn test_retry_invalidates_older_request() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("one-card", None).unwrap();
    flow.settle_deck().unwrap();
    let cards = table_cards(&flow);
    let first_request = flow.select_card(cards[0]).unwrap().unwrap();

    // First delivery fails; session parks in Error
    let delivery = flow.deliver_interpretation(
        &first_request,
        Err(EngineError::InterpretationUnavailable("offline".into())),
    );
    assert_eq!(delivery, Delivery::Applied);
    assert_eq!(flow.phase(), Phase::Error);
    assert!(flow.session().unwrap().error().is_some());

    // Retry issues generation 2; the old request is now stale
    let retry_request = flow.retry().unwrap().unwrap();
    assert_eq!(retry_request.generation, 2);
    assert_eq!(flow.run_interpretation(first_request), Delivery::Discarded);
    assert_eq!(flow.phase(), Phase::Interpreting { generation: 2 });

    // The fresh request completes the session
    assert_eq!(flow.run_interpretation(retry_request), Delivery::Applied);
    assert_eq!(flow.phase(), Phase::Complete);
}

#[test]
fn test_reset_twice_is_idempotent() {
    let mut flow = flow_with_seed(42);
    flow.start_reading("celtic-cross", None).unwrap();

    flow.reset();
    flow.reset();

    assert_eq!(flow.phase(), Phase::Idle);
    assert!(flow.session().is_none());

    // A new reading starts cleanly afterwards
    flow.start_reading("one-card", None).unwrap();
    assert_eq!(flow.phase(), Phase::Shuffling);
    assert!(flow.session().unwrap().placed().is_empty());
}

#[test]
fn test_abort_mid_selection() {
    let mut flow = flow_with_seed(42);
    flow.start_reading("three-card", None).unwrap();
    flow.settle_deck().unwrap();
    let cards = table_cards(&flow);
    flow.select_card(cards[0]).unwrap();

    flow.abort().unwrap();
    assert_eq!(flow.phase(), Phase::Aborted);

    // Further selection is rejected; reset recovers
    let err = flow.select_card(cards[1]).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidTransition {
            phase: "aborted",
            event: "select"
        }
    );
    flow.reset();
    assert_eq!(flow.phase(), Phase::Idle);
}

/// Position integrity: a completed Celtic Cross fills positions 0..10
/// exactly once each, with no duplicate cards.
#[test]
fn test_celtic_cross_position_integrity() {
    let mut flow = ReadingFlow::standard().with_seed(13).with_table_size(12);

    flow.start_reading("celtic-cross", None).unwrap();
    flow.settle_deck().unwrap();

    let cards = table_cards(&flow);
    let mut request = None;
    for card in cards.into_iter().take(10) {
        request = flow.select_card(card).unwrap();
    }
    assert_eq!(flow.run_interpretation(request.unwrap()), Delivery::Applied);

    let placed = flow.session().unwrap().placed().to_vec();
    assert_eq!(placed.len(), 10);

    let mut positions: Vec<_> = placed.iter().map(|p| p.position).collect();
    positions.sort_unstable();
    assert_eq!(positions, (0..10).collect::<Vec<_>>());

    let mut ids: Vec<_> = placed.iter().map(|p| p.card.raw()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "duplicate card in placement");
}

/// Selecting past the spread's capacity is rejected with SpreadFull.
#[test]
fn test_overfull_selection_rejected() {
    let mut flow = flow_with_seed(42);
    flow.start_reading("one-card", None).unwrap();
    flow.settle_deck().unwrap();

    let cards = table_cards(&flow);
    flow.select_card(cards[0]).unwrap();

    let err = flow.select_card(cards[1]).unwrap_err();
    assert_eq!(err, EngineError::SpreadFull { capacity: 1 });
}

#[test]
fn test_save_and_fetch_history() {
    let mut flow = flow_with_seed(42);

    flow.start_reading("three-card", Some("What next?".into()))
        .unwrap();
    flow.settle_deck().unwrap();
    let cards = table_cards(&flow);
    flow.select_card(cards[0]).unwrap();
    flow.select_card(cards[1]).unwrap();
    let request = flow.select_card(cards[2]).unwrap().unwrap();
    assert_eq!(flow.run_interpretation(request), Delivery::Applied);

    let saved = flow.save_reading("user-1").unwrap();

    let history = flow.history("user-1", 1, 10).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, saved.id);
    assert_eq!(history[0].spread_id, "three-card");
    assert_eq!(history[0].question.as_deref(), Some("What next?"));
    assert_eq!(history[0].placed.len(), 3);

    assert!(flow.history("user-2", 1, 10).unwrap().is_empty());
}

#[test]
fn test_save_requires_complete_session() {
    let mut flow = flow_with_seed(42);
    flow.start_reading("one-card", None).unwrap();

    let err = flow.save_reading("user-1").unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidTransition {
            phase: "shuffling",
            event: "save"
        }
    );
}

/// Repository failure reports SaveFailed without touching the completed
/// session; the reading itself survives for a later retry.
#[test]
fn test_failed_save_keeps_session_complete() {
    struct FailingRepository;

    impl ReadingRepository for FailingRepository {
        fn save(
            &mut self,
            _draft: tarot_engine::ReadingDraft,
        ) -> tarot_engine::EngineResult<SavedReading> {
            Err(EngineError::SaveFailed("disk full".into()))
        }

        fn fetch_history(
            &self,
            _user_id: &str,
            _page: usize,
            _limit: usize,
        ) -> tarot_engine::EngineResult<Vec<tarot_engine::ReadingRecord>> {
            Ok(Vec::new())
        }
    }

    let mut flow = ReadingFlow::new(
        tarot_engine::standard_catalog(),
        tarot_engine::SpreadCatalog::builtin(),
        FailingRepository,
        tarot_engine::InterpretationAssembler::template(),
    )
    .with_seed(42)
    .with_table_size(12);

    flow.start_reading("one-card", None).unwrap();
    flow.settle_deck().unwrap();
    let cards = table_cards_any(&flow);
    let request = flow.select_card(cards[0]).unwrap().unwrap();
    assert_eq!(flow.run_interpretation(request), Delivery::Applied);

    let err = flow.save_reading("user-1").unwrap_err();
    assert_eq!(err, EngineError::SaveFailed("disk full".into()));

    // The reading is untouched and still saveable
    assert_eq!(flow.phase(), Phase::Complete);
    assert!(flow.session().unwrap().interpretation().is_some());
    assert!(flow.save_reading("user-1").is_err());
}

/// Like `table_cards` but for any repository/narrative type parameters.
fn table_cards_any<R: ReadingRepository, N: tarot_engine::NarrativeGenerator>(
    flow: &ReadingFlow<R, N>,
) -> Vec<CardId> {
    flow.session().unwrap().table().iter().collect()
}
