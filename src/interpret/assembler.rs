//! Interpretation assembly - structured readings from placed cards.
//!
//! The assembler owns the deterministic structural shape: one section per
//! placed card in position order, a one-line summary, a conclusion, and
//! (for multi-card readings) a combined narrative. The narrative text may
//! come from an injected [`NarrativeGenerator`]; everything else is local.

use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::error::EngineResult;
use crate::session::PlacedCard;
use crate::spreads::Spread;

use super::narrative::{template_text, NarrativeGenerator, ResolvedPlacement, TemplateNarrative};

/// One per-card section of an interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// "{position label}: {card name}", with " (Reversed)" when reversed.
    pub title: String,
    /// The orientation-matched meaning text.
    pub content: String,
}

/// A structured reading, produced once per completed session.
///
/// `sections` is keyed one-to-one with the session's placed cards in the
/// same order. `combined_narrative` is present only for multi-card
/// readings. Immutable after assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// One-line restatement of spread and card count.
    pub summary: String,
    /// Per-card sections, in position order.
    pub sections: Vec<Section>,
    /// Synthesized paragraph over the whole sequence; multi-card only.
    pub combined_narrative: Option<String>,
    /// Closing prompt; references the question verbatim when one was asked.
    pub conclusion: Option<String>,
}

/// Assembles interpretations, delegating narrative text to a generator.
///
/// ## Example
///
/// ```
/// use tarot_engine::interpret::InterpretationAssembler;
///
/// let assembler = InterpretationAssembler::template();
/// # let _ = assembler;
/// ```
#[derive(Clone, Debug)]
pub struct InterpretationAssembler<N = TemplateNarrative> {
    generator: N,
}

impl InterpretationAssembler<TemplateNarrative> {
    /// Assembler using only the local deterministic template.
    #[must_use]
    pub fn template() -> Self {
        Self {
            generator: TemplateNarrative,
        }
    }
}

impl Default for InterpretationAssembler<TemplateNarrative> {
    fn default() -> Self {
        Self::template()
    }
}

impl<N: NarrativeGenerator> InterpretationAssembler<N> {
    /// Assembler delegating combined narratives to `generator`.
    #[must_use]
    pub fn new(generator: N) -> Self {
        Self { generator }
    }

    /// Assemble a reading from placed cards.
    ///
    /// Guarantees `sections.len() == placed.len()` with matching order.
    /// Generator failures degrade to the template narrative; the only hard
    /// failure is a card id missing from the catalog.
    pub fn assemble(
        &self,
        catalog: &CardCatalog,
        spread: &Spread,
        placed: &[PlacedCard],
        question: Option<&str>,
    ) -> EngineResult<Interpretation> {
        let mut resolved = Vec::with_capacity(placed.len());
        for p in placed {
            let card = catalog.require(p.card)?;
            let label = spread
                .position_label(p.position)
                .expect("placed position within spread bounds");
            resolved.push(ResolvedPlacement {
                card,
                label,
                reversed: p.reversed,
            });
        }

        let sections: Vec<Section> = resolved
            .iter()
            .map(|r| Section {
                title: format!("{}: {}", r.label, r.display_name()),
                content: r.card.meaning(r.reversed).to_string(),
            })
            .collect();

        let combined_narrative = if resolved.len() > 1 {
            let text = self
                .generator
                .combined_narrative(&resolved, question)
                .unwrap_or_else(|err| {
                    log::warn!("narrative generator unavailable, falling back: {}", err);
                    template_text(&resolved, question)
                });
            Some(text)
        } else {
            None
        };

        let conclusion = Some(match question {
            Some(q) => format!(
                "You asked: \"{}\". Hold the cards above against that question and notice what answers.",
                q
            ),
            None => "Take a moment with each card and notice which one speaks to your present path.".to_string(),
        });

        let count = placed.len();
        let summary = format!(
            "A {} reading of {} card{}.",
            spread.title(),
            count,
            if count == 1 { "" } else { "s" }
        );

        Ok(Interpretation {
            summary,
            sections,
            combined_narrative,
            conclusion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{standard_catalog, CardId};
    use crate::error::EngineError;
    use crate::spreads::SpreadCatalog;

    struct FailingNarrative;

    impl NarrativeGenerator for FailingNarrative {
        fn combined_narrative(
            &self,
            _placements: &[ResolvedPlacement<'_>],
            _question: Option<&str>,
        ) -> EngineResult<String> {
            Err(EngineError::InterpretationUnavailable(
                "service down".to_string(),
            ))
        }
    }

    fn three_card_placements() -> Vec<PlacedCard> {
        vec![
            PlacedCard {
                card: CardId::new(0),
                position: 0,
                reversed: false,
            },
            PlacedCard {
                card: CardId::new(13),
                position: 1,
                reversed: true,
            },
            PlacedCard {
                card: CardId::new(21),
                position: 2,
                reversed: false,
            },
        ]
    }

    #[test]
    fn test_sections_match_placements() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("three-card").unwrap();
        let placed = three_card_placements();

        let interpretation = InterpretationAssembler::template()
            .assemble(&catalog, spread, &placed, None)
            .unwrap();

        assert_eq!(interpretation.sections.len(), 3);
        assert_eq!(interpretation.sections[0].title, "Past: The Fool");
        assert_eq!(interpretation.sections[1].title, "Present: Death (Reversed)");
        assert_eq!(interpretation.sections[2].title, "Future: The World");

        // Content follows orientation
        let death = catalog.get(CardId::new(13)).unwrap();
        assert_eq!(interpretation.sections[1].content, death.reversed_meaning);
    }

    #[test]
    fn test_single_card_has_no_combined_narrative() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("one-card").unwrap();
        let placed = vec![PlacedCard {
            card: CardId::new(17),
            position: 0,
            reversed: false,
        }];

        let interpretation = InterpretationAssembler::template()
            .assemble(&catalog, spread, &placed, None)
            .unwrap();

        assert!(interpretation.combined_narrative.is_none());
        assert_eq!(interpretation.summary, "A One Card reading of 1 card.");
    }

    #[test]
    fn test_failing_generator_falls_back() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("three-card").unwrap();
        let placed = three_card_placements();

        let interpretation = InterpretationAssembler::new(FailingNarrative)
            .assemble(&catalog, spread, &placed, None)
            .unwrap();

        // Assembly still succeeds, narrative present from the template
        let narrative = interpretation.combined_narrative.unwrap();
        assert!(narrative.contains("The Fool"));
        assert_eq!(interpretation.sections.len(), 3);
    }

    #[test]
    fn test_conclusion_references_question_verbatim() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("one-card").unwrap();
        let placed = vec![PlacedCard {
            card: CardId::new(0),
            position: 0,
            reversed: false,
        }];

        let question = "Should I take the new job?";
        let interpretation = InterpretationAssembler::template()
            .assemble(&catalog, spread, &placed, Some(question))
            .unwrap();

        assert!(interpretation.conclusion.unwrap().contains(question));
    }

    #[test]
    fn test_unknown_card_fails() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("one-card").unwrap();
        let placed = vec![PlacedCard {
            card: CardId::new(999),
            position: 0,
            reversed: false,
        }];

        let err = InterpretationAssembler::template()
            .assemble(&catalog, spread, &placed, None)
            .unwrap_err();
        assert_eq!(err, EngineError::CardNotFound(CardId::new(999)));
    }

    #[test]
    fn test_interpretation_serialization() {
        let catalog = standard_catalog();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.get("three-card").unwrap();

        let interpretation = InterpretationAssembler::template()
            .assemble(&catalog, spread, &three_card_placements(), Some("What now?"))
            .unwrap();

        let json = serde_json::to_string(&interpretation).unwrap();
        let back: Interpretation = serde_json::from_str(&json).unwrap();
        assert_eq!(interpretation, back);
    }
}
