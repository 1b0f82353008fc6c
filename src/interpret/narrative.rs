//! Narrative generation seam.
//!
//! The combined narrative of a multi-card reading may come from an
//! external collaborator (a remote service, an LLM, anything implementing
//! [`NarrativeGenerator`]). The engine only requires deterministic-or-
//! pluggable text keyed to the full card sequence; [`TemplateNarrative`]
//! is the local implementation and the fallback when a collaborator fails.

use crate::cards::Card;
use crate::error::EngineResult;

/// A placed card resolved against the catalog and spread for narration.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedPlacement<'a> {
    /// The card drawn.
    pub card: &'a Card,
    /// The spread position label it fills.
    pub label: &'a str,
    /// Orientation decided at draw time.
    pub reversed: bool,
}

impl ResolvedPlacement<'_> {
    /// Card name with orientation suffix, as shown to the reader.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.reversed {
            format!("{} (Reversed)", self.card.name)
        } else {
            self.card.name.clone()
        }
    }
}

/// Generates the combined narrative paragraph for a multi-card reading.
///
/// Implementations may call out to external services. Failures surface as
/// `EngineError::InterpretationUnavailable` and are absorbed by the
/// assembler's fallback; they never fail the session.
pub trait NarrativeGenerator {
    /// Produce a narrative paragraph for the full card sequence.
    fn combined_narrative(
        &self,
        placements: &[ResolvedPlacement<'_>],
        question: Option<&str>,
    ) -> EngineResult<String>;
}

/// Deterministic local narrative generator.
///
/// Weaves one sentence per placement from its label, name, and leading
/// keyword. Same placements in, same paragraph out.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateNarrative;

impl NarrativeGenerator for TemplateNarrative {
    fn combined_narrative(
        &self,
        placements: &[ResolvedPlacement<'_>],
        question: Option<&str>,
    ) -> EngineResult<String> {
        Ok(template_text(placements, question))
    }
}

/// The template paragraph itself, shared with the assembler's fallback path.
#[must_use]
pub fn template_text(placements: &[ResolvedPlacement<'_>], question: Option<&str>) -> String {
    let mut text = String::new();
    let last = placements.len().saturating_sub(1);

    for (i, p) in placements.iter().enumerate() {
        let keyword = p
            .card
            .keywords(p.reversed)
            .first()
            .map(String::as_str)
            .unwrap_or("change");

        if i == 0 {
            text.push_str(&format!(
                "The reading opens with {} as {}, speaking of {}.",
                p.display_name(),
                p.label,
                keyword
            ));
        } else if i == last {
            text.push_str(&format!(
                " It settles on {} as {}, closing the sequence with {}.",
                p.display_name(),
                p.label,
                keyword
            ));
        } else {
            text.push_str(&format!(
                " Then {} enters as {}, bringing {}.",
                p.display_name(),
                p.label,
                keyword
            ));
        }
    }

    if question.is_some() {
        text.push_str(" Read the sequence in the light of what you asked.");
    }

    text
}
