//! Interpretation assembly.
//!
//! ## Key Types
//!
//! - `Interpretation` / `Section`: the structured reading produced once
//!   per completed session
//! - `InterpretationAssembler`: turns placed cards into an `Interpretation`
//! - `NarrativeGenerator`: seam for an external narrative collaborator
//! - `TemplateNarrative`: deterministic local generator, also the fallback
//!
//! Assembly never hard-fails a session on collaborator trouble: if the
//! generator errors, the assembler degrades to the deterministic template.

pub mod assembler;
pub mod narrative;

pub use assembler::{Interpretation, InterpretationAssembler, Section};
pub use narrative::{NarrativeGenerator, ResolvedPlacement, TemplateNarrative};
