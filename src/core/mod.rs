//! Core engine types: deterministic randomness.
//!
//! Everything random in a reading (subset sampling, shuffling, reversal
//! decisions) flows through [`ReadingRng`] so tests can inject a seed and
//! replay a session exactly.

pub mod rng;

pub use rng::{ReadingRng, ReadingRngState};
