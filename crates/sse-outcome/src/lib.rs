//! # sse-outcome
//!
//! Chooses the primary outcome for a situation and its alternatives, then
//! folds the strategic layer's verdict into the primary confidence.
//!
//! ```text
//! example id in catalogue? ──yes──▶ catalogued outcome
//!          │ no
//!          ▼
//! domain default (base + linear trait term)
//!          │
//!          ▼
//! + strategic score adjustment → clamp [0.05, 0.95] → round 4
//! + rationale tag "strategic:<action>[;cascade=true]"
//! ```

#![deny(unsafe_code)]

pub mod catalogue;
pub mod defaults;
pub mod engine;

pub use catalogue::example_outcome;
pub use defaults::{default_alternatives, default_outcome};
pub use engine::{compute_outcomes, OutcomeEngine, OutcomeSet, MAX_CONFIDENCE, MIN_CONFIDENCE};
