//! # sse-types
//!
//! Shared contracts for the situational prediction pipeline.
//!
//! Every stage of the pipeline exchanges plain, immutable values. The types
//! in this crate are the vocabulary those stages agree on:
//!
//! | Type               | Meaning                                          |
//! |--------------------|--------------------------------------------------|
//! | [`Mode`]           | interaction scale (A individual, B interpersonal, C collective) |
//! | [`Domain`]         | situational topic driving every lookup table     |
//! | [`Horizon`]        | how soon the predicted outcome is expected       |
//! | [`Outcome`]        | a scored, labelled outcome with rationale tags   |
//! | [`PredictionResult`] | the validated end product of one run           |
//! | [`RuleTable`]      | ordered first-match-wins classification rules    |

#![deny(unsafe_code)]

pub mod error;
pub mod numeric;
pub mod outcome;
pub mod rules;
pub mod situation;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{SseError, SseResult};
pub use numeric::{clamp, clamp01, mean, round4};
pub use outcome::{Outcome, PredictionResult, MAX_RECURSION_DEPTH};
pub use rules::{Rule, RuleTable};
pub use situation::{Domain, Horizon, Mode};
