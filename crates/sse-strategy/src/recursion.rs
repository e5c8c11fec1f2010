//! Recursion depth selection and recursive opponent pressure.

use sse_semantics::SituationSemantics;
use sse_types::{clamp01, Mode, MAX_RECURSION_DEPTH};

/// Substrings that call for modeling the opponent's model of the actor.
const DEEP_REASONING_CUES: &[&str] = &[
    "negotiat",
    "bargain",
    "deal",
    "precommit",
    "hostage",
    "politic",
    "election",
    "protest",
];

/// Depth of recursive opponent modeling for a situation.
///
/// An explicit override wins and is clamped to `0..=3`. Otherwise
/// bargaining or political cues in the text give depth 2, and the mode
/// decides the rest (C → 2, B → 1, A → 0).
pub fn infer_recursion_depth(semantics: &SituationSemantics, override_depth: Option<i64>) -> u8 {
    if let Some(depth) = override_depth {
        return depth.clamp(0, i64::from(MAX_RECURSION_DEPTH)) as u8;
    }

    let lowered = semantics.lowered_text();
    if DEEP_REASONING_CUES.iter().any(|cue| lowered.contains(cue)) {
        return 2;
    }
    match semantics.mode {
        Mode::C => 2,
        Mode::B => 1,
        Mode::A => 0,
    }
}

/// Pressure the opponent exerts after `depth` levels of mutual modeling.
///
/// `p(0) = intent`, `p(d) = 0.62·p(d−1) + 0.38·intent + 0.03·d`, clamped.
pub fn recursive_pressure(depth: u8, intent: f64) -> f64 {
    if depth == 0 {
        return clamp01(intent);
    }
    let prior = recursive_pressure(depth - 1, intent);
    clamp01(0.62 * prior + 0.38 * intent + 0.03 * f64::from(depth))
}
