//! Coalition likelihood and deception detection risk.

use sse_context::{EssSnapshot, McmPriors};
use sse_semantics::SituationSemantics;
use sse_types::{clamp01, Mode};

/// Likelihood that other parties coordinate with the actor, given the
/// current mean credibility.
///
/// `0.35·alignment + 0.3·credibility + 0.2·pressure − 0.25·coordination_cost`,
/// each term clamped to `[0, 1]` first.
pub fn baseline_coalition(
    semantics: &SituationSemantics,
    priors: &McmPriors,
    mean_credibility: f64,
) -> f64 {
    let collective = if semantics.mode == Mode::C { 1.0 } else { 0.0 };
    let interpersonal = if semantics.mode == Mode::B { 1.0 } else { 0.0 };
    let conflict = if semantics.conflict { 1.0 } else { 0.0 };

    let shared_value_alignment = clamp01(0.35 + priors.conformity * 0.45 + 0.12 * collective);
    let coordination_cost = clamp01(0.55 - 0.07 * collective + 0.08 * interpersonal);
    let external_pressure = clamp01(0.28 + 0.22 * conflict + 0.2 * collective);

    clamp01(
        0.35 * shared_value_alignment + 0.3 * clamp01(mean_credibility) + 0.2 * external_pressure
            - 0.25 * coordination_cost,
    )
}

/// Probability that concealment would be detected.
pub fn deception_detection_risk(semantics: &SituationSemantics, snapshot: &EssSnapshot) -> f64 {
    let mut risk = 0.16;
    if semantics.conflict {
        risk += 0.2;
    }
    if semantics.mode == Mode::C {
        risk += 0.18;
    }
    if !snapshot.institutions.is_empty() {
        risk += 0.2;
    }
    clamp01(risk)
}
