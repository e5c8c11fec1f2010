//! Outcome engine: primary selection, alternatives, and strategic folding.

use sse_context::{EssSnapshot, McmPriors};
use sse_semantics::SituationSemantics;
use sse_strategy::{StrategicReasoner, StrategicResult};
use sse_types::{clamp, round4, Outcome};
use tracing::debug;

use crate::catalogue::example_outcome;
use crate::defaults::{default_alternatives, default_outcome};

/// Floor for the adjusted primary confidence.
pub const MIN_CONFIDENCE: f64 = 0.05;
/// Ceiling for the adjusted primary confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Primary outcome, alternatives, and the strategic verdict behind them.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeSet {
    pub primary: Outcome,
    pub alternatives: Vec<Outcome>,
    pub strategic: StrategicResult,
}

/// Computes outcomes for a situation.
#[derive(Clone, Debug, Default)]
pub struct OutcomeEngine {
    reasoner: StrategicReasoner,
}

impl OutcomeEngine {
    /// Select the primary outcome, generate alternatives, and fold in the
    /// strategic score adjustment.
    pub fn compute(
        &self,
        semantics: &SituationSemantics,
        snapshot: &EssSnapshot,
        priors: &McmPriors,
        example_id: Option<&str>,
        strategic_depth_override: Option<i64>,
    ) -> OutcomeSet {
        let base = match example_id.and_then(example_outcome) {
            Some(outcome) => {
                debug!(example_id = ?example_id, outcome = %outcome.id, "Using catalogued outcome");
                outcome
            }
            None => default_outcome(semantics.domain, priors),
        };

        let alternatives = default_alternatives(semantics.domain);
        let strategic = self
            .reasoner
            .run(semantics, snapshot, priors, strategic_depth_override);
        let primary = fold_strategy(&base, &strategic);

        debug!(
            outcome = %primary.id,
            base_confidence = base.confidence,
            adjusted_confidence = primary.confidence,
            adjustment = strategic.score_adjustment,
            "Folded strategic adjustment into primary outcome"
        );

        OutcomeSet {
            primary,
            alternatives,
            strategic,
        }
    }
}

/// Compute outcomes with the default engine.
pub fn compute_outcomes(
    semantics: &SituationSemantics,
    snapshot: &EssSnapshot,
    priors: &McmPriors,
    example_id: Option<&str>,
    strategic_depth_override: Option<i64>,
) -> OutcomeSet {
    OutcomeEngine::default().compute(
        semantics,
        snapshot,
        priors,
        example_id,
        strategic_depth_override,
    )
}

/// Adjusted copy of `base`: confidence shifted and clamped, strategy tag
/// appended once.
fn fold_strategy(base: &Outcome, strategic: &StrategicResult) -> Outcome {
    let confidence = clamp(
        round4(base.confidence + strategic.score_adjustment),
        MIN_CONFIDENCE,
        MAX_CONFIDENCE,
    );
    let mut adjusted = base.with_confidence(confidence);
    let tag = strategic.rationale_tag();
    if !adjusted.rationale.contains(&tag) {
        adjusted.rationale.push(tag);
    }
    adjusted
}
