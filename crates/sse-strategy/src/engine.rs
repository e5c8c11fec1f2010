//! Strategic reasoning engine: a one-shot scored search over candidate
//! actions.
//!
//! ## Pipeline
//!
//! ```text
//! semantics + snapshot + priors
//!   → recursion depth (override │ text cues │ mode)
//!   → baseline beliefs, coalition, detection risk, institution agent
//!   → evaluate each candidate action (fresh beliefs per candidate)
//!   → keep the strictly best score (earlier candidates win ties)
//!   → StrategicResult
//! ```

use sse_context::{EssSnapshot, McmPriors};
use sse_semantics::SituationSemantics;
use sse_types::round4;
use tracing::debug;

use crate::evaluator::{ActionEvaluation, NormativeWeights, StrategicContext};
use crate::recursion::infer_recursion_depth;
use crate::types::{StrategicAction, StrategicResult};

/// Scale applied to the best score's distance from 0.5.
const SCORE_ADJUSTMENT_SCALE: f64 = 0.18;
/// Adjustment added per level of recursive modeling.
const DEPTH_ADJUSTMENT: f64 = 0.03;

const NO_SIGNAL_SUMMARY: &str = "No costly signal selected; credibility remained stable.";

// ── Engine ──────────────────────────────────────────────────────────────

/// Runs the strategic layer. Holds only immutable weights, so one
/// reasoner can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct StrategicReasoner {
    weights: NormativeWeights,
}

impl StrategicReasoner {
    /// Evaluate every candidate action in order.
    pub fn evaluate_candidates(&self, context: &StrategicContext<'_>) -> Vec<ActionEvaluation> {
        context
            .candidate_actions()
            .into_iter()
            .map(|action| {
                let eval = context.evaluate(action, &self.weights);
                debug!(
                    action = %eval.action,
                    score = eval.score,
                    coalition = eval.coalition,
                    legitimacy = eval.legitimacy,
                    response = %eval.institution_response,
                    cascade = eval.cascade,
                    "Evaluated strategic action"
                );
                eval
            })
            .collect()
    }

    /// Run the scored search and summarise the winning action.
    pub fn run(
        &self,
        semantics: &SituationSemantics,
        snapshot: &EssSnapshot,
        priors: &McmPriors,
        depth_override: Option<i64>,
    ) -> StrategicResult {
        let depth = infer_recursion_depth(semantics, depth_override);
        let context = StrategicContext::new(semantics, snapshot, priors, depth);

        let evaluations = self.evaluate_candidates(&context);
        let best = match select_best(evaluations) {
            Some(best) => best,
            None => context.evaluate(StrategicAction::ReactiveResponse, &self.weights),
        };

        debug!(
            action = %best.action,
            score = best.score,
            depth,
            "Selected strategic action"
        );

        StrategicResult {
            belief_shift_summary: format!(
                "Average inferred intent shift across modeled agents: {:+.3}.",
                best.shift.mean_intent_delta
            ),
            signal_evaluation_summary: signal_summary(&best),
            coalition_likelihood: round4(best.coalition),
            recursion_depth_used: depth,
            chosen_action: best.action,
            institution_response: best.institution_response,
            cascade_state: best.cascade,
            score_adjustment: round4(
                (best.score - 0.5) * SCORE_ADJUSTMENT_SCALE + DEPTH_ADJUSTMENT * f64::from(depth),
            ),
        }
    }
}

/// Run the strategic layer with default weights.
pub fn run_strategic_reasoning(
    semantics: &SituationSemantics,
    snapshot: &EssSnapshot,
    priors: &McmPriors,
    depth_override: Option<i64>,
) -> StrategicResult {
    StrategicReasoner::default().run(semantics, snapshot, priors, depth_override)
}

/// First evaluation with the strictly highest score.
fn select_best(evaluations: Vec<ActionEvaluation>) -> Option<ActionEvaluation> {
    let mut best: Option<ActionEvaluation> = None;
    for eval in evaluations {
        let better = match &best {
            Some(current) => eval.score > current.score,
            None => true,
        };
        if better {
            best = Some(eval);
        }
    }
    best
}

fn signal_summary(eval: &ActionEvaluation) -> String {
    match eval.action.signal() {
        Some(signal) => format!(
            "Selected {} signal with cost={:.2}, consistency={:.2}, credibility_delta={:.3}.",
            eval.action.class(),
            signal.cost,
            eval.consistency,
            eval.shift.mean_credibility_delta
        ),
        None => NO_SIGNAL_SUMMARY.to_string(),
    }
}
