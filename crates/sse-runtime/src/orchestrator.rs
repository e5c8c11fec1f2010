//! The prediction pipeline.

use sse_context::{build_snapshot, synthesize_priors};
use sse_explainer::{generate_explanation, ExplanationTrace};
use sse_outcome::OutcomeEngine;
use sse_semantics::SemanticsExtractor;
use sse_types::{PredictionResult, SseResult};
use tracing::info;

use crate::config::RunConfig;

/// Runs predictions. Holds only immutable rule tables and weights.
#[derive(Clone, Debug, Default)]
pub struct Predictor {
    extractor: SemanticsExtractor,
    outcomes: OutcomeEngine,
}

impl Predictor {
    /// Predict the outcome of a situation.
    pub fn predict(&self, situation: &str, config: &RunConfig) -> SseResult<PredictionResult> {
        self.predict_with_trace(situation, config)
            .map(|(result, _)| result)
    }

    /// Predict and also return the explanation trace behind the result.
    pub fn predict_with_trace(
        &self,
        situation: &str,
        config: &RunConfig,
    ) -> SseResult<(PredictionResult, ExplanationTrace)> {
        let semantics = self.extractor.extract(situation);
        let snapshot = build_snapshot(&semantics);
        let priors = synthesize_priors(&semantics);

        let set = self.outcomes.compute(
            &semantics,
            &snapshot,
            &priors,
            config.example_id.as_deref(),
            config.strategic_depth,
        );

        let trace = generate_explanation(
            &snapshot,
            &priors,
            Some(&set.strategic),
            &set.primary.label,
            config.depth,
        );

        let mut explanation = trace.summary.clone();
        if config.depth.is_deep() {
            explanation.push_str(" Factors: ");
            explanation.push_str(&trace.factor_names().join("; "));
            explanation.push('.');
        }

        let alternatives = if config.include_alternatives {
            set.alternatives
        } else {
            Vec::new()
        };

        let result = PredictionResult {
            predicted_outcome: set.primary,
            explanation,
            horizon: semantics.mode.horizon(),
            mode: semantics.mode,
            alternatives,
            belief_shift_summary: set.strategic.belief_shift_summary,
            signal_evaluation_summary: set.strategic.signal_evaluation_summary,
            coalition_likelihood: set.strategic.coalition_likelihood,
            recursion_depth_used: set.strategic.recursion_depth_used,
        };
        result.validate()?;

        info!(
            outcome = %result.predicted_outcome.id,
            confidence = result.predicted_outcome.confidence,
            mode = %result.mode,
            horizon = %result.horizon,
            depth = result.recursion_depth_used,
            "Prediction complete"
        );

        Ok((result, trace))
    }
}

/// Predict with a default [`Predictor`].
pub fn predict(situation: &str, config: &RunConfig) -> SseResult<PredictionResult> {
    Predictor::default().predict(situation, config)
}

/// Predict with a default [`Predictor`], returning the explanation trace too.
pub fn predict_with_trace(
    situation: &str,
    config: &RunConfig,
) -> SseResult<(PredictionResult, ExplanationTrace)> {
    Predictor::default().predict_with_trace(situation, config)
}
