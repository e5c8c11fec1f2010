//! Side-by-side comparison of a base situation and a variant.

use serde::{Deserialize, Serialize};
use sse_explainer::ExplanationTrace;
use sse_types::{round4, PredictionResult, SseResult};

use crate::config::RunConfig;
use crate::orchestrator::Predictor;

/// How a variant's prediction differs from the base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionComparison {
    /// Variant confidence minus base confidence, rounded to four decimals.
    pub confidence_delta: f64,
    pub outcome_changed: bool,
    pub mode_changed: bool,
    /// Factors only in the variant, in variant order.
    pub added_factors: Vec<String>,
    /// Factors only in the base, in base order.
    pub removed_factors: Vec<String>,
    /// Factors in both, in base order.
    pub shared_factors: Vec<String>,
}

/// Both predictions and their comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub base: PredictionResult,
    pub variant: PredictionResult,
    pub comparison: PredictionComparison,
}

/// Predict both situations under the same config and compare them.
pub fn compare(base: &str, variant: &str, config: &RunConfig) -> SseResult<ComparisonReport> {
    let predictor = Predictor::default();
    let (base_result, base_trace) = predictor.predict_with_trace(base, config)?;
    let (variant_result, variant_trace) = predictor.predict_with_trace(variant, config)?;
    let comparison = compare_traces(&base_result, &base_trace, &variant_result, &variant_trace);
    Ok(ComparisonReport {
        base: base_result,
        variant: variant_result,
        comparison,
    })
}

/// Compare two finished predictions by outcome, mode, and factor names.
pub fn compare_traces(
    base: &PredictionResult,
    base_trace: &ExplanationTrace,
    variant: &PredictionResult,
    variant_trace: &ExplanationTrace,
) -> PredictionComparison {
    let base_names = base_trace.factor_names();
    let variant_names = variant_trace.factor_names();

    let added_factors = variant_names
        .iter()
        .filter(|n| !base_names.contains(n))
        .map(|n| n.to_string())
        .collect();
    let removed_factors = base_names
        .iter()
        .filter(|n| !variant_names.contains(n))
        .map(|n| n.to_string())
        .collect();
    let shared_factors = base_names
        .iter()
        .filter(|n| variant_names.contains(n))
        .map(|n| n.to_string())
        .collect();

    PredictionComparison {
        confidence_delta: round4(
            variant.predicted_outcome.confidence - base.predicted_outcome.confidence,
        ),
        outcome_changed: base.predicted_outcome.id != variant.predicted_outcome.id,
        mode_changed: base.mode != variant.mode,
        added_factors,
        removed_factors,
        shared_factors,
    }
}
