//! Explanation trace assembly.

use serde::{Deserialize, Serialize};
use sse_context::{EssSnapshot, McmPriors};
use sse_strategy::StrategicResult;

use crate::depth::ExplanationDepth;
use crate::factors::{FactorCategory, FactorInsight};

const DEFAULT_BODY: &str =
    "This outcome is most likely given the constraints and priors in the situation.";
const DEEP_BODY: &str = "This outcome follows from institutional constraints, observed \
affordances, and psychological priors that shape behavior in this context.";

/// Summary sentence plus the ranked factors behind it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplanationTrace {
    pub summary: String,
    pub factors: Vec<FactorInsight>,
}

impl ExplanationTrace {
    pub fn factor_names(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Build the explanation trace for a predicted outcome.
pub fn generate_explanation(
    snapshot: &EssSnapshot,
    priors: &McmPriors,
    strategic: Option<&StrategicResult>,
    outcome_label: &str,
    depth: ExplanationDepth,
) -> ExplanationTrace {
    let mut named: Vec<(String, FactorCategory)> = Vec::new();
    named.extend(
        snapshot
            .constraints
            .iter()
            .map(|c| (c.clone(), FactorCategory::Constraint)),
    );
    named.extend(
        snapshot
            .affordances
            .iter()
            .map(|a| (a.clone(), FactorCategory::Affordance)),
    );
    named.extend(
        priors
            .tendencies
            .iter()
            .map(|t| (t.clone(), FactorCategory::Tendency)),
    );
    if let Some(result) = strategic {
        named.push((
            format!("strategic action: {}", result.chosen_action.label()),
            FactorCategory::Strategy,
        ));
        named.push((
            format!("institution response: {}", result.institution_response),
            FactorCategory::Institution,
        ));
    }

    let factors = named
        .into_iter()
        .enumerate()
        .map(|(i, (name, category))| FactorInsight::new(name, category, i + 1))
        .collect();

    let body = if depth.is_deep() { DEEP_BODY } else { DEFAULT_BODY };
    let recursion_depth = strategic.map(|r| r.recursion_depth_used).unwrap_or(0);
    let summary = format!(
        "{} {} Strategic recursion depth used: {}.",
        outcome_label, body, recursion_depth
    );

    ExplanationTrace { summary, factors }
}
