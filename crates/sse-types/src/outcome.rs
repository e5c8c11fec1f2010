//! Outcome and prediction-result contracts.

use serde::{Deserialize, Serialize};

use crate::error::{SseError, SseResult};
use crate::situation::{Horizon, Mode};

/// Highest recursion depth the strategic layer will model.
pub const MAX_RECURSION_DEPTH: u8 = 3;

// ── Outcome ─────────────────────────────────────────────────────────────

/// A labelled behavioral outcome with its confidence and rationale tags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: String,
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Ordered rationale tags.
    #[serde(default)]
    pub rationale: Vec<String>,
}

impl Outcome {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        confidence: f64,
        rationale: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            confidence,
            rationale: rationale.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Copy of this outcome with a different confidence.
    pub fn with_confidence(&self, confidence: f64) -> Self {
        Self {
            confidence,
            ..self.clone()
        }
    }

    fn check(&self, role: &str) -> SseResult<()> {
        if self.id.trim().is_empty() {
            return Err(SseError::Validation(format!("{} outcome id is required", role)));
        }
        if self.label.trim().is_empty() {
            return Err(SseError::Validation(format!(
                "{} outcome '{}' has no label",
                role, self.id
            )));
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(SseError::Validation(format!(
                "{} outcome '{}' confidence {} outside [0, 1]",
                role, self.id, self.confidence
            )));
        }
        Ok(())
    }
}

// ── Prediction Result ───────────────────────────────────────────────────

/// End product of one prediction run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_outcome: Outcome,
    pub explanation: String,
    pub horizon: Horizon,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Outcome>,
    pub belief_shift_summary: String,
    pub signal_evaluation_summary: String,
    pub coalition_likelihood: f64,
    pub recursion_depth_used: u8,
}

impl PredictionResult {
    /// Check the result's invariants.
    ///
    /// Validation only reads the result; validating twice yields the same
    /// verdict on an unchanged value.
    pub fn validate(&self) -> SseResult<()> {
        self.predicted_outcome.check("predicted")?;
        if self.explanation.trim().is_empty() {
            return Err(SseError::Validation("explanation is required".into()));
        }
        for alternative in &self.alternatives {
            alternative.check("alternative")?;
        }
        if !self.coalition_likelihood.is_finite()
            || !(0.0..=1.0).contains(&self.coalition_likelihood)
        {
            return Err(SseError::Validation(format!(
                "coalition likelihood {} outside [0, 1]",
                self.coalition_likelihood
            )));
        }
        if self.recursion_depth_used > MAX_RECURSION_DEPTH {
            return Err(SseError::Validation(format!(
                "recursion depth {} exceeds {}",
                self.recursion_depth_used, MAX_RECURSION_DEPTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionResult {
        PredictionResult {
            predicted_outcome: Outcome::new(
                "cautious_compliance",
                "The actor proceeds cautiously while staying within norms.",
                0.55,
                &["risk aversion"],
            ),
            explanation: "The actor proceeds cautiously.".into(),
            horizon: Horizon::Hours,
            mode: Mode::A,
            alternatives: vec![],
            belief_shift_summary: "shift".into(),
            signal_evaluation_summary: "signal".into(),
            coalition_likelihood: 0.4,
            recursion_depth_used: 0,
        }
    }

    #[test]
    fn valid_result_passes_twice() {
        let result = sample();
        let before = result.clone();
        assert!(result.validate().is_ok());
        assert!(result.validate().is_ok());
        assert_eq!(result, before);
    }

    #[test]
    fn empty_explanation_rejected() {
        let mut result = sample();
        result.explanation = "   ".into();
        let err = result.validate().unwrap_err();
        assert!(matches!(err, SseError::Validation(_)));
    }

    #[test]
    fn missing_outcome_id_rejected() {
        let mut result = sample();
        result.predicted_outcome.id.clear();
        assert!(result.validate().is_err());
    }

    #[test]
    fn out_of_range_values_rejected() {
        let mut result = sample();
        result.predicted_outcome.confidence = 1.2;
        assert!(result.validate().is_err());

        let mut result = sample();
        result.coalition_likelihood = f64::NAN;
        assert!(result.validate().is_err());

        let mut result = sample();
        result.recursion_depth_used = 4;
        assert!(result.validate().is_err());
    }

    #[test]
    fn alternatives_omitted_from_wire_when_empty() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("alternatives").is_none());
        assert_eq!(json["mode"], "A");
        assert_eq!(json["horizon"], "hours");

        let mut result = sample();
        result.alternatives.push(Outcome::new("status_quo", "No change.", 0.3, &["inertia"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["alternatives"][0]["id"], "status_quo");
    }
}
