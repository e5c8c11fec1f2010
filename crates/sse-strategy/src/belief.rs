//! Belief state over the other parties in a situation.
//!
//! Beliefs are values: applying a signal returns a fresh [`BeliefState`]
//! and leaves the original untouched, so each candidate action is scored
//! against the same starting beliefs.

use serde::{Deserialize, Serialize};
use sse_context::{EssSnapshot, McmPriors};
use sse_semantics::SituationSemantics;
use sse_types::{clamp01, mean};

use crate::types::{ActionClass, StrategicAction};

/// Placeholder target used when the text names fewer than two parties.
pub const COUNTERPARTY: &str = "counterparty";

/// Minimum number of modeled targets.
const MIN_TARGETS: usize = 2;

/// Beliefs held about a single other party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetBelief {
    pub target: String,
    /// Perceived hostile or opposing intent in `[0, 1]`.
    pub perceived_intent: f64,
    /// Credibility the actor enjoys with this target, in `[0, 1]`.
    pub credibility: f64,
    pub perceived_constraints: Vec<String>,
}

/// Per-target beliefs for one strategic evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeliefState {
    pub targets: Vec<TargetBelief>,
}

/// Mean change between two belief states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeliefShift {
    pub mean_intent_delta: f64,
    pub mean_credibility_delta: f64,
}

impl BeliefState {
    /// Initial beliefs for a situation.
    ///
    /// Intent starts at 0.62 under conflict and 0.42 otherwise; credibility
    /// starts at `0.45 + 0.3·conformity`, less 0.05 under conflict. Both
    /// are uniform across targets.
    pub fn initialize(
        semantics: &SituationSemantics,
        snapshot: &EssSnapshot,
        priors: &McmPriors,
    ) -> Self {
        let base_intent = if semantics.conflict { 0.62 } else { 0.42 };
        let conflict_penalty = if semantics.conflict { 0.05 } else { 0.0 };
        let base_credibility = clamp01(0.45 + priors.conformity * 0.3 - conflict_penalty);

        let targets = build_targets(semantics, snapshot)
            .into_iter()
            .map(|target| TargetBelief {
                target,
                perceived_intent: base_intent,
                credibility: base_credibility,
                perceived_constraints: snapshot.constraints.clone(),
            })
            .collect();

        Self { targets }
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.target.as_str()).collect()
    }

    /// Mean perceived intent, or 0 for an empty state.
    pub fn mean_intent(&self) -> f64 {
        mean(self.targets.iter().map(|t| t.perceived_intent)).unwrap_or(0.0)
    }

    /// Mean credibility, or 0 for an empty state.
    pub fn mean_credibility(&self) -> f64 {
        mean(self.targets.iter().map(|t| t.credibility)).unwrap_or(0.0)
    }

    /// Beliefs after every target observes `action` with the given
    /// signal consistency.
    ///
    /// Intent follows an odds update; credibility moves by the signal's
    /// impact plus cost and consistency terms, with a flat penalty for
    /// deception.
    pub fn observe(&self, action: StrategicAction, consistency: f64) -> BeliefState {
        let credibility_delta = credibility_delta(action, consistency);
        let targets = self
            .targets
            .iter()
            .map(|t| TargetBelief {
                target: t.target.clone(),
                perceived_intent: bayes_like_update(t.perceived_intent, consistency),
                credibility: clamp01(t.credibility + credibility_delta),
                perceived_constraints: t.perceived_constraints.clone(),
            })
            .collect();
        BeliefState { targets }
    }

    /// Mean per-target change from `self` to `updated`.
    pub fn shift_to(&self, updated: &BeliefState) -> BeliefShift {
        let pairs = || self.targets.iter().zip(updated.targets.iter());
        BeliefShift {
            mean_intent_delta: mean(pairs().map(|(a, b)| b.perceived_intent - a.perceived_intent))
                .unwrap_or(0.0),
            mean_credibility_delta: mean(pairs().map(|(a, b)| b.credibility - a.credibility))
                .unwrap_or(0.0),
        }
    }
}

/// Deduplicated actors then institutions, padded to at least two targets.
fn build_targets(semantics: &SituationSemantics, snapshot: &EssSnapshot) -> Vec<String> {
    let mut targets: Vec<String> = Vec::new();
    for tag in semantics.actors.iter().chain(snapshot.institutions.iter()) {
        if !targets.contains(tag) {
            targets.push(tag.clone());
        }
    }
    while targets.len() < MIN_TARGETS {
        if targets.iter().any(|t| t == COUNTERPARTY) {
            targets.push(format!("{}_{}", COUNTERPARTY, targets.len()));
        } else {
            targets.push(COUNTERPARTY.to_string());
        }
    }
    targets
}

/// Odds-style posterior of `prior` given evidence of strength `consistency`.
pub fn bayes_like_update(prior: f64, consistency: f64) -> f64 {
    let numerator = prior * consistency;
    let denominator = numerator + (1.0 - prior) * (1.0 - consistency);
    if denominator == 0.0 {
        return prior;
    }
    clamp01(numerator / denominator)
}

/// Credibility change a target attributes to `action`.
pub fn credibility_delta(action: StrategicAction, consistency: f64) -> f64 {
    let mut delta = match action.signal() {
        Some(signal) => signal.credibility_impact + 0.1 * signal.cost + 0.1 * (consistency - 0.5),
        None => 0.0,
    };
    if action.is(ActionClass::Deception) {
        delta -= 0.2;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use sse_context::{build_snapshot, synthesize_priors};
    use sse_semantics::parse_situation;

    fn beliefs_for(text: &str) -> BeliefState {
        let s = parse_situation(text);
        BeliefState::initialize(&s, &build_snapshot(&s), &synthesize_priors(&s))
    }

    #[test]
    fn pads_with_counterparty() {
        let b = beliefs_for("Someone finds a wallet.");
        assert_eq!(b.target_names(), vec!["counterparty", "counterparty_1"]);

        let b = beliefs_for("A student thinks quietly.");
        assert_eq!(b.target_names(), vec!["student", "counterparty"]);
    }

    #[test]
    fn shared_tag_counts_once() {
        let b = beliefs_for("The government acts.");
        assert_eq!(b.target_names(), vec!["government", "counterparty"]);
    }

    #[test]
    fn union_of_actors_and_institutions() {
        let b = beliefs_for("An employee confronts their manager about unpaid overtime with HR.");
        assert_eq!(b.target_names(), vec!["employee", "manager", "hr"]);
    }

    #[test]
    fn initial_values_under_conflict() {
        let b = beliefs_for("An employee was denied a promotion.");
        for t in &b.targets {
            assert_eq!(t.perceived_intent, 0.62);
            // 0.45 + 0.55 * 0.3 - 0.05
            assert!((t.credibility - 0.565).abs() < 1e-12);
            assert_eq!(t.perceived_constraints, vec!["performance review process"]);
        }
    }

    #[test]
    fn initial_values_without_conflict() {
        let b = beliefs_for("A student prepares for an exam.");
        assert_eq!(b.mean_intent(), 0.42);
        assert!((b.mean_credibility() - 0.63).abs() < 1e-12);
    }

    #[test]
    fn observe_returns_fresh_state() {
        let b = beliefs_for("An employee confronts their manager.");
        let before = b.clone();
        let updated = b.observe(StrategicAction::PublicCommitment, 0.8);
        assert_eq!(b, before);
        assert!(updated.mean_intent() > b.mean_intent());
        assert!(updated.mean_credibility() > b.mean_credibility());
        let shift = b.shift_to(&updated);
        assert!(shift.mean_intent_delta > 0.0);
        assert!(shift.mean_credibility_delta > 0.0);
    }

    #[test]
    fn bayes_update_properties() {
        assert_eq!(bayes_like_update(0.5, 0.5), 0.5);
        assert!((bayes_like_update(0.42, 0.55) - 0.4695).abs() < 1e-3);
        assert_eq!(bayes_like_update(0.0, 1.0), 0.0);
        // degenerate evidence falls back to the prior
        assert_eq!(bayes_like_update(1.0, 0.0), 1.0);
    }

    #[test]
    fn deception_costs_credibility() {
        let delta = credibility_delta(StrategicAction::StrategicConcealment, 0.304);
        // -0.10 + 0.02 + 0.1 * (0.304 - 0.5) - 0.2
        assert!((delta - (-0.2996)).abs() < 1e-9);
        assert_eq!(credibility_delta(StrategicAction::ReactiveResponse, 0.55), 0.0);
    }
}
