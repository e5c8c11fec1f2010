//! Per-action evaluation: belief update, opponent pressure, coalition,
//! legitimacy, institutional response, and the composite score.

use sse_context::{EssSnapshot, McmPriors};
use sse_semantics::SituationSemantics;
use sse_types::clamp01;

use crate::belief::{BeliefShift, BeliefState};
use crate::coalition::{baseline_coalition, deception_detection_risk};
use crate::institution::InstitutionAgent;
use crate::recursion::recursive_pressure;
use crate::types::{ActionClass, InstitutionResponse, StrategicAction};

/// Legitimacy below this level triggers a cascade.
const CASCADE_LEGITIMACY_FLOOR: f64 = 0.42;
/// Coordination above this level triggers a cascade.
const CASCADE_COORDINATION_CEILING: f64 = 0.78;
/// Concealment is only considered above this baseline credibility...
const DECEPTION_MIN_CREDIBILITY: f64 = 0.5;
/// ...and below this detection risk.
const DECEPTION_MAX_DETECTION_RISK: f64 = 0.55;

// ── Weights ─────────────────────────────────────────────────────────────

/// Weights for composing the action score.
#[derive(Clone, Debug)]
pub struct NormativeWeights {
    pub value_satisfaction: f64,
    pub emotional_stability: f64,
    pub survival_security: f64,
    pub reputational_impact: f64,
    /// Applied to coalition gain over the baseline.
    pub coalition_gain: f64,
    /// Subtracted when the action cascades.
    pub cascade_penalty: f64,
}

impl Default for NormativeWeights {
    fn default() -> Self {
        Self {
            value_satisfaction: 0.30,
            emotional_stability: 0.24,
            survival_security: 0.26,
            reputational_impact: 0.20,
            coalition_gain: 0.14,
            cascade_penalty: 0.08,
        }
    }
}

/// The four normative sub-scores, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormativeScores {
    pub value_satisfaction: f64,
    pub emotional_stability: f64,
    pub survival_security: f64,
    pub reputational_impact: f64,
}

// ── Evaluation ──────────────────────────────────────────────────────────

/// Everything computed while scoring one candidate action.
#[derive(Clone, Debug)]
pub struct ActionEvaluation {
    pub action: StrategicAction,
    pub consistency: f64,
    /// Beliefs after the action; the baseline beliefs are unchanged.
    pub beliefs: BeliefState,
    pub shift: BeliefShift,
    pub opponent_pressure: f64,
    pub coalition: f64,
    pub legitimacy: f64,
    pub institution_response: InstitutionResponse,
    pub cascade: bool,
    pub normative: NormativeScores,
    pub score: f64,
}

// ── Strategic Context ───────────────────────────────────────────────────

/// Baseline quantities shared by every candidate evaluation in one run.
pub struct StrategicContext<'a> {
    semantics: &'a SituationSemantics,
    priors: &'a McmPriors,
    depth: u8,
    institution: InstitutionAgent,
    baseline_beliefs: BeliefState,
    baseline_coalition: f64,
    detection_risk: f64,
}

impl<'a> StrategicContext<'a> {
    pub fn new(
        semantics: &'a SituationSemantics,
        snapshot: &'a EssSnapshot,
        priors: &'a McmPriors,
        depth: u8,
    ) -> Self {
        let baseline_beliefs = BeliefState::initialize(semantics, snapshot, priors);
        let baseline_coalition =
            baseline_coalition(semantics, priors, baseline_beliefs.mean_credibility());
        Self {
            semantics,
            priors,
            depth,
            institution: InstitutionAgent::for_mode(semantics.mode),
            baseline_beliefs,
            baseline_coalition,
            detection_risk: deception_detection_risk(semantics, snapshot),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn baseline_beliefs(&self) -> &BeliefState {
        &self.baseline_beliefs
    }

    pub fn baseline_coalition(&self) -> f64 {
        self.baseline_coalition
    }

    pub fn detection_risk(&self) -> f64 {
        self.detection_risk
    }

    /// Candidate actions in evaluation order.
    ///
    /// The order matters: the best action only changes on a strictly
    /// higher score, so earlier candidates win ties.
    pub fn candidate_actions(&self) -> Vec<StrategicAction> {
        let mut actions = vec![
            StrategicAction::ReactiveResponse,
            StrategicAction::ReassuranceSignal,
            StrategicAction::PublicCommitment,
        ];
        if self.semantics.mode.allows_coalition() {
            actions.push(StrategicAction::CoalitionProposal);
        }
        if self.baseline_beliefs.mean_credibility() > DECEPTION_MIN_CREDIBILITY
            && self.detection_risk < DECEPTION_MAX_DETECTION_RISK
        {
            actions.push(StrategicAction::StrategicConcealment);
        }
        actions
    }

    /// Score one candidate action against the baseline beliefs.
    pub fn evaluate(&self, action: StrategicAction, weights: &NormativeWeights) -> ActionEvaluation {
        let class = action.class();
        let conflict = self.semantics.conflict;

        let consistency = signal_consistency(action);
        let beliefs = self.baseline_beliefs.observe(action, consistency);
        let shift = self.baseline_beliefs.shift_to(&beliefs);
        let mean_credibility = beliefs.mean_credibility();
        let opponent_pressure = recursive_pressure(self.depth, clamp01(beliefs.mean_intent()));

        let mut coalition = baseline_coalition(self.semantics, self.priors, mean_credibility);
        match class {
            ActionClass::Coalition => coalition = clamp01(coalition + 0.14),
            ActionClass::Deception => coalition = clamp01(coalition - 0.1),
            _ => {}
        }

        let mut legitimacy = clamp01(mean_credibility - if conflict { 0.18 } else { 0.0 });
        match class {
            ActionClass::Commitment => legitimacy = clamp01(legitimacy + 0.08),
            ActionClass::Deception => legitimacy = clamp01(legitimacy - 0.15),
            _ => {}
        }

        let institution_response = self.institution.respond(action, legitimacy, conflict);

        let cascade = cascades(class, legitimacy, coalition);

        let normative = self.normative_scores(class, opponent_pressure, mean_credibility);

        let score = weights.value_satisfaction * normative.value_satisfaction
            + weights.emotional_stability * normative.emotional_stability
            + weights.survival_security * normative.survival_security
            + weights.reputational_impact * normative.reputational_impact
            + weights.coalition_gain * (coalition - self.baseline_coalition)
            + institution_response.bonus()
            - if cascade { weights.cascade_penalty } else { 0.0 };

        ActionEvaluation {
            action,
            consistency,
            beliefs,
            shift,
            opponent_pressure,
            coalition,
            legitimacy,
            institution_response,
            cascade,
            normative,
            score,
        }
    }

    fn normative_scores(
        &self,
        class: ActionClass,
        opponent_pressure: f64,
        mean_credibility: f64,
    ) -> NormativeScores {
        let risk_aversion = self.priors.risk_aversion;
        let commitment = class == ActionClass::Commitment;

        let value_bonus = if commitment { 0.10 } else { 0.04 };
        let value_satisfaction = clamp01(0.42 + 0.33 * (1.0 - opponent_pressure) + value_bonus);

        let conflict_strain = if self.semantics.conflict { 0.22 } else { 0.0 };
        let signaling_relief = if class == ActionClass::Signaling { 0.08 } else { 0.0 };
        let emotional_stability =
            clamp01(0.36 + 0.36 * risk_aversion - conflict_strain + signaling_relief);

        let commitment_security = if commitment { 0.10 } else { 0.0 };
        let deception_exposure = if class == ActionClass::Deception { 0.18 } else { 0.0 };
        let survival_security =
            clamp01(0.35 + 0.45 * risk_aversion + commitment_security - deception_exposure);

        NormativeScores {
            value_satisfaction,
            emotional_stability,
            survival_security,
            reputational_impact: mean_credibility,
        }
    }
}

/// Whether an action tips the situation into a cascade: legitimacy falls
/// below the floor, or coordination (coalition, plus 0.1 for a coalition
/// proposal) exceeds the ceiling.
pub fn cascades(class: ActionClass, legitimacy: f64, coalition: f64) -> bool {
    let coordination_level = coalition + if class == ActionClass::Coalition { 0.1 } else { 0.0 };
    legitimacy < CASCADE_LEGITIMACY_FLOOR || coordination_level > CASCADE_COORDINATION_CEILING
}

/// How consistent a signal looks with the actor's claimed intent.
///
/// Costlier signals are more believable; commitments add, deception
/// subtracts. The reactive response has a fixed 0.55.
pub fn signal_consistency(action: StrategicAction) -> f64 {
    let Some(signal) = action.signal() else {
        return 0.55;
    };
    let mut consistency = 0.5 + signal.cost * 0.22;
    match action.class() {
        ActionClass::Commitment => consistency += 0.16,
        ActionClass::Deception => consistency -= 0.24,
        _ => {}
    }
    sse_types::clamp(consistency, 0.05, 0.95)
}
