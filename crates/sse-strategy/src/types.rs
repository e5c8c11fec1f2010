//! Strategic action catalogue and result types.
//!
//! The action set is closed: five actions, each with a fixed class and
//! fixed signal parameters.
//!
//! | Action                  | Class      | Cost | Scope    | Reversibility | Impact |
//! |-------------------------|------------|------|----------|---------------|--------|
//! | `reactive_response`     | reactive   |  –   |  –       |  –            |  –     |
//! | `reassurance_signal`    | signaling  | 0.28 | targeted | high          | +0.08  |
//! | `public_commitment`     | commitment | 0.62 | public   | low           | +0.15  |
//! | `coalition_proposal`    | coalition  | 0.50 | targeted | medium        | +0.10  |
//! | `strategic_concealment` | deception  | 0.20 | targeted | high          | −0.10  |

use serde::{Deserialize, Serialize};

// ── Action Class ────────────────────────────────────────────────────────

/// Broad category of a strategic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    Reactive,
    Signaling,
    Commitment,
    Coalition,
    Deception,
}

impl ActionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reactive => "reactive",
            Self::Signaling => "signaling",
            Self::Commitment => "commitment",
            Self::Coalition => "coalition",
            Self::Deception => "deception",
        }
    }
}

impl std::fmt::Display for ActionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Signal Profile ──────────────────────────────────────────────────────

/// Who observes a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceScope {
    Targeted,
    Public,
}

/// How easily a signal can be walked back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reversibility {
    High,
    Medium,
    Low,
}

/// Observable properties of a costly signal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalProfile {
    /// In `[0, 1]`.
    pub cost: f64,
    pub audience_scope: AudienceScope,
    pub reversibility: Reversibility,
    /// Signed credibility effect in `[-1, 1]`.
    pub credibility_impact: f64,
}

// ── Strategic Action ────────────────────────────────────────────────────

/// A candidate move evaluated by the strategic layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicAction {
    ReactiveResponse,
    ReassuranceSignal,
    PublicCommitment,
    CoalitionProposal,
    StrategicConcealment,
}

impl StrategicAction {
    pub fn id(&self) -> &'static str {
        match self {
            Self::ReactiveResponse => "reactive_response",
            Self::ReassuranceSignal => "reassurance_signal",
            Self::PublicCommitment => "public_commitment",
            Self::CoalitionProposal => "coalition_proposal",
            Self::StrategicConcealment => "strategic_concealment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReactiveResponse => "Reactive best response",
            Self::ReassuranceSignal => "Issue reassurance signal",
            Self::PublicCommitment => "Make public commitment",
            Self::CoalitionProposal => "Propose coalition coordination",
            Self::StrategicConcealment => "Use strategic concealment",
        }
    }

    pub fn class(&self) -> ActionClass {
        match self {
            Self::ReactiveResponse => ActionClass::Reactive,
            Self::ReassuranceSignal => ActionClass::Signaling,
            Self::PublicCommitment => ActionClass::Commitment,
            Self::CoalitionProposal => ActionClass::Coalition,
            Self::StrategicConcealment => ActionClass::Deception,
        }
    }

    /// Signal parameters; the reactive response sends no signal.
    pub fn signal(&self) -> Option<SignalProfile> {
        let (cost, audience_scope, reversibility, credibility_impact) = match self {
            Self::ReactiveResponse => return None,
            Self::ReassuranceSignal => (0.28, AudienceScope::Targeted, Reversibility::High, 0.08),
            Self::PublicCommitment => (0.62, AudienceScope::Public, Reversibility::Low, 0.15),
            Self::CoalitionProposal => (0.5, AudienceScope::Targeted, Reversibility::Medium, 0.10),
            Self::StrategicConcealment => {
                (0.2, AudienceScope::Targeted, Reversibility::High, -0.10)
            }
        };
        Some(SignalProfile {
            cost,
            audience_scope,
            reversibility,
            credibility_impact,
        })
    }

    pub fn is(&self, class: ActionClass) -> bool {
        self.class() == class
    }
}

impl std::fmt::Display for StrategicAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ── Institution Response ────────────────────────────────────────────────

/// How the relevant institution reacts to a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionResponse {
    PreemptiveConcession,
    SelectiveEnforcement,
    DeterrenceEscalation,
    PublicFraming,
}

impl InstitutionResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreemptiveConcession => "preemptive_concession",
            Self::SelectiveEnforcement => "selective_enforcement",
            Self::DeterrenceEscalation => "deterrence_escalation",
            Self::PublicFraming => "public_framing",
        }
    }

    /// Score bonus the response contributes to the move that provoked it.
    pub fn bonus(&self) -> f64 {
        match self {
            Self::PreemptiveConcession => 0.08,
            Self::SelectiveEnforcement => -0.04,
            Self::DeterrenceEscalation => -0.06,
            Self::PublicFraming => 0.03,
        }
    }
}

impl std::fmt::Display for InstitutionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Strategic Result ────────────────────────────────────────────────────

/// Outcome of one strategic-reasoning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategicResult {
    pub belief_shift_summary: String,
    pub signal_evaluation_summary: String,
    /// In `[0, 1]`, rounded to four decimals.
    pub coalition_likelihood: f64,
    /// In `0..=3`.
    pub recursion_depth_used: u8,
    pub chosen_action: StrategicAction,
    pub institution_response: InstitutionResponse,
    pub cascade_state: bool,
    pub score_adjustment: f64,
}

impl StrategicResult {
    /// Rationale tag recorded on the primary outcome.
    pub fn rationale_tag(&self) -> String {
        let mut tag = format!("strategic:{}", self.chosen_action.id());
        if self.cascade_state {
            tag.push_str(";cascade=true");
        }
        tag
    }
}
