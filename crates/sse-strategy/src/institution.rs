//! Institution agent model and response selection.

use serde::{Deserialize, Serialize};
use sse_types::Mode;

use crate::types::{ActionClass, InstitutionResponse, StrategicAction};

/// Behavioral parameters of the institution overseeing a situation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstitutionAgent {
    pub enforcement_capacity: f64,
    pub legitimacy_threshold: f64,
    pub strategic_tolerance: f64,
    pub policy_flexibility: f64,
}

impl InstitutionAgent {
    /// Fixed parameters per interaction mode.
    pub fn for_mode(mode: Mode) -> Self {
        let (enforcement_capacity, legitimacy_threshold, strategic_tolerance, policy_flexibility) =
            match mode {
                Mode::C => (0.78, 0.46, 0.42, 0.48),
                Mode::B => (0.58, 0.50, 0.55, 0.58),
                Mode::A => (0.45, 0.55, 0.62, 0.65),
            };
        Self {
            enforcement_capacity,
            legitimacy_threshold,
            strategic_tolerance,
            policy_flexibility,
        }
    }

    /// Response to `action` given the actor's legitimacy. First matching
    /// rule wins:
    ///
    /// 1. legitimacy below threshold with a flexible policy → concession
    /// 2. deception → selective enforcement
    /// 3. conflict with strong enforcement → deterrence
    /// 4. otherwise → public framing
    pub fn respond(
        &self,
        action: StrategicAction,
        legitimacy: f64,
        conflict: bool,
    ) -> InstitutionResponse {
        if legitimacy < self.legitimacy_threshold && self.policy_flexibility > 0.45 {
            InstitutionResponse::PreemptiveConcession
        } else if action.is(ActionClass::Deception) {
            InstitutionResponse::SelectiveEnforcement
        } else if conflict && self.enforcement_capacity > 0.55 {
            InstitutionResponse::DeterrenceEscalation
        } else {
            InstitutionResponse::PublicFraming
        }
    }
}
