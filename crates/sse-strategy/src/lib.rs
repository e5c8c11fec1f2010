//! # sse-strategy
//!
//! Strategic reasoning layer of the prediction pipeline.
//!
//! Given the semantics, environment snapshot, and priors of a situation,
//! the layer models how the other parties read the actor's moves and picks
//! the move that scores best:
//!
//! 1. choose a recursion depth for opponent modeling (0–3)
//! 2. initialise beliefs about every other party (at least two)
//! 3. derive the institution agent, baseline coalition likelihood, and
//!    deception detection risk
//! 4. evaluate each candidate action: Bayes-like intent update,
//!    credibility shift, recursive opponent pressure, coalition,
//!    legitimacy, institutional response, cascade risk, composite score
//! 5. keep the best (strict `>`; earlier candidates win ties)
//!
//! Every run is self-contained; beliefs never outlive a call.

#![deny(unsafe_code)]

pub mod belief;
pub mod coalition;
pub mod engine;
pub mod evaluator;
pub mod institution;
pub mod recursion;
pub mod types;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use belief::{BeliefShift, BeliefState, TargetBelief, COUNTERPARTY};
pub use engine::{run_strategic_reasoning, StrategicReasoner};
pub use evaluator::{ActionEvaluation, NormativeScores, NormativeWeights, StrategicContext};
pub use institution::InstitutionAgent;
pub use recursion::{infer_recursion_depth, recursive_pressure};
pub use types::{
    ActionClass, AudienceScope, InstitutionResponse, Reversibility, SignalProfile,
    StrategicAction, StrategicResult,
};
