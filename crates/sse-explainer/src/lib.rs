//! # sse-explainer
//!
//! Turns the environment snapshot, psychological priors, and strategic
//! verdict of a prediction into an [`ExplanationTrace`]: a ranked list of
//! named factors, each with a role description, and a summary sentence.
//!
//! Factor order is constraints, affordances, tendencies, then the strategic
//! action and institution response when a strategic result is supplied.

#![deny(unsafe_code)]

pub mod depth;
pub mod factors;
pub mod trace;

pub use depth::ExplanationDepth;
pub use factors::{FactorCategory, FactorInsight};
pub use trace::{generate_explanation, ExplanationTrace};
