//! # sse-runtime
//!
//! Orchestrates one prediction run end to end:
//!
//! ```text
//! text ─▶ semantics ─▶ snapshot ─▶ priors ─▶ outcomes (+ strategy) ─▶ explanation
//!                                                                        │
//!                          horizon from mode ◀───────────────────────────┘
//!                                   │
//!                                   ▼
//!                       PredictionResult (validated)
//! ```
//!
//! Every run is synchronous and self-contained. Nothing is cached between
//! calls, so the same text and [`RunConfig`] always give the same result and
//! a single [`Predictor`] can be shared across threads.

#![deny(unsafe_code)]

pub mod compare;
pub mod config;
pub mod demo;
pub mod orchestrator;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use compare::{compare, compare_traces, ComparisonReport, PredictionComparison};
pub use config::RunConfig;
pub use demo::{example, examples, DemoExample};
pub use orchestrator::{predict, predict_with_trace, Predictor};

pub use sse_explainer::{ExplanationDepth, ExplanationTrace, FactorCategory, FactorInsight};
pub use sse_types::{Domain, Horizon, Mode, Outcome, PredictionResult, SseError, SseResult};
