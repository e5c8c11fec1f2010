//! Per-run configuration.

use serde::{Deserialize, Serialize};
use sse_explainer::ExplanationDepth;

/// Options for one prediction run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub depth: ExplanationDepth,
    #[serde(default)]
    pub include_alternatives: bool,
    /// Known example id; selects the catalogued outcome.
    #[serde(default)]
    pub example_id: Option<String>,
    /// Recursion depth override, clamped to `0..=3` at use.
    #[serde(default)]
    pub strategic_depth: Option<i64>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: ExplanationDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_alternatives(mut self, include: bool) -> Self {
        self.include_alternatives = include;
        self
    }

    pub fn with_example(mut self, example_id: impl Into<String>) -> Self {
        self.example_id = Some(example_id.into());
        self
    }

    pub fn with_strategic_depth(mut self, depth: i64) -> Self {
        self.strategic_depth = Some(depth);
        self
    }
}
