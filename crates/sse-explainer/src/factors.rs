//! Factor insights and their categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a factor came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Constraint,
    Affordance,
    Tendency,
    Strategy,
    Institution,
}

impl FactorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constraint => "constraint",
            Self::Affordance => "affordance",
            Self::Tendency => "tendency",
            Self::Strategy => "strategy",
            Self::Institution => "institution",
        }
    }

    /// Fixed role description for factors of this category.
    pub fn role(&self) -> &'static str {
        match self {
            Self::Constraint => "Limits which responses are acceptable or safe in this setting.",
            Self::Affordance => "Opens a response path the actor can plausibly take.",
            Self::Tendency => "Psychological prior that biases how the actor weighs options.",
            Self::Strategy => {
                "Move favored after modeling how other parties read the actor's signals."
            }
            Self::Institution => "Expected institutional reaction that shapes the payoff of each move.",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named factor in an explanation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorInsight {
    pub name: String,
    pub role: String,
    pub category: FactorCategory,
    /// 1-based position in the trace.
    pub rank: usize,
}

impl FactorInsight {
    pub fn new(name: impl Into<String>, category: FactorCategory, rank: usize) -> Self {
        Self {
            name: name.into(),
            role: category.role().to_string(),
            category,
            rank,
        }
    }
}
