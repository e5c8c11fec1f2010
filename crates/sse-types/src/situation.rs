//! Classification vocabulary: interaction mode, situational domain, and
//! outcome horizon.

use serde::{Deserialize, Serialize};

// ── Mode ────────────────────────────────────────────────────────────────

/// Coarse interaction-scale classification of a situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// Individual or internal deliberation.
    A,
    /// Interpersonal, usually dyadic.
    B,
    /// Collective or institutional.
    C,
}

impl Mode {
    /// Single-letter tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Whether other parties can coordinate with the actor in this mode.
    pub fn allows_coalition(&self) -> bool {
        matches!(self, Self::B | Self::C)
    }

    /// Outcome horizon implied by the interaction scale.
    pub fn horizon(&self) -> Horizon {
        match self {
            Self::C => Horizon::Weeks,
            Self::B => Horizon::Days,
            Self::A => Horizon::Hours,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Domain ──────────────────────────────────────────────────────────────

/// Situational topic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Education,
    Workplace,
    Policy,
    Media,
    General,
}

impl Domain {
    /// Every domain, in classification priority order.
    pub const ALL: [Domain; 5] = [
        Domain::Education,
        Domain::Workplace,
        Domain::Policy,
        Domain::Media,
        Domain::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Workplace => "workplace",
            Self::Policy => "policy",
            Self::Media => "media",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Horizon ─────────────────────────────────────────────────────────────

/// How soon the predicted outcome is expected to materialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Hours,
    Days,
    Weeks,
}

impl Horizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_follows_mode() {
        assert_eq!(Mode::A.horizon(), Horizon::Hours);
        assert_eq!(Mode::B.horizon(), Horizon::Days);
        assert_eq!(Mode::C.horizon(), Horizon::Weeks);
    }

    #[test]
    fn coalition_only_beyond_individual() {
        assert!(!Mode::A.allows_coalition());
        assert!(Mode::B.allows_coalition());
        assert!(Mode::C.allows_coalition());
    }

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&Mode::C).unwrap(), "\"C\"");
        assert_eq!(serde_json::to_string(&Domain::Workplace).unwrap(), "\"workplace\"");
        assert_eq!(serde_json::to_string(&Horizon::Weeks).unwrap(), "\"weeks\"");
        let domain: Domain = serde_json::from_str("\"media\"").unwrap();
        assert_eq!(domain, Domain::Media);
    }
}
