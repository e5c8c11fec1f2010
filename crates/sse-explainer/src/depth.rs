//! Explanation depth setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sse_types::SseError;

/// How much detail the explanation carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationDepth {
    #[default]
    Default,
    Deep,
}

impl ExplanationDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Deep => "deep",
        }
    }

    pub fn is_deep(&self) -> bool {
        matches!(self, Self::Deep)
    }
}

impl fmt::Display for ExplanationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExplanationDepth {
    type Err = SseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "deep" => Ok(Self::Deep),
            other => Err(SseError::InvalidConfig(format!(
                "unknown explanation depth '{}' (expected 'default' or 'deep')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_depth() {
        assert_eq!("deep".parse::<ExplanationDepth>().unwrap(), ExplanationDepth::Deep);
        assert_eq!(" Default ".parse::<ExplanationDepth>().unwrap(), ExplanationDepth::Default);
        let err = "verbose".parse::<ExplanationDepth>().unwrap_err();
        assert!(matches!(err, SseError::InvalidConfig(_)));
    }

    #[test]
    fn serde_snake_case() {
        assert_eq!(serde_json::to_string(&ExplanationDepth::Deep).unwrap(), "\"deep\"");
        let d: ExplanationDepth = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(d, ExplanationDepth::Default);
    }
}
