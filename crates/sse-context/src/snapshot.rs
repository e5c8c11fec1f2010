//! Environment snapshot builder.

use serde::{Deserialize, Serialize};
use sse_semantics::SituationSemantics;
use sse_types::Domain;

/// Environmental and social context of a situation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EssSnapshot {
    pub constraints: Vec<String>,
    pub affordances: Vec<String>,
    /// Copied from the semantics.
    pub institutions: Vec<String>,
}

/// `(constraint, affordance)` for a domain.
fn domain_environment(domain: Domain) -> (&'static str, &'static str) {
    match domain {
        Domain::Education => ("exam integrity policy", "temporary invigilator absence"),
        Domain::Workplace => ("performance review process", "job market mobility"),
        Domain::Policy => ("tax enforcement", "public protest channels"),
        Domain::Media => ("platform ranking rules", "creator migration"),
        Domain::General => ("social norms", "individual discretion"),
    }
}

/// Build the environment snapshot for `semantics`.
pub fn build_snapshot(semantics: &SituationSemantics) -> EssSnapshot {
    let (constraint, affordance) = domain_environment(semantics.domain);
    EssSnapshot {
        constraints: vec![constraint.to_string()],
        affordances: vec![affordance.to_string()],
        institutions: semantics.institutions.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sse_semantics::parse_situation;

    #[test]
    fn education_snapshot() {
        let s = parse_situation("A student considers whether to cheat on the exam.");
        let snap = build_snapshot(&s);
        assert_eq!(snap.constraints, vec!["exam integrity policy"]);
        assert_eq!(snap.affordances, vec!["temporary invigilator absence"]);
        assert_eq!(snap.institutions, vec!["exam"]);
    }

    #[test]
    fn every_domain_has_one_constraint_and_affordance() {
        for domain in Domain::ALL {
            let (c, a) = domain_environment(domain);
            assert!(!c.is_empty());
            assert!(!a.is_empty());
        }
    }

    #[test]
    fn general_fallback() {
        let snap = build_snapshot(&parse_situation("Someone waits for a bus."));
        assert_eq!(snap.constraints, vec!["social norms"]);
        assert_eq!(snap.affordances, vec!["individual discretion"]);
        assert!(snap.institutions.is_empty());
    }
}
