//! Psychological prior synthesis.

use serde::{Deserialize, Serialize};
use sse_semantics::SituationSemantics;
use sse_types::Domain;

/// Behavioral tendencies and scalar traits assumed for the actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McmPriors {
    pub tendencies: Vec<String>,
    /// In `[0, 1]`.
    pub risk_aversion: f64,
    /// In `[0, 1]`.
    pub conformity: f64,
}

struct PriorProfile {
    tendencies: [&'static str; 2],
    risk_aversion: f64,
    conformity: f64,
}

fn domain_profile(domain: Domain) -> PriorProfile {
    match domain {
        Domain::Education => PriorProfile {
            tendencies: ["rule compliance", "anxiety under evaluation"],
            risk_aversion: 0.70,
            conformity: 0.60,
        },
        Domain::Workplace => PriorProfile {
            tendencies: ["career preservation", "status sensitivity"],
            risk_aversion: 0.60,
            conformity: 0.55,
        },
        Domain::Policy => PriorProfile {
            tendencies: ["collective grievance", "cost sensitivity"],
            risk_aversion: 0.40,
            conformity: 0.50,
        },
        Domain::Media => PriorProfile {
            tendencies: ["audience maintenance", "platform skepticism"],
            risk_aversion: 0.45,
            conformity: 0.35,
        },
        Domain::General => PriorProfile {
            tendencies: ["self preservation", "norm alignment"],
            risk_aversion: 0.50,
            conformity: 0.50,
        },
    }
}

/// Synthesize priors for `semantics`.
pub fn synthesize_priors(semantics: &SituationSemantics) -> McmPriors {
    let profile = domain_profile(semantics.domain);
    McmPriors {
        tendencies: profile.tendencies.iter().map(|t| t.to_string()).collect(),
        risk_aversion: profile.risk_aversion,
        conformity: profile.conformity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sse_semantics::parse_situation;

    #[test]
    fn workplace_priors() {
        let p = synthesize_priors(&parse_situation("An employee was denied a promotion."));
        assert_eq!(p.tendencies, vec!["career preservation", "status sensitivity"]);
        assert_eq!(p.risk_aversion, 0.60);
        assert_eq!(p.conformity, 0.55);
    }

    #[test]
    fn trait_constants_per_domain() {
        let expected = [
            (Domain::Education, 0.70, 0.60),
            (Domain::Workplace, 0.60, 0.55),
            (Domain::Policy, 0.40, 0.50),
            (Domain::Media, 0.45, 0.35),
            (Domain::General, 0.50, 0.50),
        ];
        for (domain, risk, conformity) in expected {
            let p = domain_profile(domain);
            assert_eq!(p.risk_aversion, risk, "{domain}");
            assert_eq!(p.conformity, conformity, "{domain}");
            assert!((0.0..=1.0).contains(&p.risk_aversion));
        }
    }
}
