//! Domain-keyed default outcomes and alternatives.

use sse_context::McmPriors;
use sse_types::{Domain, Outcome};

/// Default primary outcome for a domain.
///
/// Confidence is a domain base plus a linear term in one trait:
///
/// | Domain    | Confidence                  |
/// |-----------|-----------------------------|
/// | education | 0.60 + 0.2·risk_aversion    |
/// | workplace | 0.58 + 0.2·risk_aversion    |
/// | policy    | 0.55 + 0.2·(1−risk_aversion)|
/// | media     | 0.54 + 0.2·(1−conformity)   |
/// | general   | 0.55                        |
pub fn default_outcome(domain: Domain, priors: &McmPriors) -> Outcome {
    match domain {
        Domain::Education => Outcome::new(
            "no_cheat_internal_conflict",
            "The student does not cheat but experiences internal conflict.",
            0.6 + priors.risk_aversion * 0.2,
            &["risk aversion", "norm compliance"],
        ),
        Domain::Workplace => Outcome::new(
            "quiet_job_search",
            "The employee quietly searches for another job while maintaining performance.",
            0.58 + priors.risk_aversion * 0.2,
            &["career preservation", "avoid open conflict"],
        ),
        Domain::Policy => Outcome::new(
            "dissatisfaction_protest",
            "Widespread dissatisfaction and short-term protest activity among affected groups.",
            0.55 + (1.0 - priors.risk_aversion) * 0.2,
            &["collective grievance", "cost shock"],
        ),
        Domain::Media => Outcome::new(
            "creator_migration_criticism",
            "Gradual creator migration and increased public criticism of the platform.",
            0.54 + (1.0 - priors.conformity) * 0.2,
            &["platform skepticism", "audience maintenance"],
        ),
        Domain::General => Outcome::new(
            "cautious_compliance",
            "The actor proceeds cautiously while staying within norms.",
            0.55,
            &["risk aversion", "norm alignment"],
        ),
    }
}

/// The alternative outcome considered for a domain.
pub fn default_alternatives(domain: Domain) -> Vec<Outcome> {
    let alternative = match domain {
        Domain::Education => Outcome::new(
            "cheat_short_term",
            "The student cheats, gains a short-term advantage, but risks consequences.",
            0.28,
            &["opportunity", "short-term gain"],
        ),
        Domain::Workplace => Outcome::new(
            "direct_confrontation",
            "The employee confronts management directly, escalating tension.",
            0.3,
            &["frustration", "perceived unfairness"],
        ),
        Domain::Policy => Outcome::new(
            "quiet_acceptance",
            "Most people accept the change without organized protest.",
            0.3,
            &["adaptation", "cost absorption"],
        ),
        Domain::Media => Outcome::new(
            "platform_adaptation",
            "Creators adapt content strategy to the new algorithm.",
            0.32,
            &["audience retention", "platform dependence"],
        ),
        Domain::General => Outcome::new(
            "status_quo",
            "No meaningful change occurs in the short term.",
            0.3,
            &["inertia"],
        ),
    };
    vec![alternative]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priors(risk_aversion: f64, conformity: f64) -> McmPriors {
        McmPriors {
            tendencies: vec![],
            risk_aversion,
            conformity,
        }
    }

    #[test]
    fn confidence_formulas() {
        let p = priors(0.7, 0.6);
        assert!((default_outcome(Domain::Education, &p).confidence - 0.74).abs() < 1e-12);
        let p = priors(0.6, 0.55);
        assert!((default_outcome(Domain::Workplace, &p).confidence - 0.70).abs() < 1e-12);
        let p = priors(0.4, 0.5);
        assert!((default_outcome(Domain::Policy, &p).confidence - 0.67).abs() < 1e-12);
        let p = priors(0.45, 0.35);
        assert!((default_outcome(Domain::Media, &p).confidence - 0.67).abs() < 1e-12);
        assert_eq!(default_outcome(Domain::General, &p).confidence, 0.55);
    }

    #[test]
    fn every_domain_has_an_alternative() {
        for domain in Domain::ALL {
            let alts = default_alternatives(domain);
            assert_eq!(alts.len(), 1);
            assert_ne!(alts[0].id, default_outcome(domain, &priors(0.5, 0.5)).id);
        }
    }
}
