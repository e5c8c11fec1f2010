//! Literal outcomes for the known example situations.

use sse_types::Outcome;

/// Catalogued outcome for a known example id.
pub fn example_outcome(example_id: &str) -> Option<Outcome> {
    let outcome = match example_id {
        "exam_cheating" => Outcome::new(
            "no_cheat_internal_conflict",
            "The student does not cheat but experiences internal conflict.",
            0.72,
            &["risk aversion", "norm compliance"],
        ),
        "workplace_promotion" => Outcome::new(
            "quiet_job_search",
            "The employee quietly searches for another job while maintaining performance.",
            0.68,
            &["career preservation", "avoid open conflict"],
        ),
        "manager_confrontation" => Outcome::new(
            "cautious_raise_issue",
            "The employee raises the issue cautiously rather than aggressively.",
            0.66,
            &["risk management", "institutional awareness"],
        ),
        "public_tax_policy" => Outcome::new(
            "dissatisfaction_protest",
            "Widespread dissatisfaction and short-term protest activity among affected groups.",
            0.64,
            &["collective grievance", "cost shock"],
        ),
        "platform_algorithm_change" => Outcome::new(
            "creator_migration_criticism",
            "Gradual creator migration and increased public criticism of the platform.",
            0.62,
            &["platform skepticism", "audience maintenance"],
        ),
        _ => return None,
    };
    Some(outcome)
}
