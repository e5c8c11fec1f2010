//! Built-in demo situations with their expected mode and outcome.

use serde::Serialize;
use sse_types::Mode;

/// A known example situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DemoExample {
    pub id: &'static str,
    pub situation: &'static str,
    pub expected_mode: Mode,
    pub expected_outcome_id: &'static str,
}

// Sorted by id.
const EXAMPLES: &[DemoExample] = &[
    DemoExample {
        id: "exam_cheating",
        situation: "A student notices that the invigilator has stepped out briefly during an \
                    exam and considers whether to cheat.",
        expected_mode: Mode::A,
        expected_outcome_id: "no_cheat_internal_conflict",
    },
    DemoExample {
        id: "manager_confrontation",
        situation: "An employee confronts their manager about unpaid overtime while knowing HR \
                    may become involved.",
        expected_mode: Mode::B,
        expected_outcome_id: "cautious_raise_issue",
    },
    DemoExample {
        id: "platform_algorithm_change",
        situation: "A social media platform changes its algorithm, reducing visibility for \
                    independent creators.",
        expected_mode: Mode::C,
        expected_outcome_id: "creator_migration_criticism",
    },
    DemoExample {
        id: "public_tax_policy",
        situation: "A government announces a sudden increase in fuel taxes, affecting commuters \
                    and small businesses.",
        expected_mode: Mode::C,
        expected_outcome_id: "dissatisfaction_protest",
    },
    DemoExample {
        id: "workplace_promotion",
        situation: "An employee who has consistently exceeded performance targets has been \
                    denied a promotion without a clear explanation and is deciding how to \
                    respond.",
        expected_mode: Mode::B,
        expected_outcome_id: "quiet_job_search",
    },
];

/// All demo examples, in id order.
pub fn examples() -> &'static [DemoExample] {
    EXAMPLES
}

/// Look up a demo example by id.
pub fn example(id: &str) -> Option<&'static DemoExample> {
    EXAMPLES.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_sorted_and_unique() {
        let ids: Vec<&str> = examples().iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn lookup() {
        assert_eq!(example("public_tax_policy").unwrap().expected_mode, Mode::C);
        assert!(example("unknown").is_none());
    }

    #[test]
    fn situation_text_joined_cleanly() {
        let e = example("exam_cheating").unwrap();
        assert!(e.situation.contains("during an exam and considers"));
        assert!(!e.situation.contains("  "));
    }
}
