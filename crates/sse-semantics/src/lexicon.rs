//! Fixed keyword vocabularies and the ordered classification tables built
//! from them.

use sse_types::{Domain, Mode, RuleTable};

/// Tokens marking a collective or institutional situation.
pub const COLLECTIVE_MARKERS: &[&str] = &[
    "government",
    "policy",
    "tax",
    "public",
    "population",
    "platform",
    "algorithm",
    "commuters",
    "businesses",
    "society",
    "community",
];

/// Tokens marking an interpersonal situation.
pub const INTERPERSONAL_MARKERS: &[&str] = &[
    "manager",
    "employee",
    "coworker",
    "hr",
    "promotion",
    "confronts",
    "confront",
    "partner",
    "friend",
    "team",
];

pub const ACTOR_VOCABULARY: &[&str] = &[
    "student",
    "employee",
    "manager",
    "government",
    "creators",
    "commuters",
];

pub const INSTITUTION_VOCABULARY: &[&str] =
    &["hr", "government", "platform", "school", "exam", "company"];

pub const CONFLICT_MARKERS: &[&str] = &["denied", "conflict", "confronts", "cheat", "unpaid"];

pub const EDUCATION_KEYWORDS: &[&str] = &["exam", "student", "cheat"];
pub const WORKPLACE_KEYWORDS: &[&str] = &["employee", "manager", "promotion", "hr"];
pub const POLICY_KEYWORDS: &[&str] = &["tax", "government", "commuters", "businesses"];
pub const MEDIA_KEYWORDS: &[&str] = &["platform", "algorithm", "creators"];

/// Mode classification: collective beats interpersonal beats individual.
pub fn mode_rules() -> RuleTable<Mode> {
    RuleTable::new(Mode::A)
        .rule("collective", COLLECTIVE_MARKERS, Mode::C)
        .rule("interpersonal", INTERPERSONAL_MARKERS, Mode::B)
}

/// Domain classification in priority order.
pub fn domain_rules() -> RuleTable<Domain> {
    RuleTable::new(Domain::General)
        .rule("education", EDUCATION_KEYWORDS, Domain::Education)
        .rule("workplace", WORKPLACE_KEYWORDS, Domain::Workplace)
        .rule("policy", POLICY_KEYWORDS, Domain::Policy)
        .rule("media", MEDIA_KEYWORDS, Domain::Media)
}
